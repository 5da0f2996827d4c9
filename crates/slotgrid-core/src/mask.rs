//! Boolean placement mask for sequential layouts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors produced while constructing or resizing a [`Mask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// A mask must cover at least one cell in each direction.
    ZeroDimension,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A row contained a character other than `'0'` or `'1'`.
    InvalidCell {
        row: usize,
        column: usize,
        found: char,
    },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "mask dimensions must be positive"),
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "mask row {row} has {actual} cells, expected {expected}"
            ),
            Self::InvalidCell { row, column, found } => write!(
                f,
                "mask cell ({column}, {row}) is {found:?}, expected '0' or '1'"
            ),
        }
    }
}

impl std::error::Error for MaskError {}

/// A row-major boolean grid marking which cells of a pane are eligible for
/// sequential item placement.
///
/// Masks are immutable after construction; the resizing operations return
/// new masks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mask {
    length: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Mask {
    /// Create a mask of the given dimensions with every cell enabled.
    pub fn filled(length: usize, height: usize) -> Result<Self, MaskError> {
        if length == 0 || height == 0 {
            return Err(MaskError::ZeroDimension);
        }
        Ok(Self {
            length,
            height,
            cells: vec![true; length * height],
        })
    }

    /// Parse a mask from rows of `'0'`/`'1'` characters, top to bottom.
    ///
    /// All rows must have the same non-zero length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MaskError> {
        let Some(first) = rows.first() else {
            return Err(MaskError::ZeroDimension);
        };
        let length = first.as_ref().chars().count();
        if length == 0 {
            return Err(MaskError::ZeroDimension);
        }

        let mut cells = Vec::with_capacity(length * rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let mut actual = 0;
            for (column, ch) in row.as_ref().chars().enumerate() {
                match ch {
                    '0' => cells.push(false),
                    '1' => cells.push(true),
                    found => {
                        return Err(MaskError::InvalidCell {
                            row: row_index,
                            column,
                            found,
                        });
                    }
                }
                actual += 1;
            }
            if actual != length {
                return Err(MaskError::RaggedRow {
                    row: row_index,
                    expected: length,
                    actual,
                });
            }
        }

        Ok(Self {
            length,
            height: rows.len(),
            cells,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at `(x, y)` is enabled. Out-of-range coordinates
    /// are reported as disabled.
    #[must_use]
    pub fn is_enabled(&self, x: usize, y: usize) -> bool {
        if x >= self.length || y >= self.height {
            return false;
        }
        self.cells[y * self.length + x]
    }

    /// The cells of row `y`, left to right, or `None` if out of range.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        if y >= self.height {
            return None;
        }
        Some(&self.cells[y * self.length..(y + 1) * self.length])
    }

    /// The cells of column `x`, top to bottom, or `None` if out of range.
    #[must_use]
    pub fn column(&self, x: usize) -> Option<Vec<bool>> {
        if x >= self.length {
            return None;
        }
        Some((0..self.height).map(|y| self.cells[y * self.length + x]).collect())
    }

    /// Number of enabled cells.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Return a mask with the given number of columns, preserving the flags
    /// of overlapping cells. New cells are enabled.
    pub fn with_length(&self, length: usize) -> Result<Self, MaskError> {
        if length == 0 {
            return Err(MaskError::ZeroDimension);
        }
        let mut cells = vec![true; length * self.height];
        for y in 0..self.height {
            for x in 0..length.min(self.length) {
                cells[y * length + x] = self.cells[y * self.length + x];
            }
        }
        Ok(Self {
            length,
            height: self.height,
            cells,
        })
    }

    /// Return a mask with the given number of rows, preserving the flags of
    /// overlapping cells. New cells are enabled.
    pub fn with_height(&self, height: usize) -> Result<Self, MaskError> {
        if height == 0 {
            return Err(MaskError::ZeroDimension);
        }
        let mut cells = vec![true; self.length * height];
        cells[..self.length * height.min(self.height)]
            .copy_from_slice(&self.cells[..self.length * height.min(self.height)]);
        Ok(Self {
            length: self.length,
            height,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_parses_flags() {
        let mask = Mask::from_rows(&["110", "011"]).unwrap();
        assert_eq!(mask.length(), 3);
        assert_eq!(mask.height(), 2);
        assert!(mask.is_enabled(0, 0));
        assert!(mask.is_enabled(1, 0));
        assert!(!mask.is_enabled(2, 0));
        assert!(!mask.is_enabled(0, 1));
        assert_eq!(mask.enabled_count(), 4);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert_eq!(
            Mask::from_rows(&["110", "01"]),
            Err(MaskError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn from_rows_rejects_foreign_characters() {
        assert_eq!(
            Mask::from_rows(&["1x0"]),
            Err(MaskError::InvalidCell {
                row: 0,
                column: 1,
                found: 'x'
            })
        );
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        let rows: [&str; 0] = [];
        assert_eq!(Mask::from_rows(&rows), Err(MaskError::ZeroDimension));
        assert_eq!(Mask::from_rows(&[""]), Err(MaskError::ZeroDimension));
    }

    #[test]
    fn row_and_column_views() {
        let mask = Mask::from_rows(&["10", "01", "11"]).unwrap();
        assert_eq!(mask.row(1), Some(&[false, true][..]));
        assert_eq!(mask.column(0), Some(vec![true, false, true]));
        assert_eq!(mask.row(3), None);
        assert_eq!(mask.column(2), None);
    }

    #[test]
    fn out_of_range_cells_are_disabled() {
        let mask = Mask::filled(2, 2).unwrap();
        assert!(!mask.is_enabled(2, 0));
        assert!(!mask.is_enabled(0, 5));
    }

    #[test]
    fn growing_enables_new_cells() {
        let mask = Mask::from_rows(&["10", "00"]).unwrap();
        let wider = mask.with_length(3).unwrap();
        assert!(wider.is_enabled(0, 0));
        assert!(!wider.is_enabled(1, 0));
        assert!(wider.is_enabled(2, 0));
        assert!(wider.is_enabled(2, 1));

        let taller = mask.with_height(3).unwrap();
        assert!(!taller.is_enabled(1, 1));
        assert!(taller.is_enabled(0, 2));
        assert!(taller.is_enabled(1, 2));
    }

    #[test]
    fn shrinking_preserves_the_overlap() {
        let mask = Mask::from_rows(&["101", "010"]).unwrap();
        let narrower = mask.with_length(2).unwrap();
        assert_eq!(narrower.row(0), Some(&[true, false][..]));
        assert_eq!(narrower.row(1), Some(&[false, true][..]));

        let shorter = mask.with_height(1).unwrap();
        assert_eq!(shorter.row(0), Some(&[true, false, true][..]));
    }

    #[test]
    fn resize_rejects_zero() {
        let mask = Mask::filled(2, 2).unwrap();
        assert_eq!(mask.with_length(0), Err(MaskError::ZeroDimension));
        assert_eq!(mask.with_height(0), Err(MaskError::ZeroDimension));
    }

    #[test]
    fn serde_round_trip() {
        let mask = Mask::from_rows(&["101", "010"]).unwrap();
        let json = serde_json::to_string(&mask).unwrap();
        let back: Mask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mask);
    }
}
