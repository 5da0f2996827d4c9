//! Shared pane state and the coordinate-transform protocol.
//!
//! Every layout strategy carries a [`PaneCommon`] and resolves clicks
//! through the same slot-to-local transform: subtract the accumulated
//! offset, split by row width with truncated signed division, and accept
//! the cell only if both local coordinates fall inside the clipped pane
//! extents. Render and routing must use the same offset-accumulation rule
//! or the two passes drift apart.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use slotgrid_core::{ClickEvent, ClickHandler, PaneId};

/// Render/click ordering among sibling panes. Containers sort ascending,
/// so higher priorities render later (on top) and are routed last.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Lowest,
    Low,
    #[default]
    Normal,
    High,
    Highest,
}

/// Scan order for sequential placement and packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Row-major: rows top to bottom, columns left to right within a row.
    #[default]
    Horizontal,
    /// Column-major: columns left to right, rows top to bottom within one.
    Vertical,
}

bitflags! {
    /// Mirroring applied to sequential placement coordinates.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Flip: u8 {
        /// Mirror across the vertical axis: `x' = length - x - 1`.
        const HORIZONTAL = 1 << 0;
        /// Mirror across the horizontal axis: `y' = height - y - 1`.
        const VERTICAL = 1 << 1;
    }
}

/// Accumulated parent offset threaded through both tree walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: usize,
    pub y: usize,
}

impl Offset {
    /// The root offset.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Advance the offset by a pane's own origin before descending.
    #[must_use]
    pub const fn shifted(self, dx: usize, dy: usize) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Configuration errors reported synchronously at the point of mutation.
/// The rejected mutation never applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneError {
    /// Pane extents must stay positive for the pane's lifetime.
    ZeroDimension { length: usize, height: usize },
    /// Rotation is only defined in quarter turns.
    RotationNotMultipleOf90 { degrees: u16 },
    /// Rotation is only defined for square panes.
    RotationOnNonSquare { length: usize, height: usize },
    /// An applied mask must have exactly the pane's dimensions.
    MaskDimensionMismatch {
        mask_length: usize,
        mask_height: usize,
        pane_length: usize,
        pane_height: usize,
    },
    /// Lookup or page switch against an unregistered page key.
    PageNotFound { page: u32 },
}

impl fmt::Display for PaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { length, height } => {
                write!(f, "pane dimensions {length}x{height} must be positive")
            }
            Self::RotationNotMultipleOf90 { degrees } => {
                write!(f, "rotation of {degrees} degrees is not a multiple of 90")
            }
            Self::RotationOnNonSquare { length, height } => write!(
                f,
                "rotation requires a square pane, but extents are {length}x{height}"
            ),
            Self::MaskDimensionMismatch {
                mask_length,
                mask_height,
                pane_length,
                pane_height,
            } => write!(
                f,
                "mask is {mask_length}x{mask_height} but the pane is {pane_length}x{pane_height}"
            ),
            Self::PageNotFound { page } => write!(f, "page {page} is not registered"),
        }
    }
}

impl std::error::Error for PaneError {}

/// State shared by every pane variant: origin within the parent, extents,
/// priority, visibility, identity, and the pane's own activation handler.
#[derive(Clone)]
pub struct PaneCommon {
    x: usize,
    y: usize,
    length: usize,
    height: usize,
    priority: Priority,
    visible: bool,
    id: PaneId,
    on_click: Option<ClickHandler>,
}

impl PaneCommon {
    /// Create pane state at origin `(0, 0)`. Extents must be positive.
    pub fn new(length: usize, height: usize) -> Result<Self, PaneError> {
        if length == 0 || height == 0 {
            return Err(PaneError::ZeroDimension { length, height });
        }
        Ok(Self {
            x: 0,
            y: 0,
            length,
            height,
            priority: Priority::Normal,
            visible: true,
            id: PaneId::next(),
            on_click: None,
        })
    }

    /// Column offset within the parent's local space.
    #[must_use]
    pub const fn x(&self) -> usize {
        self.x
    }

    /// Row offset within the parent's local space.
    #[must_use]
    pub const fn y(&self) -> usize {
        self.y
    }

    /// Move the pane within its parent.
    pub fn set_position(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }

    /// Number of columns in the pane's bounding box.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of rows in the pane's bounding box.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    // Dimension writes stay crate-private: variants with dimension-coupled
    // state (the outline mask) must resize it in the same mutation.
    pub(crate) fn set_length(&mut self, length: usize) -> Result<(), PaneError> {
        if length == 0 {
            return Err(PaneError::ZeroDimension {
                length,
                height: self.height,
            });
        }
        self.length = length;
        Ok(())
    }

    pub(crate) fn set_height(&mut self, height: usize) -> Result<(), PaneError> {
        if height == 0 {
            return Err(PaneError::ZeroDimension {
                length: self.length,
                height,
            });
        }
        self.height = height;
        Ok(())
    }

    /// Sibling ordering key.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Set the sibling ordering key.
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Whether the pane participates in rendering and routing at all.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the pane.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Stable identity, preserved across clones.
    #[must_use]
    pub const fn id(&self) -> PaneId {
        self.id
    }

    /// Replace the pane's own activation handler.
    pub fn set_click_handler(&mut self, handler: Option<ClickHandler>) {
        self.on_click = handler;
    }

    /// Invoke the pane's own activation handler, if any.
    pub fn fire_click(&self, event: &ClickEvent) {
        if let Some(handler) = &self.on_click {
            handler(event);
        }
    }

    /// Map an absolute slot index into this pane's local coordinates.
    ///
    /// Returns `None` when the slot falls outside the pane's effective
    /// extents, which are the declared extents clipped by the caller's
    /// `max_length`/`max_height`. The division is truncated and signed, so
    /// a slot left of or above the pane yields a negative local coordinate
    /// and rejects the candidate rather than wrapping into range.
    #[must_use]
    pub fn local_coords(
        &self,
        slot: usize,
        row_width: usize,
        offset: Offset,
        max_length: usize,
        max_height: usize,
    ) -> Option<(usize, usize)> {
        if row_width == 0 {
            return None;
        }
        let row_width = row_width as isize;
        let adjusted = slot as isize
            - (self.x + offset.x) as isize
            - row_width * (self.y + offset.y) as isize;

        let local_x = adjusted % row_width;
        let local_y = adjusted / row_width;

        let length = self.length.min(max_length) as isize;
        let height = self.height.min(max_height) as isize;
        if local_x < 0 || local_x >= length || local_y < 0 || local_y >= height {
            return None;
        }
        Some((local_x as usize, local_y as usize))
    }
}

impl fmt::Debug for PaneCommon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneCommon")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("length", &self.length)
            .field("height", &self.height)
            .field("priority", &self.priority)
            .field("visible", &self.visible)
            .field("id", &self.id)
            .field("on_click", &self.on_click.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Rotate a pane-local coordinate clockwise about the pane's bounding box.
///
/// Callers guarantee `degrees` is a normalized multiple of 90; anything
/// else leaves the coordinate untouched. Inputs may be out of range (a
/// flipped coordinate under a clipped extent), so the arithmetic is signed
/// and the caller re-checks bounds afterwards.
#[must_use]
pub(crate) fn rotate_clockwise(
    x: isize,
    y: isize,
    length: isize,
    height: isize,
    degrees: u16,
) -> (isize, isize) {
    match degrees % 360 {
        90 => (height - 1 - y, x),
        180 => (length - 1 - x, height - 1 - y),
        270 => (y, length - 1 - x),
        _ => (x, y),
    }
}
