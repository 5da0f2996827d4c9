//! Stable identity tokens for panes and items.
//!
//! Identity is a value, not reference equality: cloning a pane or item
//! carries the token along, so a clone is the *same logical entity* to any
//! host-side change detection. Fresh tokens come from a process-wide
//! counter.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_PANE_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identifier for a pane, preserved by cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaneId(u64);

impl PaneId {
    /// Allocate a fresh, process-unique pane identity.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_PANE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Stable identifier for a visual item, preserved by cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Allocate a fresh, process-unique item identity.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}
