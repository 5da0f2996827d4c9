//! A keyed collection of pages, only one of which is live.

use ahash::AHashMap;
use slotgrid_core::{ClickEvent, ClickOutcome, GridSurface, VisualItem};

use crate::common::{Offset, PaneCommon, PaneError};
use crate::outline::OutlinePane;
use crate::Pane;

/// A pane spreading its children over multiple pages.
///
/// Pages are keyed by integer; keys need not be contiguous. Each page holds
/// an ordered list of child panes kept sorted ascending by priority. Only
/// the current page participates in rendering and routing; a current page
/// that was never populated renders nothing and matches nothing.
#[derive(Debug, Clone)]
pub struct PaginatedPane<T> {
    common: PaneCommon,
    pages: AHashMap<u32, Vec<Pane<T>>>,
    page: u32,
}

impl<T: Clone> PaginatedPane<T> {
    /// Create a paginated pane with no pages, positioned on page 0.
    pub fn new(length: usize, height: usize) -> Result<Self, PaneError> {
        Ok(Self {
            common: PaneCommon::new(length, height)?,
            pages: AHashMap::new(),
            page: 0,
        })
    }

    /// Shared pane state.
    #[must_use]
    pub fn common(&self) -> &PaneCommon {
        &self.common
    }

    /// Shared pane state, mutable.
    pub fn common_mut(&mut self) -> &mut PaneCommon {
        &mut self.common
    }

    /// Resize the pane's columns.
    pub fn set_length(&mut self, length: usize) -> Result<(), PaneError> {
        self.common.set_length(length)
    }

    /// Resize the pane's rows.
    pub fn set_height(&mut self, height: usize) -> Result<(), PaneError> {
        self.common.set_height(height)
    }

    /// The current page key.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of registered pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Add a pane to a page, creating the page if needed. The page's list
    /// stays sorted ascending by priority; insertion order breaks ties.
    pub fn add_pane(&mut self, page: u32, pane: Pane<T>) {
        let list = self.pages.entry(page).or_default();
        list.push(pane);
        list.sort_by_key(|pane| pane.common().priority());
    }

    /// Switch to a registered page. Switching to an unregistered key is a
    /// configuration error and leaves the current page unchanged.
    pub fn set_page(&mut self, page: u32) -> Result<(), PaneError> {
        if !self.pages.contains_key(&page) {
            return Err(PaneError::PageNotFound { page });
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(pane = self.common.id().get(), page, "page switch");
        self.page = page;
        Ok(())
    }

    /// The panes of a registered page.
    pub fn panes_of(&self, page: u32) -> Result<&[Pane<T>], PaneError> {
        self.pages
            .get(&page)
            .map(Vec::as_slice)
            .ok_or(PaneError::PageNotFound { page })
    }

    /// Remove every page.
    pub fn clear(&mut self) {
        self.pages.clear();
    }

    /// Bucket raw host descriptors into consecutively keyed pages of fresh
    /// outline panes. See [`populate_with_items`](Self::populate_with_items).
    pub fn populate_with_contents(&mut self, contents: impl IntoIterator<Item = T>) {
        self.populate_with_items(contents.into_iter().map(VisualItem::new).collect());
    }

    /// Bucket pre-built items into consecutively keyed pages of fresh
    /// outline panes.
    ///
    /// Page capacity is `length * height`; `max(ceil(count / capacity), 1)`
    /// pages are created under keys `0..pages_needed`, overwriting whatever
    /// was previously registered at those keys. An empty input still
    /// produces one empty page.
    pub fn populate_with_items(&mut self, items: Vec<VisualItem<T>>) {
        let capacity = self.common.length() * self.common.height();
        let pages_needed = items.len().div_ceil(capacity).max(1);

        let mut items = items.into_iter();
        for page in 0..pages_needed {
            // PaneCommon validated the dimensions, so this cannot fail.
            let Ok(mut outline) = OutlinePane::new(self.common.length(), self.common.height())
            else {
                return;
            };
            for item in items.by_ref().take(capacity) {
                outline.add_item(item);
            }
            self.pages.insert(page as u32, vec![Pane::Outline(outline)]);
        }
    }

    /// Render the current page.
    pub fn display(
        &mut self,
        surface: &mut GridSurface<T>,
        offset: Offset,
        max_length: usize,
        max_height: usize,
    ) {
        if !self.common.is_visible() {
            return;
        }
        let Some(panes) = self.pages.get_mut(&self.page) else {
            return;
        };
        let child_offset = offset.shifted(self.common.x(), self.common.y());
        let length = self.common.length().min(max_length);
        let height = self.common.height().min(max_height);
        for pane in panes {
            pane.display(surface, child_offset, length, height);
        }
    }

    /// Route a click to this pane and broadcast it over the current page.
    pub fn click(
        &mut self,
        event: &ClickEvent,
        offset: Offset,
        max_length: usize,
        max_height: usize,
    ) -> ClickOutcome {
        if !self.common.is_visible() {
            return ClickOutcome::MISS;
        }
        if self
            .common
            .local_coords(event.slot, event.row_width, offset, max_length, max_height)
            .is_none()
        {
            return ClickOutcome::MISS;
        }

        self.common.fire_click(event);

        let length = self.common.length().min(max_length);
        let height = self.common.height().min(max_height);
        let child_offset = offset.shifted(self.common.x(), self.common.y());

        let mut outcome = ClickOutcome::MISS;
        if let Some(panes) = self.pages.get_mut(&self.page) {
            for pane in panes {
                outcome |= pane.click(event, child_offset, length, height);
            }
        }
        outcome
    }
}
