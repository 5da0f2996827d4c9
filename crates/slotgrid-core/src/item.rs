//! The leaf value placed into grid cells.

use std::fmt;
use std::rc::Rc;

use crate::event::ClickEvent;
use crate::identity::ItemId;

/// Activation handler attached to an item or pane.
///
/// Cloning a handler clones the `Rc` handle, so copies of an item share the
/// same callback and its captured state.
pub type ClickHandler = Rc<dyn Fn(&ClickEvent)>;

/// A renderable leaf wrapping the host's item descriptor `T`.
///
/// The engine never interprets `T`; it only assigns items to absolute grid
/// cells. Cloning produces an independently mutable item that keeps the
/// same [`ItemId`] and shares the same callback handle.
#[derive(Clone)]
pub struct VisualItem<T> {
    content: T,
    visible: bool,
    id: ItemId,
    on_click: Option<ClickHandler>,
}

impl<T: Clone> VisualItem<T> {
    /// Create a visible item with no activation handler.
    #[must_use]
    pub fn new(content: T) -> Self {
        Self {
            content,
            visible: true,
            id: ItemId::next(),
            on_click: None,
        }
    }

    /// Attach an activation handler.
    #[must_use]
    pub fn on_click(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// The host descriptor this item renders as.
    #[must_use]
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Replace the host descriptor.
    pub fn set_content(&mut self, content: T) {
        self.content = content;
    }

    /// Whether the item is written to the grid during rendering.
    ///
    /// An invisible item still consumes its placement slot in sequential
    /// layouts; it is just never written.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the item.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Stable identity, preserved across clones.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Replace the activation handler.
    pub fn set_click_handler(&mut self, handler: Option<ClickHandler>) {
        self.on_click = handler;
    }

    /// Invoke the activation handler, if any.
    pub fn fire_click(&self, event: &ClickEvent) {
        if let Some(handler) = &self.on_click {
            handler(event);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for VisualItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualItem")
            .field("content", &self.content)
            .field("visible", &self.visible)
            .field("id", &self.id)
            .field("on_click", &self.on_click.as_ref().map(|_| ".."))
            .finish()
    }
}
