#![forbid(unsafe_code)]

//! Core data model for the slotgrid layout engine.
//!
//! This crate holds the leaf types every layout strategy builds on: the
//! addressable [`GridSurface`] the render pass writes into, the
//! [`VisualItem`] leaf value, the boolean placement [`Mask`], the identity
//! tokens preserved across copies, and the click event/outcome pair shared
//! by the routing protocol. No layout logic lives here.

pub mod event;
pub mod grid;
pub mod identity;
pub mod item;
pub mod mask;

pub use event::{ClickEvent, ClickOutcome};
pub use grid::GridSurface;
pub use identity::{ItemId, PaneId};
pub use item::{ClickHandler, VisualItem};
pub use mask::{Mask, MaskError};
