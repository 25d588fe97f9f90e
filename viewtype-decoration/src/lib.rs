//! Headless, view-type aware spacing and divider decoration for list and grid UIs.
//!
//! For adapter-level utilities (an owned host snapshot, a recording canvas, a per-frame
//! controller), see the `viewtype-decoration-adapter` crate.
//!
//! Items in a heterogeneous list get their margins from a small ordered rule set:
//! - a default top space, and a separate top space for the first row,
//! - default left/right space, overridable per view type (applied only on the edges an item
//!   actually touches in a grid),
//! - top space overrides for specific `(previous type, type)` pairs.
//!
//! The offsets computed during layout are cached per on-screen item instance, so a later
//! draw pass can paint divider lines into exactly the gaps that were reserved.
//!
//! It is UI-agnostic. A UI layer is expected to provide, through [`DecorationHost`]:
//! - the view type of each adapter position
//! - the layout strategy (linear, or grid with span sizes)
//! - the position, visibility and top edge of each displayed item
//!
//! ```rust
//! use viewtype_decoration::{DecorationConfig, ItemPlacement, compute_offsets};
//!
//! let config = DecorationConfig::builder()
//!     .default_space(10)
//!     .side_space(2, 5)
//!     .build();
//!
//! let offsets = compute_offsets(1, 2, 1, ItemPlacement::linear(1), &config);
//! assert_eq!((offsets.left, offsets.top, offsets.right), (5, 10, 5));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod config;
mod decoration;
mod host;
mod key;
mod layout;
mod painter;
mod resolver;
mod types;


pub use cache::OffsetCache;
pub use config::{DecorationConfig, DecorationConfigBuilder};
pub use decoration::ViewTypeDecoration;
pub use host::DecorationHost;
pub use key::ItemKey;
pub use layout::{FnSpans, LayoutStrategy, SpanSizeLookup, UniformSpans};
pub use painter::{DividerCanvas, DividerStyle, divider_rect};
pub use resolver::{compute_offsets, previous_view_type};
pub use types::{
    AdjacentRule, ContainerBounds, DividerInsets, INVALID_VIEW_TYPE, ItemOffsets, ItemPlacement,
    SideSpaceRule, ViewType,
};

pub use kurbo;
pub use peniko;
