//! Adapter utilities for the `viewtype-decoration` crate.
//!
//! The `viewtype-decoration` crate is UI-agnostic and only defines the hooks and the
//! [`viewtype_decoration::DecorationHost`] contract. This crate provides small,
//! framework-neutral helpers commonly needed by adapters:
//!
//! - [`ListSnapshot`]: an owned host filled from the adapter's own state each frame
//! - [`DisplayList`]: a canvas that records divider fills for later replay
//! - [`DecorationController`]: runs a layout pass and a draw pass in host order
//!
//! This crate is intentionally framework-agnostic (no bindings to any toolkit).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod display_list;
mod snapshot;

#[cfg(test)]
mod tests;

pub use controller::{DecoratedFrame, DecorationController};
pub use display_list::{DisplayList, DrawCommand};
pub use snapshot::{ChildItem, LayoutKind, ListSnapshot};
