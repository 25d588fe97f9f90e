#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type OffsetMap<K> = HashMap<K, crate::ItemOffsets>;
#[cfg(not(feature = "std"))]
pub(crate) type OffsetMap<K> = BTreeMap<K, crate::ItemOffsets>;

/// Identity of an on-screen item instance.
///
/// Under `std` this is `Hash + Eq`; without it, `Ord`.
#[cfg(feature = "std")]
pub trait ItemKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> ItemKey for K {}

#[cfg(not(feature = "std"))]
pub trait ItemKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> ItemKey for K {}
