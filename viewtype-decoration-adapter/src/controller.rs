use alloc::vec::Vec;

use viewtype_decoration::{
    DecorationConfig, DecorationHost, ItemKey, ItemOffsets, ViewTypeDecoration,
};

use crate::DisplayList;

/// Offsets and divider commands produced for one frame.
#[derive(Clone, Debug)]
pub struct DecoratedFrame<K> {
    /// Offsets computed for each displayed item during the layout pass, in drawing order.
    /// Items skipped by the layout hook are absent.
    pub offsets: Vec<(K, ItemOffsets)>,
    pub display_list: DisplayList,
}

/// A framework-neutral driver that wraps a [`ViewTypeDecoration`] and runs its hooks in
/// the order a host framework would: one layout pass over every displayed item, then one
/// draw pass.
///
/// This type does not hold any UI objects. Adapters hand it a [`DecorationHost`] per frame.
#[derive(Clone, Debug)]
pub struct DecorationController<K> {
    decoration: ViewTypeDecoration<K>,
}

impl<K: ItemKey + Clone> DecorationController<K> {
    pub fn new(config: DecorationConfig) -> Self {
        Self {
            decoration: ViewTypeDecoration::new(config),
        }
    }

    pub fn from_decoration(decoration: ViewTypeDecoration<K>) -> Self {
        Self { decoration }
    }

    pub fn decoration(&self) -> &ViewTypeDecoration<K> {
        &self.decoration
    }

    pub fn decoration_mut(&mut self) -> &mut ViewTypeDecoration<K> {
        &mut self.decoration
    }

    pub fn into_decoration(self) -> ViewTypeDecoration<K> {
        self.decoration
    }

    /// Runs the layout hook for every displayed item and emits the offsets it produced.
    pub fn layout<H>(&mut self, host: &H, mut emit: impl FnMut(&K, ItemOffsets))
    where
        H: DecorationHost<Key = K> + ?Sized,
    {
        let decoration = &mut self.decoration;
        host.for_each_child(&mut |item| {
            if let Some(offsets) = decoration.item_offsets(host, item) {
                emit(item, offsets);
            }
        });
    }

    /// Runs the draw hook into `display_list`.
    pub fn draw<H>(&self, host: &H, display_list: &mut DisplayList)
    where
        H: DecorationHost<Key = K> + ?Sized,
    {
        self.decoration.draw_over(host, display_list);
    }

    /// Runs a full layout + draw cycle.
    pub fn frame<H>(&mut self, host: &H) -> DecoratedFrame<K>
    where
        H: DecorationHost<Key = K> + ?Sized,
    {
        let mut offsets = Vec::new();
        self.layout(host, |item, o| offsets.push((item.clone(), o)));
        let mut display_list = DisplayList::new();
        self.draw(host, &mut display_list);
        adebug!(
            laid_out = offsets.len(),
            dividers = display_list.len(),
            "DecorationController::frame"
        );
        DecoratedFrame {
            offsets,
            display_list,
        }
    }

    /// Drops cached offsets of instances the host no longer displays.
    ///
    /// Returns the number of entries removed.
    pub fn prune<H>(&mut self, host: &H) -> usize
    where
        H: DecorationHost<Key = K> + ?Sized,
    {
        let mut displayed = Vec::new();
        host.for_each_child(&mut |item| displayed.push(item.clone()));

        let cache = self.decoration.cache_mut();
        let before = cache.len();
        cache.retain(|key| displayed.contains(key));
        let removed = before - cache.len();
        atrace!(removed, "DecorationController::prune");
        removed
    }
}
