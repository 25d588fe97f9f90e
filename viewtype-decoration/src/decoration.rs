use crate::key::ItemKey;
use crate::{
    DecorationConfig, DecorationHost, DividerCanvas, ItemOffsets, OffsetCache, compute_offsets,
    divider_rect, previous_view_type,
};

/// View-type aware spacing decoration with optional divider painting.
///
/// Hosts call [`Self::item_offsets`] for every item during layout and [`Self::draw_over`]
/// once after layout. The offsets computed during layout are cached per item instance so
/// the draw pass paints exactly the gaps that were reserved.
///
/// Without a divider style in the configuration the draw pass paints nothing.
#[derive(Clone, Debug)]
pub struct ViewTypeDecoration<K> {
    config: DecorationConfig,
    cache: OffsetCache<K>,
}

impl<K: ItemKey + Clone> ViewTypeDecoration<K> {
    pub fn new(config: DecorationConfig) -> Self {
        Self {
            config,
            cache: OffsetCache::new(),
        }
    }

    pub fn config(&self) -> &DecorationConfig {
        &self.config
    }

    pub fn cache(&self) -> &OffsetCache<K> {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut OffsetCache<K> {
        &mut self.cache
    }

    /// Layout hook: computes and caches the offsets of `item`.
    ///
    /// Returns `None` when the item gets no decoration offsets this pass: no adapter is
    /// attached, the item has no adapter position, or it is collapsed. A collapsed item keeps
    /// whatever offsets were cached for it before.
    pub fn item_offsets<H>(&mut self, host: &H, item: &K) -> Option<ItemOffsets>
    where
        H: DecorationHost<Key = K> + ?Sized,
    {
        if !host.has_adapter() {
            return None;
        }
        let position = host.adapter_position(item)?;
        if host.is_collapsed(item) {
            dtrace!(position, "item_offsets: collapsed item skipped");
            return None;
        }

        let placement = host.layout().classify(position);
        let view_type = host.item_view_type(position);
        let previous = previous_view_type(position, |p| host.item_view_type(p));
        let offsets = compute_offsets(position, view_type, previous, placement, &self.config);

        self.cache.store(item.clone(), offsets);
        Some(offsets)
    }

    /// Draw hook: paints a divider in the top gap of every displayed item except the first.
    ///
    /// Items without a resolved position or without cached offsets are skipped.
    pub fn draw_over<H, C>(&self, host: &H, canvas: &mut C)
    where
        H: DecorationHost<Key = K> + ?Sized,
        C: DividerCanvas + ?Sized,
    {
        let Some(style) = self.config.divider() else {
            return;
        };
        if !host.has_adapter() {
            return;
        }
        let container = host.container();
        let insets = self.config.divider_insets();

        host.for_each_child(&mut |item| {
            let Some(position) = host.adapter_position(item) else {
                return;
            };
            if position == 0 {
                return;
            }
            let Some(offsets) = self.cache.retrieve(item) else {
                dtrace!(position, "draw_over: no cached offsets");
                return;
            };
            let rect = divider_rect(container, insets, host.item_top(item), offsets);
            canvas.fill_rect(rect, style);
        });
    }
}
