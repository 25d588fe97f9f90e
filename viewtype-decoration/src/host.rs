use crate::{ContainerBounds, LayoutStrategy, ViewType};

/// The list container as seen by a decoration.
///
/// Implemented by UI adapters. The decoration never holds on to host objects; it queries
/// them during a hook call and keys cached state by [`Self::Key`].
pub trait DecorationHost {
    /// Stable identity of an on-screen item instance (a view handle, widget id, ...).
    type Key;

    /// Whether an adapter (data source) is attached. Hooks are inert without one.
    fn has_adapter(&self) -> bool;

    /// View type of the data item at `position`.
    fn item_view_type(&self, position: usize) -> ViewType;

    /// The container's current layout strategy.
    fn layout(&self) -> LayoutStrategy<'_>;

    /// Adapter position currently bound to `item`, or `None` while it is being removed or
    /// animated out.
    fn adapter_position(&self, item: &Self::Key) -> Option<usize>;

    /// Whether `item` is collapsed (takes no space and is not drawn).
    fn is_collapsed(&self, item: &Self::Key) -> bool;

    /// Top edge of `item` in drawing coordinates, after layout.
    fn item_top(&self, item: &Self::Key) -> i32;

    fn container(&self) -> ContainerBounds;

    /// Visits every displayed item in the host's drawing order.
    fn for_each_child(&self, f: &mut dyn FnMut(&Self::Key));
}
