use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use viewtype_decoration::{
    ContainerBounds, DecorationHost, ItemKey, LayoutStrategy, UniformSpans, ViewType,
};

/// Layout strategy of a [`ListSnapshot`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutKind {
    #[default]
    Linear,
    /// A grid of `span_count` columns. `span_sizes[i]` is the number of columns item `i`
    /// occupies; an empty list means every item spans one column.
    Grid {
        span_count: usize,
        span_sizes: Vec<usize>,
    },
}

/// One displayed item instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildItem<K> {
    pub key: K,
    /// Adapter position bound to this instance, `None` while it animates out.
    pub position: Option<usize>,
    /// Top edge after layout.
    pub top: i32,
    pub collapsed: bool,
}

impl<K> ChildItem<K> {
    pub fn new(key: K, position: usize, top: i32) -> Self {
        Self {
            key,
            position: Some(position),
            top,
            collapsed: false,
        }
    }

    /// An instance that lost its position (removal animation).
    pub fn detached(key: K, top: i32) -> Self {
        Self {
            key,
            position: None,
            top,
            collapsed: false,
        }
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }
}

#[cfg(feature = "std")]
type ChildIndex<K> = HashMap<K, usize>;
#[cfg(not(feature = "std"))]
type ChildIndex<K> = BTreeMap<K, usize>;

/// An owned, framework-neutral [`DecorationHost`].
///
/// Adapters (immediate-mode UIs in particular) fill one per frame from their own state:
/// the view type of every adapter position, the displayed instances in drawing order, the
/// layout strategy and the container geometry.
///
/// Children are indexed by key, so host queries are constant time (logarithmic without
/// `std`). When two children share a key the first one wins.
#[derive(Clone, Debug)]
pub struct ListSnapshot<K> {
    view_types: Vec<ViewType>,
    children: Vec<ChildItem<K>>,
    index: ChildIndex<K>,
    layout: LayoutKind,
    container: ContainerBounds,
    adapter_attached: bool,
}

impl<K> ListSnapshot<K> {
    /// Creates a linear snapshot for the given per-position view types.
    pub fn new(view_types: Vec<ViewType>, container: ContainerBounds) -> Self {
        Self {
            view_types,
            children: Vec::new(),
            index: ChildIndex::new(),
            layout: LayoutKind::Linear,
            container,
            adapter_attached: true,
        }
    }

    /// A snapshot of a container with no adapter attached.
    pub fn without_adapter(container: ContainerBounds) -> Self {
        Self {
            view_types: Vec::new(),
            children: Vec::new(),
            index: ChildIndex::new(),
            layout: LayoutKind::Linear,
            container,
            adapter_attached: false,
        }
    }

    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_grid(self, span_count: usize, span_sizes: Vec<usize>) -> Self {
        self.with_layout(LayoutKind::Grid {
            span_count,
            span_sizes,
        })
    }

    pub fn view_types(&self) -> &[ViewType] {
        &self.view_types
    }

    pub fn children(&self) -> &[ChildItem<K>] {
        &self.children
    }

    pub fn layout_kind(&self) -> &LayoutKind {
        &self.layout
    }

    pub fn item_count(&self) -> usize {
        self.view_types.len()
    }
}

impl<K: ItemKey + Clone> ListSnapshot<K> {
    pub fn with_children(mut self, children: Vec<ChildItem<K>>) -> Self {
        self.children = children;
        self.rebuild_index();
        self
    }

    pub fn push_child(&mut self, child: ChildItem<K>) {
        self.index
            .entry(child.key.clone())
            .or_insert(self.children.len());
        self.children.push(child);
    }

    /// Edits the displayed children in place and re-indexes them afterwards.
    pub fn update_children(&mut self, f: impl FnOnce(&mut Vec<ChildItem<K>>)) {
        f(&mut self.children);
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, child) in self.children.iter().enumerate() {
            self.index.entry(child.key.clone()).or_insert(i);
        }
    }

    fn child(&self, key: &K) -> Option<&ChildItem<K>> {
        self.index.get(key).and_then(|&i| self.children.get(i))
    }
}

impl ListSnapshot<usize> {
    /// Linear snapshot where instance `i` shows position `i`, stacked with fixed-height rows.
    ///
    /// Tops ignore decoration offsets; use it for previews and tests where the exact vertical
    /// placement is not important.
    pub fn stacked(view_types: Vec<ViewType>, container: ContainerBounds, row_height: i32) -> Self {
        let children = (0..view_types.len())
            .map(|i| ChildItem::new(i, i, i as i32 * row_height))
            .collect();
        Self::new(view_types, container).with_children(children)
    }
}

static UNIFORM: UniformSpans = UniformSpans;

impl<K: ItemKey + Clone> DecorationHost for ListSnapshot<K> {
    type Key = K;

    fn has_adapter(&self) -> bool {
        self.adapter_attached
    }

    fn item_view_type(&self, position: usize) -> ViewType {
        match self.view_types.get(position) {
            Some(&view_type) => view_type,
            None => {
                awarn!(
                    position,
                    count = self.view_types.len(),
                    "ListSnapshot: position out of range"
                );
                viewtype_decoration::INVALID_VIEW_TYPE
            }
        }
    }

    fn layout(&self) -> LayoutStrategy<'_> {
        match &self.layout {
            LayoutKind::Linear => LayoutStrategy::Linear,
            LayoutKind::Grid {
                span_count,
                span_sizes,
            } if span_sizes.is_empty() => LayoutStrategy::grid(*span_count, &UNIFORM),
            LayoutKind::Grid {
                span_count,
                span_sizes,
            } => LayoutStrategy::grid(*span_count, span_sizes),
        }
    }

    fn adapter_position(&self, item: &K) -> Option<usize> {
        self.child(item).and_then(|c| c.position)
    }

    fn is_collapsed(&self, item: &K) -> bool {
        self.child(item).is_some_and(|c| c.collapsed)
    }

    fn item_top(&self, item: &K) -> i32 {
        self.child(item).map_or(0, |c| c.top)
    }

    fn container(&self) -> ContainerBounds {
        self.container
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&K)) {
        for child in &self.children {
            f(&child.key);
        }
    }
}
