use alloc::vec::Vec;
use core::fmt;

use crate::ItemPlacement;

/// Span configuration of a grid layout.
///
/// Mirrors what grid layout managers expose: how many columns an item occupies and which
/// column it starts in.
pub trait SpanSizeLookup {
    /// Number of columns occupied by the item at `position`.
    fn span_size(&self, position: usize) -> usize;

    /// Column the item at `position` starts in, for a grid of `span_count` columns.
    ///
    /// The default walks every preceding item and wraps to a new row whenever the next item
    /// would not fit. Span sizes are clamped to `1..=span_count` along the way. Override it
    /// when the host caches span indexes.
    fn span_index(&self, position: usize, span_count: usize) -> usize {
        if span_count == 0 {
            return 0;
        }
        let span_size = self.span_size(position).clamp(1, span_count);
        if span_size == span_count {
            return 0;
        }
        let mut span_index: usize = 0;
        for i in 0..position {
            let size = self.span_size(i).clamp(1, span_count);
            span_index = span_index.saturating_add(size);
            if span_index == span_count {
                span_index = 0;
            } else if span_index > span_count {
                // Did not fit; the item moved to the next row.
                span_index = size;
            }
        }
        if span_index.saturating_add(span_size) <= span_count {
            span_index
        } else {
            0
        }
    }
}

/// Every item occupies exactly one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformSpans;

impl SpanSizeLookup for UniformSpans {
    fn span_size(&self, _position: usize) -> usize {
        1
    }

    fn span_index(&self, position: usize, span_count: usize) -> usize {
        position % span_count.max(1)
    }
}

/// Explicit span sizes per position; positions past the end span one column.
impl SpanSizeLookup for Vec<usize> {
    fn span_size(&self, position: usize) -> usize {
        self.get(position).copied().unwrap_or(1)
    }
}

/// Span sizes supplied by a closure.
#[derive(Clone, Copy)]
pub struct FnSpans<F>(pub F);

impl<F: Fn(usize) -> usize> SpanSizeLookup for FnSpans<F> {
    fn span_size(&self, position: usize) -> usize {
        (self.0)(position)
    }
}

impl<F> fmt::Debug for FnSpans<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSpans(..)")
    }
}

/// Snapshot of the container's layout strategy.
///
/// Linear layouts place one item per row. Grid layouts expose a span count and a
/// [`SpanSizeLookup`]; a grid without usable span information (`span_count == 0`) is
/// classified like a linear layout.
#[derive(Clone, Copy)]
pub enum LayoutStrategy<'a> {
    Linear,
    Grid {
        span_count: usize,
        spans: &'a dyn SpanSizeLookup,
    },
}

impl<'a> LayoutStrategy<'a> {
    pub fn grid(span_count: usize, spans: &'a dyn SpanSizeLookup) -> Self {
        Self::Grid { span_count, spans }
    }

    /// Returns `(span_count, lookup)` when this is a grid with span information.
    fn spans(&self) -> Option<(usize, &'a dyn SpanSizeLookup)> {
        match *self {
            Self::Linear => None,
            Self::Grid { span_count: 0, .. } => {
                dwarn!("LayoutStrategy: grid without span count, treating as linear");
                None
            }
            Self::Grid { span_count, spans } => Some((span_count, spans)),
        }
    }

    fn span_size(span_count: usize, spans: &dyn SpanSizeLookup, position: usize) -> usize {
        let size = spans.span_size(position);
        if size == 0 || size > span_count {
            dwarn!(position, size, span_count, "LayoutStrategy: span size out of range");
            return size.clamp(1, span_count);
        }
        size
    }

    /// Whether the item at `position` belongs to the first row.
    ///
    /// For grids this is `position < span_count`, which is only exact when every item in
    /// the first row spans a single column. Items with wider spans before `span_count` make
    /// later items count as first-row even though they wrapped.
    pub fn is_first_row(&self, position: usize) -> bool {
        match self.spans() {
            None => position == 0,
            Some((span_count, _)) => position < span_count,
        }
    }

    /// Whether the item at `position` spans the whole row.
    pub fn is_full_row(&self, position: usize) -> bool {
        match self.spans() {
            None => true,
            Some((span_count, spans)) => Self::span_size(span_count, spans, position) == span_count,
        }
    }

    /// Whether the item at `position` starts in the first column.
    pub fn is_left_edge(&self, position: usize) -> bool {
        match self.spans() {
            None => true,
            Some((span_count, spans)) => spans.span_index(position, span_count) == 0,
        }
    }

    /// Whether the item at `position` ends in the last column.
    pub fn is_right_edge(&self, position: usize) -> bool {
        match self.spans() {
            None => true,
            Some((span_count, spans)) => {
                let size = Self::span_size(span_count, spans, position);
                spans.span_index(position, span_count).saturating_add(size) == span_count
            }
        }
    }

    pub fn classify(&self, position: usize) -> ItemPlacement {
        let Some((span_count, spans)) = self.spans() else {
            return ItemPlacement::linear(position);
        };
        let size = Self::span_size(span_count, spans, position);
        let index = spans.span_index(position, span_count);
        ItemPlacement {
            is_first: position < span_count,
            is_full_row: size == span_count,
            is_left_edge: index == 0,
            is_right_edge: index.saturating_add(size) == span_count,
        }
    }
}

impl fmt::Debug for LayoutStrategy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::Grid { span_count, .. } => f
                .debug_struct("Grid")
                .field("span_count", span_count)
                .finish_non_exhaustive(),
        }
    }
}
