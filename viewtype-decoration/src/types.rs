/// Integer tag classifying an item's kind.
pub type ViewType = i32;

/// Sentinel view type for "there is no previous item".
pub const INVALID_VIEW_TYPE: ViewType = -1;

/// Pixel insets around a single item.
///
/// `bottom` is carried for parity with host offset rectangles but is always `0` when produced
/// by [`crate::compute_offsets`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOffsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ItemOffsets {
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Horizontal spacing applied to items of one view type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideSpaceRule {
    pub view_type: ViewType,
    pub start_space: i32,
    pub end_space: i32,
}

impl SideSpaceRule {
    pub fn matches(&self, view_type: ViewType) -> bool {
        self.view_type == view_type
    }
}

/// Top spacing override for an item of `view_type` directly after one of `previous_view_type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacentRule {
    pub previous_view_type: ViewType,
    pub view_type: ViewType,
    pub space: i32,
}

impl AdjacentRule {
    pub fn matches(&self, previous_view_type: ViewType, view_type: ViewType) -> bool {
        self.previous_view_type == previous_view_type && self.view_type == view_type
    }
}

/// Where an item sits in its row, as reported by [`crate::LayoutStrategy::classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPlacement {
    /// The item is in the first row and receives `first_space` instead of `default_space`.
    pub is_first: bool,
    pub is_full_row: bool,
    pub is_left_edge: bool,
    pub is_right_edge: bool,
}

impl ItemPlacement {
    /// Placement of an item in a single-column list.
    pub fn linear(position: usize) -> Self {
        Self {
            is_first: position == 0,
            is_full_row: true,
            is_left_edge: true,
            is_right_edge: true,
        }
    }
}

/// Extra horizontal inset of divider lines, independent of item side spacing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DividerInsets {
    pub start: i32,
    pub end: i32,
}

/// Horizontal geometry of the list container in drawing coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerBounds {
    pub left: i32,
    pub right: i32,
    /// The container's own inner padding at its start edge.
    pub padding_start: i32,
    /// The container's own inner padding at its end edge.
    pub padding_end: i32,
}

impl ContainerBounds {
    /// A container starting at `0` with the given width and no padding.
    pub fn from_width(width: i32) -> Self {
        Self {
            left: 0,
            right: width,
            padding_start: 0,
            padding_end: 0,
        }
    }

    pub fn with_padding(mut self, padding_start: i32, padding_end: i32) -> Self {
        self.padding_start = padding_start;
        self.padding_end = padding_end;
        self
    }
}
