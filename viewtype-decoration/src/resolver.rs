use crate::{DecorationConfig, ItemOffsets, ItemPlacement, ViewType};

/// Computes the offsets of one item.
///
/// Rules are applied in order:
/// 1. `top` is `first_space` for first-row items, `default_space` otherwise.
/// 2. `left`/`right` start at `default_side_space`.
/// 3. The first side rule for `view_type` replaces `left` when the item touches the left
///    edge (or spans the row) and `right` when it touches the right edge (or spans the row).
/// 4. The first adjacent rule for `(previous_view_type, view_type)` replaces `top`.
///
/// Position `0` has no predecessor and never takes an adjacent rule, even one keyed on
/// [`crate::INVALID_VIEW_TYPE`]. Later positions match on whatever type precedes them.
/// `bottom` is always `0`.
pub fn compute_offsets(
    position: usize,
    view_type: ViewType,
    previous_view_type: ViewType,
    placement: ItemPlacement,
    config: &DecorationConfig,
) -> ItemOffsets {
    let mut offsets = ItemOffsets {
        left: config.default_side_space(),
        top: if placement.is_first {
            config.first_space()
        } else {
            config.default_space()
        },
        right: config.default_side_space(),
        bottom: 0,
    };

    if let Some(rule) = config.side_space_for(view_type) {
        if placement.is_left_edge || placement.is_full_row {
            offsets.left = rule.start_space;
        }
        if placement.is_right_edge || placement.is_full_row {
            offsets.right = rule.end_space;
        }
    }

    if position > 0 {
        if let Some(space) = config.adjacent_space_for(previous_view_type, view_type) {
            offsets.top = space;
        }
    }

    dtrace!(
        position,
        view_type,
        previous_view_type,
        left = offsets.left,
        top = offsets.top,
        right = offsets.right,
        "compute_offsets"
    );
    offsets
}

/// View type of the item before `position`, or [`crate::INVALID_VIEW_TYPE`] for the first item.
pub fn previous_view_type(
    position: usize,
    view_type_at: impl FnOnce(usize) -> ViewType,
) -> ViewType {
    match position.checked_sub(1) {
        Some(previous) => view_type_at(previous),
        None => crate::INVALID_VIEW_TYPE,
    }
}
