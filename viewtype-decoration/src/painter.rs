use kurbo::Rect;
use peniko::Color;
use peniko::color::palette;

use crate::{ContainerBounds, DividerInsets, ItemOffsets};

/// Paint used for divider lines.
#[derive(Clone, Copy, Debug)]
pub struct DividerStyle {
    pub color: Color,
    pub anti_alias: bool,
}

impl Default for DividerStyle {
    fn default() -> Self {
        Self {
            color: palette::css::BLACK,
            anti_alias: false,
        }
    }
}

/// Drawing surface handed to the post-layout draw hook.
pub trait DividerCanvas {
    fn fill_rect(&mut self, rect: Rect, style: &DividerStyle);
}

impl<C: DividerCanvas + ?Sized> DividerCanvas for &mut C {
    fn fill_rect(&mut self, rect: Rect, style: &DividerStyle) {
        (**self).fill_rect(rect, style);
    }
}

/// Rectangle of the divider drawn in the top gap of an item.
///
/// Horizontally it spans the container's content box, shrunk by the divider insets and by
/// the item's cached side offsets. Vertically it fills `[item_top - offsets.top, item_top]`.
pub fn divider_rect(
    container: ContainerBounds,
    insets: DividerInsets,
    item_top: i32,
    offsets: ItemOffsets,
) -> Rect {
    let x0 = container.left + container.padding_start + insets.start + offsets.left;
    let x1 = container.right - container.padding_end - insets.end - offsets.right;
    Rect::new(
        f64::from(x0),
        f64::from(item_top - offsets.top),
        f64::from(x1),
        f64::from(item_top),
    )
}
