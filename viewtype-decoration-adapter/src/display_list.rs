use alloc::vec::Vec;

use viewtype_decoration::kurbo::Rect;
use viewtype_decoration::peniko::Color;
use viewtype_decoration::{DividerCanvas, DividerStyle};

/// A recorded drawing operation.
#[derive(Clone, Copy, Debug)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
        anti_alias: bool,
    },
}

/// A [`DividerCanvas`] that records commands for a renderer to replay later.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Rectangles of all recorded fills, in drawing order.
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().map(|cmd| match cmd {
            DrawCommand::FillRect { rect, .. } => *rect,
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DividerCanvas for DisplayList {
    fn fill_rect(&mut self, rect: Rect, style: &DividerStyle) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: style.color,
            anti_alias: style.anti_alias,
        });
    }
}
