use crate::color::Color;
use crate::display_list::{Command, DisplayList, Viewport};
use crate::matrix::AffineMatrix;
use crate::scene::*;

/// Records drawing commands into a [`DisplayList`].
pub struct Painter {
    list: DisplayList,
    transform_stack: Vec<AffineMatrix>,
}

impl Painter {
    pub fn begin_frame(viewport: Viewport) -> Self {
        Self {
            list: DisplayList {
                viewport,
                commands: Vec::new(),
            },
            transform_stack: Vec::new(),
        }
    }

    pub fn current_transform(&self) -> AffineMatrix {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(AffineMatrix::identity)
    }

    /// Push a transform nested inside the current one: shapes drawn afterwards go
    /// through `t` first, then through everything pushed before it.
    pub fn push_transform(&mut self, t: AffineMatrix) {
        let composed = t.concatenate(&self.current_transform());
        self.transform_stack.push(composed);
    }

    pub fn pop_transform(&mut self) {
        let _ = self.transform_stack.pop();
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let transform = self.current_transform();
        self.list.commands.push(Command::FillRect {
            rect,
            color,
            transform,
        });
    }

    /// Stroke a rounded rect, with `local` applied before the current transform.
    pub fn stroke_rounded_rect(
        &mut self,
        rrect: RoundedRect,
        stroke: Stroke,
        color: Color,
        local: AffineMatrix,
    ) {
        let transform = local.concatenate(&self.current_transform());
        self.list.commands.push(Command::StrokeRoundedRect {
            rrect,
            stroke,
            color,
            transform,
        });
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }
}
