use crate::color::Color;
use crate::matrix::AffineMatrix;
use crate::scene::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    FillRect {
        rect: Rect,
        color: Color,
        transform: AffineMatrix,
    },
    /// Outline of a rounded rect. The stroke width is in viewport units and is not
    /// affected by `transform`.
    StrokeRoundedRect {
        rrect: RoundedRect,
        stroke: Stroke,
        color: Color,
        transform: AffineMatrix,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub viewport: Viewport,
    pub commands: Vec<Command>,
}
