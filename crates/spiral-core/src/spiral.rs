//! Nested-square spirals.
//!
//! A spiral is a stack of squares where each square is the previous one run through
//! the *inner rotation*: a shrink-and-rotate around the square's center that puts the
//! new corners on the old edges, `offset_ratio` of the way along each edge.
//!
//! [`generate_spiral`] validates a [`SpiralParams`] record and produces the cumulative
//! transforms `[identity, S, S·S, ...]`. Nothing is cached: callers re-run it whenever a
//! parameter changes.

use crate::color::Color;
use crate::error::{Result, SpiralError};
use crate::matrix::AffineMatrix;
use crate::painter::Painter;
use crate::scene::{Rect, RoundedRect, Stroke};

/// The inner rotation for a square of side `edge_length` with its top-left corner at
/// the origin.
///
/// `translation(-L/2, -L/2) · (1 - r, r, -r, 1 - r, 0, 0) · translation(L/2, L/2)`
pub fn inner_rotation(offset_ratio: f64, edge_length: f64) -> AffineMatrix {
    let center = edge_length / 2.0;
    AffineMatrix::corner_on_edge_rotation(offset_ratio, center, center)
}

/// `[identity, step, step·step, ...]` with `steps` entries.
pub fn cumulative_transforms(step: &AffineMatrix, steps: usize) -> Vec<AffineMatrix> {
    let mut transforms = Vec::with_capacity(steps);
    let mut current = AffineMatrix::identity();
    for _ in 0..steps {
        transforms.push(current);
        current = current.concatenate(step);
    }
    transforms
}

/// Input record for [`generate_spiral`].
///
/// `corner_radius`, `line_width` and `color` are only carried through to drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    pub steps: i32,
    pub offset_ratio: f64,
    pub edge_length: f64,
    pub corner_radius: f64,
    pub line_width: f64,
    pub color: Color,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            steps: 50,
            offset_ratio: 0.1,
            edge_length: 500.0,
            corner_radius: 0.0,
            line_width: 1.0,
            color: Color::orange(),
        }
    }
}

impl SpiralParams {
    pub fn new(steps: i32, offset_ratio: f64, edge_length: f64) -> Self {
        Self {
            steps,
            offset_ratio,
            edge_length,
            ..Self::default()
        }
    }

    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Same spiral turning the other way (`offset_ratio` replaced by `1 - offset_ratio`).
    pub fn mirrored(&self) -> Self {
        Self {
            offset_ratio: 1.0 - self.offset_ratio,
            ..*self
        }
    }

    /// Check the inputs the generator cannot work with.
    ///
    /// Returns the step count as `usize`. An offset ratio outside `(0, 1)` and a zero
    /// edge length are accepted and give degenerate geometry.
    pub fn validate(&self) -> Result<usize> {
        let steps = usize::try_from(self.steps).map_err(|_| {
            SpiralError::invalid_argument(
                "steps",
                format!("must not be negative, got {}", self.steps),
            )
        })?;
        if !self.edge_length.is_finite() || self.edge_length < 0.0 {
            return Err(SpiralError::invalid_argument(
                "edge_length",
                format!("must be finite and non-negative, got {}", self.edge_length),
            ));
        }
        if !self.offset_ratio.is_finite() {
            return Err(SpiralError::invalid_argument(
                "offset_ratio",
                format!("must be finite, got {}", self.offset_ratio),
            ));
        }
        if self.offset_ratio <= 0.0 || self.offset_ratio >= 1.0 {
            log::debug!(
                "offset_ratio {} is outside (0, 1); spiral will be degenerate",
                self.offset_ratio
            );
        }
        Ok(steps)
    }
}

/// One square of a spiral, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralShape {
    pub transform: AffineMatrix,
    pub edge_length: f64,
    pub corner_radius: f64,
    pub line_width: f64,
    pub color: Color,
}

impl SpiralShape {
    /// The untransformed rounded square `[0, L] x [0, L]`.
    pub fn rounded_rect(&self) -> RoundedRect {
        RoundedRect {
            rect: Rect::square(self.edge_length),
            radius: self.corner_radius,
        }
    }

    /// Corners after the transform, starting top-left and going clockwise on screen.
    pub fn corners(&self) -> [(f64, f64); 4] {
        Rect::square(self.edge_length)
            .corners()
            .map(|(x, y)| self.transform.apply_point(x, y))
    }
}

/// Output of [`generate_spiral`].
#[derive(Debug, Clone, PartialEq)]
pub struct Spiral {
    params: SpiralParams,
    step: AffineMatrix,
    transforms: Vec<AffineMatrix>,
}

impl Spiral {
    pub fn params(&self) -> &SpiralParams {
        &self.params
    }

    /// The inner rotation used between two consecutive squares.
    pub fn step_transform(&self) -> AffineMatrix {
        self.step
    }

    /// Cumulative transforms, outermost square first.
    pub fn transforms(&self) -> &[AffineMatrix] {
        &self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn shapes(&self) -> impl Iterator<Item = SpiralShape> + '_ {
        self.transforms.iter().map(move |&transform| SpiralShape {
            transform,
            edge_length: self.params.edge_length,
            corner_radius: self.params.corner_radius,
            line_width: self.params.line_width,
            color: self.params.color,
        })
    }

    /// Stroke every square under the painter's current transform.
    pub fn paint(&self, painter: &mut Painter) {
        for shape in self.shapes() {
            painter.stroke_rounded_rect(
                shape.rounded_rect(),
                Stroke {
                    width: shape.line_width,
                },
                shape.color,
                shape.transform,
            );
        }
    }
}

/// Validate `params` and build the spiral's step and cumulative transforms.
pub fn generate_spiral(params: &SpiralParams) -> Result<Spiral> {
    let steps = params.validate()?;
    let step = inner_rotation(params.offset_ratio, params.edge_length);
    let transforms = cumulative_transforms(&step, steps);
    log::debug!(
        "generated spiral: steps={} offset_ratio={} edge_length={}",
        steps,
        params.offset_ratio,
        params.edge_length
    );
    Ok(Spiral {
        params: *params,
        step,
        transforms,
    })
}
