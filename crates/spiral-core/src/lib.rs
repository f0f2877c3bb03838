//! spiral-core: affine matrices and nested-square spirals.
//!
//! The core is pure math: [`AffineMatrix`] and the spiral generator in [`spiral`]. The
//! [`Painter`] / [`DisplayList`] pair and the [`svg`] writer are a small reference
//! drawing layer that turns generated spirals into something viewable.

mod basic;
mod color;
mod display_list;
mod error;
pub mod field;
mod matrix;
mod painter;
mod scene;
pub mod spiral;
pub mod svg;

pub use basic::BasicTransform;
pub use color::Color;
pub use display_list::*;
pub use error::{Result, SpiralError};
pub use field::{FieldCell, FieldParams, SpiralField, Turn, generate_field};
pub use matrix::AffineMatrix;
pub use painter::Painter;
pub use scene::*;
pub use spiral::{
    Spiral, SpiralParams, SpiralShape, cumulative_transforms, generate_spiral, inner_rotation,
};
