//! 2D affine matrices.
//!
//! [`AffineMatrix`] stores the six coefficients of an affine map of the plane.
//! Points are treated as row vectors multiplied on the left:
//!
//! ```text
//!                         | a   b   0 |
//! [x' y' 1] = [x y 1]  ·  | c   d   0 |
//!                         | tx  ty  1 |
//! ```
//!
//! so `(x, y)` maps to `(a·x + c·y + tx, b·x + d·y + ty)`.
//!
//! Composition follows the same convention: `first.concatenate(&second)` is the
//! product `first · second`, which applies `first` and then `second`.
//!
//! # Usage
//!
//! ```
//! use spiral_core::AffineMatrix;
//!
//! let m = AffineMatrix::translation(10.0, 0.0).concatenate(&AffineMatrix::scale(2.0, 2.0));
//! assert_eq!(m.apply_point(1.0, 1.0), (22.0, 2.0));
//! ```

use std::f64::consts::PI;
use std::fmt;

/// A 2D affine transformation.
///
/// Equality is exact and coefficient-wise; use [`AffineMatrix::approx_eq`] when
/// comparing results of floating-point computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineMatrix {
    /// Create a matrix from its six coefficients.
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// The identity transform.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Create a translation transform.
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// Create a non-uniform scale transform.
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Create a rotation transform from radians.
    pub fn rotation(angle_rad: f64) -> Self {
        let cos = angle_rad.cos();
        let sin = angle_rad.sin();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Create a rotation transform from degrees.
    pub fn rotation_deg(angle_deg: f64) -> Self {
        Self::rotation(angle_deg * PI / 180.0)
    }

    /// Concatenate two transforms (`self · other`).
    ///
    /// The result applies `self` first, then `other`.
    pub fn concatenate(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.tx * other.a + self.ty * other.c + other.tx,
            ty: self.tx * other.b + self.ty * other.d + other.ty,
        }
    }

    /// Apply this transform to a point.
    pub fn apply_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        )
    }

    /// Apply this transform to a vector (ignores translation).
    pub fn apply_vector(&self, x: f64, y: f64) -> (f64, f64) {
        (self.a * x + self.c * y, self.b * x + self.d * y)
    }

    /// Calculate the determinant of the linear part.
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Coefficient-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.a - other.a).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
            && (self.c - other.c).abs() <= epsilon
            && (self.d - other.d).abs() <= epsilon
            && (self.tx - other.tx).abs() <= epsilon
            && (self.ty - other.ty).abs() <= epsilon
    }

    /// Coefficients in `[a, b, c, d, tx, ty]` order.
    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
    }

    /// Run `linear` with `(cx, cy)` moved to the origin.
    ///
    /// Expands to `translation(-cx, -cy) · linear · translation(cx, cy)`.
    pub fn about(linear: &Self, cx: f64, cy: f64) -> Self {
        Self::translation(-cx, -cy)
            .concatenate(linear)
            .concatenate(&Self::translation(cx, cy))
    }

    /// Scale around the point `(cx, cy)`.
    pub fn scale_about(sx: f64, sy: f64, cx: f64, cy: f64) -> Self {
        Self::about(&Self::scale(sx, sy), cx, cy)
    }

    /// Uniform scale around the point `(cx, cy)`.
    pub fn uniform_scale_about(s: f64, cx: f64, cy: f64) -> Self {
        Self::scale_about(s, s, cx, cy)
    }

    /// Rotate around the point `(cx, cy)`.
    pub fn rotation_about(angle_rad: f64, cx: f64, cy: f64) -> Self {
        Self::about(&Self::rotation(angle_rad), cx, cy)
    }

    /// Mirror across the vertical line `x = cx`.
    pub fn mirror_horizontal(cx: f64) -> Self {
        Self::scale(-1.0, 1.0).concatenate(&Self::translation(cx * 2.0, 0.0))
    }

    /// Shrink-and-rotate around `(cx, cy)` so that a square centered there lands with
    /// its corners on the original edges, `offset_ratio` of the way along each edge.
    ///
    /// The linear part is `(1 - r, r, -r, 1 - r)`. It is not a pure rotation.
    pub fn corner_on_edge_rotation(offset_ratio: f64, cx: f64, cy: f64) -> Self {
        let r = offset_ratio;
        Self::about(&Self::new(1.0 - r, r, -r, 1.0 - r, 0.0, 0.0), cx, cy)
    }

    /// `step` concatenated onto the identity `times` times.
    pub fn repeated(step: &Self, times: usize) -> Self {
        (0..times).fold(Self::identity(), |acc, _| acc.concatenate(step))
    }
}

impl fmt::Display for AffineMatrix {
    /// Three rows: `a b`, `c d`, `tx ty`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        writeln!(f, "{:.*} {:.*}", precision, self.a, precision, self.b)?;
        writeln!(f, "{:.*} {:.*}", precision, self.c, precision, self.d)?;
        write!(f, "{:.*} {:.*}", precision, self.tx, precision, self.ty)
    }
}
