//! Translation, scale and rotation combined into a single matrix.

use crate::matrix::AffineMatrix;

/// Sliders of the basic transformation page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation_deg: f64,
}

impl Default for BasicTransform {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation_deg: 0.0,
        }
    }
}

impl BasicTransform {
    /// `translation · scale · rotation`: translate first, rotate last.
    pub fn to_matrix(&self) -> AffineMatrix {
        AffineMatrix::translation(self.offset_x, self.offset_y)
            .concatenate(&AffineMatrix::scale(self.scale_x, self.scale_y))
            .concatenate(&AffineMatrix::rotation_deg(self.rotation_deg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        assert_eq!(BasicTransform::default().to_matrix(), AffineMatrix::identity());
    }

    #[test]
    fn test_translation_is_scaled_and_rotated() {
        let t = BasicTransform {
            offset_x: 10.0,
            scale_x: 2.0,
            scale_y: 2.0,
            rotation_deg: 90.0,
            ..BasicTransform::default()
        }
        .to_matrix();
        // (0, 0) -> (10, 0) -> (20, 0) -> (0, 20)
        let (x, y) = t.apply_point(0.0, 0.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 20.0).abs() < 1e-9);
    }
}
