use std::str::FromStr;

use palette::{FromColor, LinSrgba, Srgb, Srgba};

use crate::error::{Result, SpiralError};

/// Premultiplied linear RGBA color.
///
/// The spiral generator never inspects colors; they travel with each spiral so the
/// drawing side knows how to stroke it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create from sRGB u8 RGBA array (premultiplied in linear space).
    #[inline]
    pub fn from_srgba_u8(c: [u8; 4]) -> Self {
        let s = Srgba::new(
            c[0] as f32 / 255.0,
            c[1] as f32 / 255.0,
            c[2] as f32 / 255.0,
            c[3] as f32 / 255.0,
        );
        let lin: LinSrgba = LinSrgba::from_color(s);
        Self {
            r: lin.red * lin.alpha,
            g: lin.green * lin.alpha,
            b: lin.blue * lin.alpha,
            a: lin.alpha,
        }
    }

    /// Parse an opaque `#rrggbb` (or `rrggbb`) hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let rgb = Srgb::<u8>::from_str(hex.trim())
            .map_err(|_| SpiralError::InvalidColor(hex.to_string()))?;
        Ok(Self::from_srgba_u8([rgb.red, rgb.green, rgb.blue, 255]))
    }

    /// Convert back to sRGB u8 RGBA array (unpremultiplied).
    #[inline]
    pub fn to_srgba_u8(&self) -> [u8; 4] {
        let (r, g, b) = if self.a > 0.0001 {
            (self.r / self.a, self.g / self.a, self.b / self.a)
        } else {
            (0.0, 0.0, 0.0)
        };

        let lin = LinSrgba::new(r, g, b, self.a);
        let srgb: Srgba = Srgba::from_color(lin);

        [
            (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// `#rrggbb` form of the color, alpha dropped.
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_srgba_u8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(&self) -> f32 {
        self.a
    }

    /// Default spiral stroke color.
    pub fn orange() -> Self {
        Self::from_srgba_u8([0xff, 0x95, 0x00, 0xff])
    }

    pub fn gray() -> Self {
        Self::from_srgba_u8([0x8e, 0x8e, 0x93, 0xff])
    }

    pub fn black() -> Self {
        Self::from_srgba_u8([0, 0, 0, 0xff])
    }
}
