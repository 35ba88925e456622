//! Colors with a clamped alpha channel

use serde::{Deserialize, Serialize};

/// 8-bit RGB plus a float alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with alpha clamped to [0, 1] (NaN becomes 0)
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        Self { a, ..self }
    }

    /// Same color, fully transparent
    pub fn transparent(self) -> Self {
        Self { a: 0.0, ..self }
    }

    /// CSS `rgba()` string for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Palette defaults
pub mod colors {
    use super::Rgba;

    /// Hexagon outline and glow
    pub const GRID: Rgba = Rgba::opaque(147, 51, 234);
    /// Cell center dot and particles
    pub const HIGHLIGHT: Rgba = Rgba::opaque(192, 132, 252);
    /// Trail fade fill
    pub const FADE: Rgba = Rgba::opaque(0, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_clamped() {
        assert_eq!(colors::HIGHLIGHT.with_alpha(1.7).a, 1.0);
        assert_eq!(colors::HIGHLIGHT.with_alpha(-0.2).a, 0.0);
        assert_eq!(colors::HIGHLIGHT.with_alpha(f32::NAN).a, 0.0);
        assert_eq!(colors::HIGHLIGHT.with_alpha(0.25).a, 0.25);
    }

    #[test]
    fn test_css() {
        assert_eq!(colors::GRID.with_alpha(0.5).to_css(), "rgba(147, 51, 234, 0.5)");
        assert_eq!(colors::FADE.with_alpha(0.95).to_css(), "rgba(0, 0, 0, 0.95)");
        assert_eq!(colors::HIGHLIGHT.transparent().to_css(), "rgba(192, 132, 252, 0)");
    }
}
