//! Backdrop settings
//!
//! Persisted in LocalStorage on the web so a page can tune the effect without
//! rebuilding. Every field falls back to its default when missing.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::{Rgba, colors};

/// Colors used by the draw routines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Hexagon outline and glow
    pub grid: Rgba,
    /// Cell center dot and particles
    pub highlight: Rgba,
    /// Trail fade fill
    pub fade: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: colors::GRID,
            highlight: colors::HIGHLIGHT,
            fade: colors::FADE,
        }
    }
}

/// Tunable animation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropSettings {
    /// Hexagon circumradius in pixels
    pub hex_size: f32,
    /// Number of glow particles
    pub particle_count: usize,
    /// Global time advance per frame
    pub time_step: f32,
    /// Alpha of the per-frame fade fill (1.0 = hard clear, lower = longer trails)
    pub fade_alpha: f32,
    /// Hexagon outline width
    pub stroke_width: f32,
    pub palette: Palette,
}

impl Default for BackdropSettings {
    fn default() -> Self {
        Self {
            hex_size: HEX_SIZE,
            particle_count: PARTICLE_COUNT,
            time_step: TIME_STEP,
            fade_alpha: FADE_ALPHA,
            stroke_width: STROKE_WIDTH,
            palette: Palette::default(),
        }
    }
}

impl BackdropSettings {
    /// Parse settings from JSON, keeping defaults for absent fields
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(e) => {
                log::warn!("Ignoring invalid backdrop settings: {}", e);
                None
            }
        }
    }

    /// Replace unusable values with defaults, raise `hex_size` to
    /// `MIN_HEX_SIZE`, cap `particle_count` at `MAX_PARTICLES` and clamp
    /// palette alphas into [0, 1]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let positive = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };

        self.hex_size = positive(self.hex_size, defaults.hex_size).max(MIN_HEX_SIZE);
        if self.particle_count > MAX_PARTICLES {
            log::warn!(
                "Capping particle count {} at {}",
                self.particle_count,
                MAX_PARTICLES
            );
            self.particle_count = MAX_PARTICLES;
        }
        self.time_step = positive(self.time_step, defaults.time_step);
        self.stroke_width = positive(self.stroke_width, defaults.stroke_width);
        self.fade_alpha = if self.fade_alpha.is_finite() {
            self.fade_alpha.clamp(0.0, 1.0)
        } else {
            defaults.fade_alpha
        };

        let palette = &mut self.palette;
        for color in [&mut palette.grid, &mut palette.highlight, &mut palette.fade] {
            *color = color.with_alpha(color.a);
        }
        self
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "hex_backdrop_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded backdrop settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default backdrop settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
