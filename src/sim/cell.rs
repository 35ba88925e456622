//! Hex cells and their pulse visuals
//!
//! A cell never changes position or phase after construction. Its visuals are
//! recomputed from global time every frame; `visuals` only caches the latest
//! result for the renderer.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::consts::*;
use crate::distance;

/// Opacity/glow pair derived from the pulse
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellVisuals {
    /// Outline alpha, in [0, 0.3]
    pub opacity: f32,
    /// Glow alpha, in [0, 0.3]; zero during the negative half of the pulse
    pub glow: f32,
}

impl CellVisuals {
    /// Visuals for a raw pulse value in [-1, 1]
    pub fn from_pulse(pulse: f32) -> Self {
        Self {
            opacity: (pulse + 1.0) * OPACITY_SCALE,
            glow: (pulse * GLOW_SCALE).max(0.0),
        }
    }

    /// Whether the radial glow fill is drawn
    #[inline]
    pub fn has_glow(&self) -> bool {
        self.glow > 0.0
    }

    /// Whether the bright center dot is drawn
    #[inline]
    pub fn has_dot(&self) -> bool {
        self.glow > DOT_GLOW_THRESHOLD
    }
}

/// One grid tile
#[derive(Debug, Clone)]
pub struct HexCell {
    /// Center in surface pixels
    pub pos: Vec2,
    /// Circumradius
    pub size: f32,
    /// Grid column (-1 is the off-screen margin column)
    pub col: i32,
    /// Grid row (-1 is the off-screen margin row)
    pub row: i32,
    /// Random phase in [0, 2π)
    pub phase_offset: f32,
    /// Random speed in [0.02, 0.04); not part of the pulse formula
    pub pulse_speed: f32,
    /// Latest computed visuals
    pub visuals: CellVisuals,
}

impl HexCell {
    pub fn new<R: Rng + ?Sized>(pos: Vec2, size: f32, col: i32, row: i32, rng: &mut R) -> Self {
        Self {
            pos,
            size,
            col,
            row,
            phase_offset: rng.random_range(0.0..TAU),
            pulse_speed: rng.random_range(0.02..0.04),
            visuals: CellVisuals::default(),
        }
    }

    /// Recompute and cache visuals for this frame
    pub fn refresh(&mut self, time: f64, viewport_center: Vec2) -> CellVisuals {
        self.visuals = compute_cell_visuals(self, time, viewport_center);
        self.visuals
    }
}

/// Pulse for a cell: cells further from the center lag behind, producing a
/// ripple that travels outward.
///
/// The argument is formed in f64 so a page left open for days keeps a smooth
/// pulse; `time` would lose its fractional steps in f32.
#[inline]
pub fn pulse(time: f64, dist: f32, phase_offset: f32) -> f32 {
    let arg = time * PULSE_TIME_SCALE as f64 - dist as f64 * PULSE_DISTANCE_SCALE as f64
        + phase_offset as f64;
    arg.sin() as f32
}

/// Visuals of `cell` at `time`, pure
pub fn compute_cell_visuals(cell: &HexCell, time: f64, viewport_center: Vec2) -> CellVisuals {
    let d = distance(cell.pos, viewport_center);
    CellVisuals::from_pulse(pulse(time, d, cell.phase_offset))
}
