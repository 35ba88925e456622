//! Hex Backdrop - A pulsing hexagonal grid background
//!
//! Core modules:
//! - `sim`: Scene state (hex cells, glow particles, grid layout). No drawing here.
//! - `renderer`: 2D surface abstraction and draw routines
//! - `animation`: RUNNING/STOPPED frame loop control
//! - `backdrop`: Mount/resize/unmount lifecycle over a surface
//! - `platform`: Frame scheduling and the browser mount point
//! - `settings`: Tunable parameters (hex size, particle count, palette)

pub mod animation;
pub mod backdrop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use animation::{AnimationLoop, LoopState};
pub use backdrop::{Backdrop, Viewport};
pub use settings::BackdropSettings;

use glam::Vec2;

/// Animation constants
pub mod consts {
    /// Circumradius of a grid hexagon in pixels
    pub const HEX_SIZE: f32 = 40.0;
    /// Smallest hex size accepted from settings
    pub const MIN_HEX_SIZE: f32 = 4.0;
    /// Upper bound on cells in one grid; larger layouts are refused
    pub const MAX_GRID_CELLS: usize = 500_000;
    /// Number of glow particles allocated at mount
    pub const PARTICLE_COUNT: usize = 40;
    /// Most particles accepted from settings
    pub const MAX_PARTICLES: usize = 2000;
    /// Global time advance per tick
    pub const TIME_STEP: f32 = 0.02;
    /// Alpha of the black fill painted over the previous frame (trail fade)
    pub const FADE_ALPHA: f32 = 0.95;

    /// Hexagon outline width
    pub const STROKE_WIDTH: f32 = 1.5;
    /// Glow gradient reaches transparency at this multiple of the hex size
    pub const GLOW_RADIUS_FACTOR: f32 = 1.5;
    /// Glow above which the center dot is drawn
    pub const DOT_GLOW_THRESHOLD: f32 = 0.1;
    /// Radius of the center dot
    pub const DOT_RADIUS: f32 = 2.0;

    /// Pulse: sin(time * PULSE_TIME_SCALE - distance * PULSE_DISTANCE_SCALE + phase)
    pub const PULSE_TIME_SCALE: f32 = 2.0;
    pub const PULSE_DISTANCE_SCALE: f32 = 0.01;
    /// Opacity = (pulse + 1) * OPACITY_SCALE, in [0, 0.3]
    pub const OPACITY_SCALE: f32 = 0.15;
    /// Glow = max(0, pulse * GLOW_SCALE), in [0, 0.3]
    pub const GLOW_SCALE: f32 = 0.3;

    /// Particle velocity components are drawn from [-MAX, MAX]
    pub const PARTICLE_MAX_SPEED: f32 = 0.15;
    pub const PARTICLE_MIN_SIZE: f32 = 1.0;
    pub const PARTICLE_MAX_SIZE: f32 = 3.0;
    pub const PARTICLE_MIN_OPACITY: f32 = 0.2;
    pub const PARTICLE_MAX_OPACITY: f32 = 0.7;
    /// Glow disk radius as a multiple of particle size
    pub const PARTICLE_GLOW_FACTOR: f32 = 3.0;
}

/// The six vertices of a flat-topped hexagon, vertex `i` at angle `i * 60°`
#[inline]
pub fn hexagon_vertices(center: Vec2, size: f32) -> [Vec2; 6] {
    std::array::from_fn(|i| {
        let theta = std::f32::consts::FRAC_PI_3 * i as f32;
        center + polar_to_cartesian(size, theta)
    })
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn test_hexagon_vertices_unit() {
        let verts = hexagon_vertices(Vec2::ZERO, 1.0);
        assert!((verts[0] - Vec2::new(1.0, 0.0)).length() < 1e-6);
        assert!((verts[3] - Vec2::new(-1.0, 0.0)).length() < 1e-6);
        // Flat top: vertices 1 and 2 share a y coordinate
        assert!((verts[1].y - verts[2].y).abs() < 1e-6);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0)), 0.0);
    }

    proptest! {
        #[test]
        fn test_hexagon_vertices_on_circle(
            cx in -1000.0f32..1000.0,
            cy in -1000.0f32..1000.0,
            size in 0.5f32..200.0,
        ) {
            let center = Vec2::new(cx, cy);
            let verts = hexagon_vertices(center, size);
            prop_assert_eq!(verts.len(), 6);
            for (i, v) in verts.iter().enumerate() {
                let r = distance(*v, center);
                prop_assert!((r - size).abs() <= size * 1e-4 + 1e-3);

                // Consecutive vertices are 60° apart around the center
                let next = verts[(i + 1) % 6];
                let a = (*v - center).angle_to(next - center);
                prop_assert!((a - FRAC_PI_3).abs() < 1e-3);
            }
        }
    }
}
