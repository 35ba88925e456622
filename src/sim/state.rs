//! Scene state
//!
//! Everything the animation mutates between frames lives here: the global
//! time accumulator, the viewport, the grid and the particles, and the RNG
//! used to seed new cells and respawn particles.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::cell::HexCell;
use super::grid::build_grid;
use super::particle::{GlowParticle, spawn_particles};
use crate::settings::BackdropSettings;

/// Drawable area in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inclusive bounds check on both axes
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// Animated scene for one mounted backdrop
#[derive(Debug, Clone)]
pub struct Scene {
    /// Global time accumulator (starts at 0 on every mount)
    pub time: f64,
    /// Time added per tick
    pub time_step: f64,
    /// Current viewport
    pub viewport: Viewport,
    /// Cell circumradius used for (re)building the grid
    pub hex_size: f32,
    /// Grid cells in construction order
    pub cells: Vec<HexCell>,
    /// Fixed particle collection, allocated once
    pub particles: Vec<GlowParticle>,
    /// Random source for new cells and particle respawns
    pub rng: Pcg32,
}

impl Scene {
    /// Create a scene with the given seed
    pub fn new(viewport: Viewport, settings: &BackdropSettings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let cells = build_grid(viewport.width, viewport.height, settings.hex_size, &mut rng);
        let particles = spawn_particles(settings.particle_count, viewport, &mut rng);

        Self {
            time: 0.0,
            time_step: settings.time_step as f64,
            viewport,
            hex_size: settings.hex_size,
            cells,
            particles,
            rng,
        }
    }

    /// Replace the viewport and the whole grid. Particles are kept and respawn
    /// against the new bounds on their own.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.cells = build_grid(viewport.width, viewport.height, self.hex_size, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PARTICLE_COUNT;
    use crate::sim::grid::build_grid;

    #[test]
    fn test_viewport_bounds() {
        let v = Viewport::new(100.0, 50.0);
        assert_eq!(v.center(), Vec2::new(50.0, 25.0));
        assert!(v.contains(Vec2::ZERO));
        assert!(v.contains(Vec2::new(100.0, 50.0)));
        assert!(!v.contains(Vec2::new(-0.01, 10.0)));
        assert!(!v.contains(Vec2::new(10.0, 50.01)));
    }

    #[test]
    fn test_new_scene() {
        let scene = Scene::new(Viewport::new(800.0, 600.0), &BackdropSettings::default(), 12345);
        assert_eq!(scene.time, 0.0);
        assert_eq!(scene.cells.len(), 204);
        assert_eq!(scene.particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_resize_rebuilds_grid_only() {
        let settings = BackdropSettings::default();
        let mut scene = Scene::new(Viewport::new(800.0, 600.0), &settings, 1);
        let particles_before = scene.particles.clone();

        scene.resize(Viewport::new(1600.0, 1200.0));

        let expected = build_grid(1600.0, 1200.0, 40.0, &mut Pcg32::seed_from_u64(0));
        assert_eq!(scene.cells.len(), expected.len());
        assert_eq!(scene.cells.len(), 30 * 21);
        assert_eq!(scene.particles, particles_before);
    }

    #[test]
    fn test_resize_twice_same_positions() {
        let settings = BackdropSettings::default();
        let mut scene = Scene::new(Viewport::new(800.0, 600.0), &settings, 1);

        scene.resize(Viewport::new(1280.0, 720.0));
        let first: Vec<Vec2> = scene.cells.iter().map(|c| c.pos).collect();
        scene.resize(Viewport::new(1280.0, 720.0));
        let second: Vec<Vec2> = scene.cells.iter().map(|c| c.pos).collect();

        assert_eq!(first, second);
    }
}
