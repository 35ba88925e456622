//! Per-frame scene update
//!
//! Advances the global clock, refreshes every cell's visuals and moves the
//! particles. Drawing happens afterwards from the updated scene.

use super::state::Scene;

/// Advance the scene by one tick
pub fn tick(scene: &mut Scene) {
    scene.time += scene.time_step;

    let center = scene.viewport.center();
    for cell in &mut scene.cells {
        cell.refresh(scene.time, center);
    }

    let bounds = scene.viewport;
    for particle in &mut scene.particles {
        particle.update(bounds, &mut scene.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::BackdropSettings;
    use crate::sim::cell::compute_cell_visuals;
    use crate::sim::state::Viewport;

    fn scene() -> Scene {
        Scene::new(Viewport::new(800.0, 600.0), &BackdropSettings::default(), 12345)
    }

    #[test]
    fn test_time_advances_by_step() {
        let mut scene = scene();
        for _ in 0..50 {
            tick(&mut scene);
        }
        assert!((scene.time - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_time_advances_after_days_open() {
        // 2^19 is about 121 hours at 60 fps
        let mut scene = scene();
        scene.time = 524_288.0;
        let before = scene.time;
        tick(&mut scene);
        assert!(scene.time > before);
        assert!((scene.time - before - 0.02).abs() < 1e-6);

        let visuals: Vec<_> = scene.cells.iter().map(|c| c.visuals).collect();
        tick(&mut scene);
        assert!(scene.cells.iter().zip(&visuals).any(|(c, v)| c.visuals != *v));
    }

    #[test]
    fn test_cells_refreshed_with_current_time() {
        let mut scene = scene();
        tick(&mut scene);
        tick(&mut scene);
        let center = scene.viewport.center();
        for cell in &scene.cells {
            assert_eq!(cell.visuals, compute_cell_visuals(cell, scene.time, center));
        }
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let mut scene = scene();
        for _ in 0..2000 {
            tick(&mut scene);
            assert!(scene.particles.iter().all(|p| scene.viewport.contains(p.pos)));
        }
        assert_eq!(scene.particles.len(), 40);
    }

    #[test]
    fn test_determinism() {
        // Two scenes with the same seed evolve identically
        let mut a = scene();
        let mut b = scene();
        for _ in 0..500 {
            tick(&mut a);
            tick(&mut b);
        }
        assert_eq!(a.particles, b.particles);
        assert_eq!(a.time, b.time);
    }
}
