//! Glow particles
//!
//! Particles drift in a straight line and are respawned with fresh random
//! parameters the moment they leave the viewport. They are never reflected
//! or clamped.

use glam::Vec2;
use rand::Rng;

use super::state::Viewport;
use crate::consts::*;

/// A free-floating point light
#[derive(Debug, Clone, PartialEq)]
pub struct GlowParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
}

impl GlowParticle {
    /// Spawn a particle somewhere inside `bounds`
    pub fn spawn<R: Rng + ?Sized>(bounds: Viewport, rng: &mut R) -> Self {
        let speed = |rng: &mut R| (rng.random::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED;
        Self {
            pos: Vec2::new(
                rng.random::<f32>() * bounds.width,
                rng.random::<f32>() * bounds.height,
            ),
            vel: Vec2::new(speed(&mut *rng), speed(&mut *rng)),
            size: PARTICLE_MIN_SIZE + rng.random::<f32>() * (PARTICLE_MAX_SIZE - PARTICLE_MIN_SIZE),
            opacity: PARTICLE_MIN_OPACITY
                + rng.random::<f32>() * (PARTICLE_MAX_OPACITY - PARTICLE_MIN_OPACITY),
        }
    }

    /// Replace every attribute in place
    pub fn reset<R: Rng + ?Sized>(&mut self, bounds: Viewport, rng: &mut R) {
        *self = Self::spawn(bounds, rng);
    }

    /// Move by velocity, respawning if the particle left `bounds`
    pub fn update<R: Rng + ?Sized>(&mut self, bounds: Viewport, rng: &mut R) {
        self.pos += self.vel;
        if !bounds.contains(self.pos) {
            self.reset(bounds, rng);
        }
    }

    /// Outer radius of the glow disk
    #[inline]
    pub fn glow_radius(&self) -> f32 {
        self.size * PARTICLE_GLOW_FACTOR
    }
}

/// Value form of [`GlowParticle::update`]
pub fn update_particle<R: Rng + ?Sized>(
    particle: &GlowParticle,
    bounds: Viewport,
    rng: &mut R,
) -> GlowParticle {
    let mut next = particle.clone();
    next.update(bounds, rng);
    next
}

/// Allocate the fixed particle collection
pub fn spawn_particles<R: Rng + ?Sized>(
    count: usize,
    bounds: Viewport,
    rng: &mut R,
) -> Vec<GlowParticle> {
    (0..count)
        .map(|_| GlowParticle::spawn(bounds, &mut *rng))
        .collect()
}
