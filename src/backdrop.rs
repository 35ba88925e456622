//! Surface lifecycle
//!
//! A [`Backdrop`] owns the surface, the scene and the loop for one mounted
//! instance. Mounting without a surface is a silent no-op; resizing rebuilds
//! the grid; unmounting stops the loop.

use crate::animation::AnimationLoop;
use crate::platform::FrameScheduler;
use crate::renderer::{Surface, draw_frame};
use crate::settings::BackdropSettings;
use crate::sim::{Scene, tick};

pub use crate::sim::Viewport;

/// One mounted hex backdrop
pub struct Backdrop<S: Surface> {
    surface: S,
    scene: Scene,
    settings: BackdropSettings,
    animation: AnimationLoop,
}

impl<S: Surface> Backdrop<S> {
    /// Mount onto `surface` and start animating.
    ///
    /// Returns `None` without touching the scheduler when no surface is
    /// available yet; the host may simply try again on its next mount. The
    /// first frame is drawn immediately, later ones through `scheduler`.
    pub fn mount<F: FrameScheduler + ?Sized>(
        surface: Option<S>,
        viewport: Viewport,
        settings: BackdropSettings,
        seed: u64,
        scheduler: &mut F,
    ) -> Option<Self> {
        let Some(mut surface) = surface else {
            log::warn!("No drawing surface available; backdrop not started");
            return None;
        };

        let settings = settings.sanitized();
        let (w, h) = surface_size(viewport);
        surface.set_size(w, h);

        let scene = Scene::new(viewport, &settings, seed);
        log::info!(
            "Backdrop mounted at {}x{}: {} cells, {} particles",
            w,
            h,
            scene.cells.len(),
            scene.particles.len()
        );

        let mut backdrop = Self {
            surface,
            scene,
            settings,
            animation: AnimationLoop::new(),
        };
        backdrop.frame(scheduler);
        Some(backdrop)
    }

    /// Run one scheduled frame. Returns `false` once the loop is stopped.
    pub fn frame<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) -> bool {
        if !self.animation.begin_frame() {
            return false;
        }

        tick(&mut self.scene);
        draw_frame(&mut self.surface, &self.scene, &self.settings);

        self.animation.schedule(scheduler);
        true
    }

    /// Match a new viewport: resize the surface and rebuild the grid
    pub fn resize(&mut self, viewport: Viewport) {
        let (w, h) = surface_size(viewport);
        self.surface.set_size(w, h);
        self.scene.resize(viewport);
        log::debug!("Backdrop resized to {}x{} ({} cells)", w, h, self.scene.cells.len());
    }

    /// Stop the loop and cancel the pending frame
    pub fn unmount<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        self.animation.stop(scheduler);
        log::info!("Backdrop unmounted after {} frames", self.animation.frames());
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn settings(&self) -> &BackdropSettings {
        &self.settings
    }

    pub fn animation(&self) -> &AnimationLoop {
        &self.animation
    }
}

/// Whole-pixel surface size for a viewport
fn surface_size(viewport: Viewport) -> (u32, u32) {
    (viewport.width.max(0.0) as u32, viewport.height.max(0.0) as u32)
}
