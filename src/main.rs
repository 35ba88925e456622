//! Hex Backdrop entry point
//!
//! On the web this mounts the backdrop onto `#canvas`. Natively there is no
//! window, so it runs a headless session against a recording surface and
//! logs what each frame would draw.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;

    use hex_backdrop::platform::web::{BackdropHandle, init_logging, mount_backdrop};

    thread_local! {
        // Keeps the page-level backdrop alive for the lifetime of the page
        static BACKDROP: RefCell<Option<BackdropHandle>> = const { RefCell::new(None) };
    }

    pub fn run() {
        init_logging();
        log::info!("Hex backdrop starting...");

        match mount_backdrop("canvas") {
            Some(handle) => BACKDROP.with(|slot| *slot.borrow_mut() = Some(handle)),
            None => log::warn!("Canvas not ready; background left blank"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hex_backdrop::platform::ManualScheduler;
    use hex_backdrop::renderer::{DrawCommand, Paint, RecordingSurface};
    use hex_backdrop::{Backdrop, BackdropSettings, Viewport};
    use rand::Rng;

    env_logger::init();
    log::info!("Hex backdrop (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    const FRAMES: usize = 120;

    let mut scheduler = ManualScheduler::new();
    let Some(mut backdrop) = Backdrop::mount(
        Some(RecordingSurface::new(0, 0)),
        Viewport::new(1280.0, 720.0),
        BackdropSettings::load(),
        rand::rng().random(),
        &mut scheduler,
    ) else {
        log::error!("Failed to mount headless backdrop");
        return;
    };

    let mut glows = 0usize;
    let mut commands = 0usize;
    for _ in 0..FRAMES {
        backdrop.surface_mut().take();
        if scheduler.run_frames(&mut backdrop, 1) == 0 {
            break;
        }
        let frame = backdrop.surface().commands();
        commands += frame.len();
        glows += frame
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill(Paint::Radial(_))))
            .count();
    }

    // A resize mid-run swaps the grid but keeps the particles
    backdrop.resize(Viewport::new(1920.0, 1080.0));
    scheduler.run_frames(&mut backdrop, 1);
    let scene = backdrop.scene();
    log::info!(
        "After resize: {} cells, {} particles, t = {:.2}",
        scene.cells.len(),
        scene.particles.len(),
        scene.time
    );

    backdrop.unmount(&mut scheduler);

    println!(
        "{} frames: {:.0} draw calls/frame, {:.1} radial glows/frame",
        FRAMES,
        commands as f64 / FRAMES as f64,
        glows as f64 / FRAMES as f64
    );
}
