//! 2D rendering module
//!
//! Draw routines target the [`Surface`] trait, a small subset of the canvas
//! 2D context: rectangles, paths, arcs, strokes and radial-gradient fills.

pub mod color;
pub mod recording;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

pub use color::{Rgba, colors};
pub use recording::{DrawCommand, RecordingSurface};
pub use shapes::{draw_cell, draw_frame, draw_particle, fade};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// One color stop of a gradient, `offset` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Radial gradient between two concentric circles
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Gradient from `color` at the center to transparent at `radius`
    pub fn glow(center: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            center,
            inner_radius: 0.0,
            outer_radius: radius,
            stops: vec![
                ColorStop { offset: 0.0, color },
                ColorStop {
                    offset: 1.0,
                    color: color.transparent(),
                },
            ],
        }
    }
}

/// Fill style for the current path
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Radial(RadialGradient),
}

/// A drawable 2D surface
pub trait Surface {
    /// Current size in pixels
    fn size(&self) -> (u32, u32);
    /// Resize the backing store
    fn set_size(&mut self, width: u32, height: u32);

    /// Fill an axis-aligned rectangle with a solid color
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    /// Start a new path, discarding the current one
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn close_path(&mut self);
    /// Add a full circle to the current path
    fn circle(&mut self, center: Vec2, radius: f32);

    /// Stroke the current path
    fn stroke(&mut self, color: Rgba, line_width: f32);
    /// Fill the current path
    fn fill(&mut self, paint: &Paint);
}
