//! Canvas 2D surface (web only)

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Paint, RadialGradient, Rgba, Surface};

/// [`Surface`] backed by an `HtmlCanvasElement` and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas, or `None` if it has no 2D context yet
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx,
            Ok(None) => {
                log::warn!("Canvas has no 2d context");
                return None;
            }
            Err(e) => {
                log::warn!("getContext('2d') failed: {:?}", e);
                return None;
            }
        };
        let ctx = ctx.dyn_into::<CanvasRenderingContext2d>().ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn gradient(&self, g: &RadialGradient) -> Option<CanvasGradient> {
        let gradient = self
            .ctx
            .create_radial_gradient(
                g.center.x as f64,
                g.center.y as f64,
                g.inner_radius as f64,
                g.center.x as f64,
                g.center.y as f64,
                g.outer_radius as f64,
            )
            .map_err(|e| log::warn!("createRadialGradient failed: {:?}", e))
            .ok()?;
        for stop in &g.stops {
            if let Err(e) = gradient.add_color_stop(stop.offset, &stop.color.to_css()) {
                log::warn!("addColorStop failed: {:?}", e);
                return None;
            }
        }
        Some(gradient)
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Vec2) {
        self.ctx.move_to(p.x as f64, p.y as f64);
    }

    fn line_to(&mut self, p: Vec2) {
        self.ctx.line_to(p.x as f64, p.y as f64);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("arc failed: {:?}", e);
        }
    }

    fn stroke(&mut self, color: Rgba, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Radial(g) => match self.gradient(g) {
                Some(gradient) => self.ctx.set_fill_style_canvas_gradient(&gradient),
                None => return,
            },
        }
        self.ctx.fill();
    }
}
