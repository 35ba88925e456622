//! Draw routines for cells, particles and the trail fade

use super::{Paint, RadialGradient, Surface};
use crate::consts::{DOT_RADIUS, GLOW_RADIUS_FACTOR};
use crate::hexagon_vertices;
use crate::settings::BackdropSettings;
use crate::sim::{GlowParticle, HexCell, Scene};

/// Paint the translucent fill that fades the previous frame into a trail
pub fn fade<S: Surface + ?Sized>(surface: &mut S, settings: &BackdropSettings) {
    let (w, h) = surface.size();
    let color = settings.palette.fade.with_alpha(settings.fade_alpha);
    surface.fill_rect(0.0, 0.0, w as f32, h as f32, color);
}

/// Draw one cell using its cached visuals
pub fn draw_cell<S: Surface + ?Sized>(surface: &mut S, cell: &HexCell, settings: &BackdropSettings) {
    let visuals = cell.visuals;
    let palette = &settings.palette;

    let verts = hexagon_vertices(cell.pos, cell.size);
    surface.begin_path();
    surface.move_to(verts[0]);
    for v in &verts[1..] {
        surface.line_to(*v);
    }
    surface.close_path();

    // Glow under the outline
    if visuals.has_glow() {
        let gradient = RadialGradient::glow(
            cell.pos,
            cell.size * GLOW_RADIUS_FACTOR,
            palette.grid.with_alpha(visuals.glow),
        );
        surface.fill(&Paint::Radial(gradient));
    }

    surface.stroke(palette.grid.with_alpha(visuals.opacity), settings.stroke_width);

    if visuals.has_dot() {
        surface.begin_path();
        surface.circle(cell.pos, DOT_RADIUS);
        surface.fill(&Paint::Solid(palette.highlight.with_alpha(visuals.glow * 2.0)));
    }
}

/// Draw a particle as a soft glow disk
pub fn draw_particle<S: Surface + ?Sized>(
    surface: &mut S,
    particle: &GlowParticle,
    settings: &BackdropSettings,
) {
    let radius = particle.glow_radius();
    let gradient = RadialGradient::glow(
        particle.pos,
        radius,
        settings.palette.highlight.with_alpha(particle.opacity),
    );
    surface.begin_path();
    surface.circle(particle.pos, radius);
    surface.fill(&Paint::Radial(gradient));
}

/// Composite a full frame: fade, then every cell, then every particle
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, scene: &Scene, settings: &BackdropSettings) {
    fade(surface, settings);
    for cell in &scene.cells {
        draw_cell(surface, cell, settings);
    }
    for particle in &scene.particles {
        draw_particle(surface, particle, settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface, Rgba, colors};
    use crate::sim::CellVisuals;
    use glam::Vec2;

    fn cell(visuals: CellVisuals) -> HexCell {
        HexCell {
            pos: Vec2::new(100.0, 100.0),
            size: 40.0,
            col: 1,
            row: 1,
            phase_offset: 0.0,
            pulse_speed: 0.03,
            visuals,
        }
    }

    fn fills(surface: &RecordingSurface) -> Vec<&Paint> {
        surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_dim_cell_is_outline_only() {
        let settings = BackdropSettings::default();
        let mut surface = RecordingSurface::new(800, 600);
        draw_cell(&mut surface, &cell(CellVisuals::from_pulse(-0.5)), &settings);

        assert!(fills(&surface).is_empty());
        let strokes = surface.strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].0, colors::GRID.with_alpha(0.075));
        assert_eq!(strokes[0].1, 1.5);
        // Hexagon path: move + 5 lines + close
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::LineTo(_))), 5);
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::ClosePath)), 1);
    }

    #[test]
    fn test_bright_cell_has_glow_and_dot() {
        let settings = BackdropSettings::default();
        let mut surface = RecordingSurface::new(800, 600);
        draw_cell(&mut surface, &cell(CellVisuals::from_pulse(1.0)), &settings);

        let fills = fills(&surface);
        assert_eq!(fills.len(), 2);
        match fills[0] {
            Paint::Radial(g) => {
                assert_eq!(g.center, Vec2::new(100.0, 100.0));
                assert_eq!(g.outer_radius, 60.0);
                assert_eq!(g.stops[0].color, colors::GRID.with_alpha(0.3));
                assert_eq!(g.stops[1].color.a, 0.0);
            }
            other => panic!("expected radial glow, got {:?}", other),
        }
        match fills[1] {
            Paint::Solid(c) => assert!((c.a - 0.6).abs() < 1e-6),
            other => panic!("expected solid dot, got {:?}", other),
        }

        // Glow fill is issued before the outline stroke
        let fill_idx = surface
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::Fill(_)));
        let stroke_idx = surface
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::Stroke { .. }));
        assert!(fill_idx < stroke_idx);
    }

    #[test]
    fn test_dot_alpha_clamped() {
        // Out-of-range glow would ask for alpha 1.6
        let settings = BackdropSettings::default();
        let mut surface = RecordingSurface::new(800, 600);
        let hot = CellVisuals {
            opacity: 0.3,
            glow: 0.8,
        };
        draw_cell(&mut surface, &cell(hot), &settings);
        let last = fills(&surface).pop().cloned();
        assert_eq!(last, Some(Paint::Solid(colors::HIGHLIGHT.with_alpha(1.0))));
    }

    #[test]
    fn test_particle_glow_disk() {
        let settings = BackdropSettings::default();
        let mut surface = RecordingSurface::new(800, 600);
        let p = GlowParticle {
            pos: Vec2::new(10.0, 20.0),
            vel: Vec2::ZERO,
            size: 2.0,
            opacity: 0.5,
        };
        draw_particle(&mut surface, &p, &settings);

        assert!(surface.commands().contains(&DrawCommand::Circle {
            center: Vec2::new(10.0, 20.0),
            radius: 6.0
        }));
        let expected = RadialGradient::glow(
            Vec2::new(10.0, 20.0),
            6.0,
            Rgba { a: 0.5, ..colors::HIGHLIGHT },
        );
        assert_eq!(fills(&surface), vec![&Paint::Radial(expected)]);
    }

    #[test]
    fn test_fade_covers_surface() {
        let settings = BackdropSettings::default();
        let mut surface = RecordingSurface::new(320, 200);
        fade(&mut surface, &settings);
        assert_eq!(
            surface.commands(),
            &[DrawCommand::FillRect {
                x: 0.0,
                y: 0.0,
                width: 320.0,
                height: 200.0,
                color: colors::FADE.with_alpha(0.95),
            }]
        );
    }
}
