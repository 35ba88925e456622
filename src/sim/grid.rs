//! Honeycomb grid layout
//!
//! Flat-topped hexagons in columns `1.5 * size` apart. Odd columns are shifted
//! down by half a row so neighbouring columns interlock. The layout starts one
//! cell before the origin and runs two cells past the far edge, so partially
//! visible edge cells are always present.

use glam::Vec2;
use rand::Rng;

use super::cell::HexCell;
use crate::consts::MAX_GRID_CELLS;

/// Horizontal distance between column centers
#[inline]
pub fn column_pitch(hex_size: f32) -> f32 {
    hex_size * 1.5
}

/// Vertical distance between row centers (the hexagon's flat-to-flat height)
#[inline]
pub fn row_pitch(hex_size: f32) -> f32 {
    hex_size * 3f32.sqrt()
}

/// Column and row counts for a viewport, margins included.
///
/// Float-to-int casts saturate, so absurd inputs give huge counts rather
/// than wrapping.
pub fn grid_dimensions(width: f32, height: f32, hex_size: f32) -> (usize, usize) {
    let cols = ((width / column_pitch(hex_size)).ceil() as usize).saturating_add(2);
    let rows = ((height / row_pitch(hex_size)).ceil() as usize).saturating_add(2);
    (cols, rows)
}

/// Number of cells `build_grid` emits for these dimensions (the -1 margin
/// row and column included)
pub fn grid_cell_count(cols: usize, rows: usize) -> usize {
    cols.saturating_add(1).saturating_mul(rows.saturating_add(1))
}

/// Center of the cell at (`col`, `row`)
#[inline]
pub fn cell_center(col: i32, row: i32, hex_size: f32) -> Vec2 {
    let row_h = row_pitch(hex_size);
    // `%` keeps the sign, so the -1 margin column is not shifted
    let shift = if col % 2 == 1 { row_h / 2.0 } else { 0.0 };
    Vec2::new(col as f32 * column_pitch(hex_size), row as f32 * row_h + shift)
}

/// Build a fresh grid covering a `width` x `height` viewport.
///
/// Cells are ordered row-major, rows from -1 to `rows - 1`, columns from -1
/// to `cols - 1`. Only phase and speed are random; positions depend on the
/// inputs alone.
pub fn build_grid<R: Rng + ?Sized>(
    width: f32,
    height: f32,
    hex_size: f32,
    rng: &mut R,
) -> Vec<HexCell> {
    if !hex_size.is_finite() || hex_size <= 0.0 {
        log::warn!("Refusing to build grid with hex size {}", hex_size);
        return Vec::new();
    }

    let width = width.max(0.0);
    let height = height.max(0.0);
    let (cols, rows) = grid_dimensions(width, height, hex_size);
    let count = grid_cell_count(cols, rows);
    if count > MAX_GRID_CELLS {
        log::warn!(
            "Refusing to build {} cells (hex size {} on {}x{})",
            count,
            hex_size,
            width,
            height
        );
        return Vec::new();
    }

    // Both fit in i32 once the cell count is bounded
    let (cols, rows) = (cols as i32, rows as i32);
    let mut cells = Vec::with_capacity(count);
    for row in -1..rows {
        for col in -1..cols {
            let pos = cell_center(col, row, hex_size);
            cells.push(HexCell::new(pos, hex_size, col, row, &mut *rng));
        }
    }

    log::debug!(
        "Built {}x{} hex grid ({} cells) for {}x{}",
        cols + 1,
        rows + 1,
        cells.len(),
        width,
        height
    );
    cells
}
