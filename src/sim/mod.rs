//! Scene simulation module
//!
//! Cells, particles, grid layout and the per-frame update. No drawing and no
//! platform dependencies:
//! - Randomness only through the scene's seedable RNG
//! - Stable iteration order (construction order)

pub mod cell;
pub mod grid;
pub mod particle;
pub mod state;
pub mod tick;

pub use cell::{CellVisuals, HexCell, compute_cell_visuals};
pub use grid::{
    build_grid, cell_center, column_pitch, grid_cell_count, grid_dimensions, row_pitch,
};
pub use particle::{GlowParticle, spawn_particles, update_particle};
pub use state::{Scene, Viewport};
pub use tick::tick;
