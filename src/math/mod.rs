//! Mathematical utilities: Hermite polynomials, grids, and integration.

pub mod grid;
pub mod hermite;
pub mod integrate;

pub use grid::*;
pub use hermite::*;
pub use integrate::*;
