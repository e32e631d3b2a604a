//! Physics models: oscillator eigenstates, their classical limit, and the
//! range/normalization machinery shared by every frontend.

pub mod classical;
pub mod normalization;
pub mod quantum;
pub mod range;

pub use classical::classical_distribution;
pub use quantum::{probability_density, wavefunction};
pub use range::{x_range, y_max, y_range, RANGE_FACTOR};
