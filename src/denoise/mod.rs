//! Band-noise removal by iterative local line projection.
//!
//! Overview
//! - Every point looks at its direct triangulation neighbors, drops the far
//!   tail of their distance distribution (`Q3 + 1.1·IQR`), fits a line through
//!   the rest by weighted least squares (weights `1/distance`) and moves onto
//!   that line.
//! - Updates are synchronous: a pass reads one snapshot and writes the next.
//! - After the configured number of passes, one more pass corrects only the
//!   points that still show a flower structure.
//!
//! Modules
//! - [`fit`] – per-point trim, fit and projection.
//! - [`iterative`] – the pass driver ([`IterativeDenoiser`]).
//! - [`params`] – configuration ([`DenoiseParams`]).

pub mod fit;
pub mod iterative;
pub mod params;

pub use fit::{correct_point, project_onto_fit, weighted_line_fit, LineFit, WeightedSample};
pub use iterative::{DenoiseOutput, IterationStats, IterativeDenoiser};
pub use params::DenoiseParams;
