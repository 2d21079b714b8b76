use thiserror::Error;

/// Precondition failures of the classification and denoising core.
///
/// Every core operation is a deterministic function of its input, so none of
/// these is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenoiseError {
    /// Triangulation impossible: fewer than three points or all collinear.
    #[error("cannot triangulate {points} points (need at least 3, not all collinear)")]
    DegenerateInput { points: usize },
    /// Nearest-neighbor statistics need at least two points.
    #[error("need at least 2 points for nearest-neighbor statistics, got {points}")]
    InsufficientPoints { points: usize },
    /// The denoiser runs a fixed, positive number of passes.
    #[error("iterations must be positive, got {0}")]
    InvalidIterations(usize),
    /// A point set handed to the denoiser does not match its neighbor graph.
    #[error("point set has {points} points but the neighbor graph was built for {graph}")]
    GraphMismatch { points: usize, graph: usize },
}
