use serde::Serialize;

/// Knobs of the iterative denoiser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenoiseParams {
    /// Number of full fit-and-project passes before the flower-selective
    /// pass (>= 1). There is no convergence-based early exit.
    pub iterations: usize,
}

impl DenoiseParams {
    pub fn with_iterations(iterations: usize) -> Self {
        Self { iterations }
    }
}

impl Default for DenoiseParams {
    fn default() -> Self {
        Self { iterations: 5 }
    }
}
