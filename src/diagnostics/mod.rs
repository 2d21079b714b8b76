//! Diagnostics data model exposed by the pipeline and the binaries.
//!
//! `PipelineReport` is the main entry point returned by the pipeline; the
//! views are render-ready snapshots for external plotting tools.

pub mod flowers;
pub mod report;
pub mod timing;
pub mod views;

pub use flowers::{FlowerStats, NEIGHBOR_SPLIT};
pub use report::{print_flower_summary, InputDescriptor, PipelineReport};
pub use timing::{StageTiming, TimingBreakdown};
pub use views::{ComparisonView, RunViews, TriangulationView};
