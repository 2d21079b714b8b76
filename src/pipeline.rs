//! Pipeline driver: neighbor graph → density → noise type → denoiser.

use crate::classify::{classify_density, noise_type, DensityStats};
use crate::denoise::{DenoiseOutput, DenoiseParams, IterativeDenoiser};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    FlowerStats, InputDescriptor, PipelineReport, TimingBreakdown, TriangulationView,
};
use crate::error::DenoiseError;
use crate::graph::NeighborGraph;
use crate::types::{Classification, NoiseType, PointSet};
use log::{debug, info};
use serde::Serialize;
use std::time::Instant;

/// Terminal state of a pipeline run.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PipelineOutcome {
    /// Nothing to do.
    Clean,
    /// Denoising declined; the cloud is reported as is.
    Distorted,
    /// Band noise removed.
    Band(DenoiseOutput),
}

impl PipelineOutcome {
    pub fn denoised(&self) -> Option<&DenoiseOutput> {
        match self {
            PipelineOutcome::Band(out) => Some(out),
            _ => None,
        }
    }
}

/// Classification without denoising, for inspection tools.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub classification: Classification,
    pub density: DensityStats,
    pub noise_type: NoiseType,
    pub flowers: FlowerStats,
    pub view: TriangulationView,
}

/// Drives one point cloud from raw samples to a [`PipelineReport`].
#[derive(Clone, Debug, Default)]
pub struct DenoisePipeline {
    params: DenoiseParams,
}

impl DenoisePipeline {
    pub fn new(params: DenoiseParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DenoiseParams {
        &self.params
    }

    /// Classify `points` and denoise them when they carry band noise.
    pub fn run(&self, points: &PointSet) -> Result<PipelineReport, DenoiseError> {
        self.run_with_graph(points).map(|(report, _)| report)
    }

    /// Same as [`run`](Self::run), also handing back the neighbor graph the
    /// run was built on.
    pub fn run_with_graph(
        &self,
        points: &PointSet,
    ) -> Result<(PipelineReport, NeighborGraph), DenoiseError> {
        if self.params.iterations == 0 {
            return Err(DenoiseError::InvalidIterations(0));
        }
        let t0 = Instant::now();
        let mut timings = TimingBreakdown::default();

        let graph = timings.time("neighborGraph", || NeighborGraph::build(points))?;
        let (classification, density) = timings.time("density", || classify_density(points))?;
        let flowers = timings.time("flowers", || FlowerStats::from_graph(points, &graph));
        let noise_type = noise_type(classification, flowers.flower_count(), points.len());
        info!(
            "DenoisePipeline::run points={} classification={:?} noise_type={:?}",
            points.len(),
            classification,
            noise_type
        );

        let outcome = match noise_type {
            NoiseType::Clean => PipelineOutcome::Clean,
            NoiseType::Distorted => {
                debug!(
                    "DenoisePipeline::run only {} of {} flower points, skipping denoiser",
                    flowers.flower_count(),
                    points.len()
                );
                PipelineOutcome::Distorted
            }
            NoiseType::Band => {
                let denoiser = IterativeDenoiser::new(&graph, &self.params)?;
                let output = timings.time("denoise", || denoiser.run(points))?;
                PipelineOutcome::Band(output)
            }
        };

        timings.total_ms = elapsed_ms(t0);
        let report = PipelineReport {
            input: InputDescriptor {
                points: points.len(),
                triangles: graph.simplices().len(),
                bounding_extent: flowers.bounding_extent,
            },
            params: self.params.clone(),
            classification,
            density,
            noise_type,
            flowers,
            outcome,
            timings,
        };
        Ok((report, graph))
    }

    /// Classification and flower statistics only.
    pub fn inspect(&self, points: &PointSet) -> Result<Inspection, DenoiseError> {
        let graph = NeighborGraph::build(points)?;
        let (classification, density) = classify_density(points)?;
        let flowers = FlowerStats::from_graph(points, &graph);
        let noise_type = noise_type(classification, flowers.flower_count(), points.len());
        let view = TriangulationView::new(points, &graph, &flowers.flower_points);
        Ok(Inspection {
            classification,
            density,
            noise_type,
            flowers,
            view,
        })
    }
}
