use super::flowers::FlowerStats;
use super::timing::TimingBreakdown;
use crate::classify::DensityStats;
use crate::denoise::DenoiseParams;
use crate::pipeline::PipelineOutcome;
use crate::types::{Classification, NoiseType};
use serde::Serialize;

/// Result produced by [`DenoisePipeline::run`](crate::DenoisePipeline::run).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub input: InputDescriptor,
    pub params: DenoiseParams,
    pub classification: Classification,
    pub density: DensityStats,
    pub noise_type: NoiseType,
    /// Flower statistics of the input cloud.
    pub flowers: FlowerStats,
    pub outcome: PipelineOutcome,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub points: usize,
    pub triangles: usize,
    pub bounding_extent: f64,
}

fn format_optional(val: Option<f64>) -> String {
    val.map(|v| format!("{:.4}", v))
        .unwrap_or_else(|| "-".to_string())
}

impl PipelineReport {
    pub fn print_text_summary(&self) {
        println!("Point cloud summary");
        println!("  points: {}", self.input.points);
        println!("  triangles: {}", self.input.triangles);
        println!("  bounding extent: {:.4}", self.input.bounding_extent);
        println!("Classification: {:?}", self.classification);
        println!(
            "  region radius: {:.4}  mean count: {:.4}  std count: {:.4}",
            self.density.region_radius, self.density.mean_count, self.density.std_count
        );
        println!("Noise type: {:?}", self.noise_type);
        print_flower_summary(&self.flowers);
        match &self.outcome {
            PipelineOutcome::Clean => println!("Outcome: clean, no denoising required"),
            PipelineOutcome::Distorted => println!("Outcome: distorted noise, denoising declined"),
            PipelineOutcome::Band(out) => {
                println!("Outcome: band noise, {} passes", out.iterations.len());
                for it in &out.iterations {
                    println!(
                        "  pass {}: mean shift {:.6}, max shift {:.6}, unchanged {}",
                        it.iteration, it.mean_shift, it.max_shift, it.unchanged
                    );
                }
                println!(
                    "  flower pass corrected {} points",
                    out.flower_points.len()
                );
            }
        }
        println!("Timings (total {:.3} ms)", self.timings.total_ms);
        for stage in &self.timings.stages {
            println!("  {}: {:.3} ms", stage.label, stage.elapsed_ms);
        }
    }
}

pub fn print_flower_summary(flowers: &FlowerStats) {
    println!(
        "Flower points: {} of {} ({:.1}%)",
        flowers.flower_count(),
        flowers.total_points,
        100.0 * flowers.flower_fraction()
    );
    println!("  with < 5 neighbors: {}", flowers.below_split);
    println!("  with >= 5 neighbors: {}", flowers.at_or_above_split);
    println!(
        "  bounding extent per flower point: {}",
        format_optional(flowers.extent_per_flower)
    );
}
