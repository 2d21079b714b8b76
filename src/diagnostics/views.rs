//! Render-ready snapshots for external plotting tools.
//!
//! Nothing here draws; the structures carry exactly what a renderer needs and
//! serialize to plain JSON arrays.

use super::report::PipelineReport;
use crate::graph::NeighborGraph;
use crate::types::PointSet;
use serde::Serialize;

/// Points, triangles and highlighted flower points of one snapshot.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangulationView {
    pub points: Vec<[f64; 2]>,
    pub simplices: Vec<[usize; 3]>,
    pub flower_points: Vec<usize>,
}

impl TriangulationView {
    pub fn new(points: &PointSet, graph: &NeighborGraph, flower_points: &[usize]) -> Self {
        Self {
            points: coords(points),
            simplices: graph.simplices().to_vec(),
            flower_points: flower_points.to_vec(),
        }
    }
}

/// Two clouds shown side by side, typically input and denoised output.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    pub before: Vec<[f64; 2]>,
    pub after: Vec<[f64; 2]>,
}

impl ComparisonView {
    pub fn new(before: &PointSet, after: &PointSet) -> Self {
        Self {
            before: coords(before),
            after: coords(after),
        }
    }
}

/// Views written next to a pipeline report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunViews {
    pub input: TriangulationView,
    /// Input vs flower-corrected output; absent unless the cloud was denoised.
    pub comparison: Option<ComparisonView>,
}

impl RunViews {
    pub fn new(points: &PointSet, graph: &NeighborGraph, report: &PipelineReport) -> Self {
        Self {
            input: TriangulationView::new(points, graph, &report.flowers.flower_points),
            comparison: report
                .outcome
                .denoised()
                .map(|out| ComparisonView::new(points, &out.corrected)),
        }
    }
}

fn coords(points: &PointSet) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}
