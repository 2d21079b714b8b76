use cloud_denoise::{Point, PointSet};
use std::f64::consts::TAU;

/// Deterministic pseudo-random offset in `[-amp, amp]`.
pub fn jitter(k: usize, amp: f64) -> f64 {
    let h = (k as f64 * 12.9898 + 1.0).sin() * 43758.5453;
    amp * (2.0 * (h - h.floor()) - 1.0)
}

/// `n` points evenly spaced by angle on a circle, each radius perturbed by
/// `jitter(k, amp)`.
pub fn jittered_circle(n: usize, radius: f64, amp: f64) -> PointSet {
    assert!(n > 0, "need at least one point");
    (0..n)
        .map(|k| {
            let t = TAU * k as f64 / n as f64;
            let r = radius + jitter(k, amp);
            Point::new(r * t.cos(), r * t.sin())
        })
        .collect()
}

/// Pushes the selected points radially out to `radius`.
pub fn with_outliers(points: &PointSet, indices: &[usize], radius: f64) -> PointSet {
    let mut out = points.clone().into_points();
    for &i in indices {
        let p = out[i];
        let r = (p.x * p.x + p.y * p.y).sqrt();
        out[i] = Point::new(p.x * radius / r, p.y * radius / r);
    }
    PointSet::new(out)
}

/// Population variance of the distances to the origin.
pub fn radial_variance(points: &PointSet) -> f64 {
    let radii: Vec<f64> = points.iter().map(|p| (p.x * p.x + p.y * p.y).sqrt()).collect();
    let n = radii.len() as f64;
    let mean = radii.iter().sum::<f64>() / n;
    radii.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / n
}
