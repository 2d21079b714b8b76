use nalgebra::Point2;
use serde::Serialize;

/// A single 2-D sample.
pub type Point = Point2<f64>;

/// Ordered snapshot of a point cloud.
///
/// Indices are stable for the lifetime of one snapshot only: the denoiser
/// never edits a set in place, it builds the next snapshot and swaps it in.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn from_xy(coords: &[[f64; 2]]) -> Self {
        coords.iter().map(|&[x, y]| Point::new(x, y)).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Largest side of the axis-aligned bounding box, `0.0` for an empty set.
    pub fn bounding_extent(&self) -> f64 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        let (mut min_x, mut max_x) = (first.x, first.x);
        let (mut min_y, mut max_y) = (first.y, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        (max_x - min_x).max(max_y - min_y)
    }
}

impl std::ops::Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Whole-cloud density verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Classification {
    Clean,
    Noisy,
}

/// Noise type of a cloud; `Clean` is carried through from [`Classification`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoiseType {
    Clean,
    Band,
    Distorted,
}

#[inline]
pub(crate) fn distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}
