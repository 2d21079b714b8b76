//! Plain-text point tables and JSON reports.
//!
//! - `load_xy` / `parse_xy`: whitespace-delimited `x y` rows, no header.
//! - `save_xy` / `format_xy`: the same format with six decimals.
//! - `iterated_artifact_path` / `flower_artifact_path`: output names derived
//!   from the input name.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::types::{Point, PointSet};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a `.xy` table from disk.
pub fn load_xy(path: &Path) -> Result<PointSet, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    parse_xy(&text).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Parse whitespace-delimited coordinate pairs; blank lines are skipped.
pub fn parse_xy(text: &str) -> Result<PointSet, String> {
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };
        let (Some(second), None) = (fields.next(), fields.next()) else {
            return Err(format!("line {}: expected 2 columns", lineno + 1));
        };
        let x = parse_coord(first, lineno)?;
        let y = parse_coord(second, lineno)?;
        points.push(Point::new(x, y));
    }
    Ok(PointSet::new(points))
}

fn parse_coord(field: &str, lineno: usize) -> Result<f64, String> {
    field
        .parse::<f64>()
        .map_err(|e| format!("line {}: invalid number {field:?}: {e}", lineno + 1))
}

/// One `x y` row per point, six decimals.
pub fn format_xy(points: &PointSet) -> String {
    let mut out = String::with_capacity(points.len() * 24);
    for p in points {
        out.push_str(&format!("{:.6} {:.6}\n", p.x, p.y));
    }
    out
}

/// Write `points` as a `.xy` table, creating parent directories.
pub fn save_xy(points: &PointSet, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, format_xy(points))
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// `<stem>_denoised_<k>iters.xy`, next to the input or inside `out_dir`.
pub fn iterated_artifact_path(input: &Path, iterations: usize, out_dir: Option<&Path>) -> PathBuf {
    derived_path(input, &format!("_denoised_{iterations}iters.xy"), out_dir)
}

/// `<stem>flower_denoised_.xy`, next to the input or inside `out_dir`.
pub fn flower_artifact_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    derived_path(input, "flower_denoised_.xy", out_dir)
}

fn derived_path(input: &Path, suffix: &str, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = format!("{stem}{suffix}");
    match out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
