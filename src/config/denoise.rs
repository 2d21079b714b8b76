use crate::denoise::DenoiseParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DenoiseToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub denoise: DenoiseConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl DenoiseToolConfig {
    /// Config equivalent to `cloud_denoise <input> [iterations]`.
    pub fn from_input(input: PathBuf, iterations: Option<usize>) -> Self {
        Self {
            input,
            denoise: DenoiseConfig { iterations },
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DenoiseConfig {
    /// Full passes before the flower-selective pass.
    pub iterations: Option<usize>,
}

impl DenoiseConfig {
    pub fn resolve(&self) -> DenoiseParams {
        let mut params = DenoiseParams::default();
        if let Some(v) = self.iterations {
            params.iterations = v;
        }
        params
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    /// Directory for the `.xy` artifacts; defaults to the input's directory.
    pub dir: Option<PathBuf>,
    /// Optional JSON report, relative to `dir` when not absolute.
    pub report_json: Option<PathBuf>,
    /// Embed triangulation and before/after views in the JSON report.
    pub views: bool,
}

impl OutputConfig {
    pub fn report_path(&self) -> Option<PathBuf> {
        let report = self.report_json.as_ref()?;
        Some(match &self.dir {
            Some(dir) => resolve_path(dir, report),
            None => report.clone(),
        })
    }
}

pub fn load_config(path: &Path) -> Result<DenoiseToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
