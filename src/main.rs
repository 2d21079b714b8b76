use cloud_denoise::config::{load_config, DenoiseToolConfig};
use cloud_denoise::diagnostics::RunViews;
use cloud_denoise::io::{
    flower_artifact_path, iterated_artifact_path, load_xy, save_xy, write_json_file,
};
use cloud_denoise::{DenoisePipeline, PipelineOutcome};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let first = env::args().nth(1).ok_or_else(usage)?;
    let config = resolve_config(&first, env::args().nth(2))?;

    let points = load_xy(&config.input)?;
    let params = config.denoise.resolve();
    let pipeline = DenoisePipeline::new(params);
    let (report, graph) = pipeline
        .run_with_graph(&points)
        .map_err(|e| format!("{}: {e}", config.input.display()))?;
    report.print_text_summary();

    let out_dir = config.output.dir.as_deref();
    match &report.outcome {
        PipelineOutcome::Band(out) => {
            let iterated_path =
                iterated_artifact_path(&config.input, pipeline.params().iterations, out_dir);
            save_xy(&out.iterated, &iterated_path)?;
            println!("Saved iterated points to {}", iterated_path.display());

            let flower_path = flower_artifact_path(&config.input, out_dir);
            save_xy(&out.corrected, &flower_path)?;
            println!("Saved flower-corrected points to {}", flower_path.display());
        }
        PipelineOutcome::Distorted => {
            println!("Distorted noise: no denoised output written");
        }
        PipelineOutcome::Clean => {}
    }

    if let Some(path) = config.output.report_path() {
        write_json_file(&path, &report)?;
        println!("Wrote report JSON to {}", path.display());
    }
    if config.output.views {
        let path = views_path(&config.input, out_dir);
        write_json_file(&path, &RunViews::new(&points, &graph, &report))?;
        println!("Wrote views JSON to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: cloud_denoise <config.json> | cloud_denoise <points.xy> [iterations]".to_string()
}

fn resolve_config(first: &str, iterations: Option<String>) -> Result<DenoiseToolConfig, String> {
    let path = Path::new(first);
    if path.extension().is_some_and(|ext| ext == "json") {
        return load_config(path);
    }
    let iterations = iterations
        .map(|raw| {
            raw.parse::<usize>()
                .map_err(|e| format!("Invalid iteration count {raw:?}: {e}"))
        })
        .transpose()?;
    Ok(DenoiseToolConfig::from_input(path.to_path_buf(), iterations))
}

fn views_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => dir.join("views.json"),
        None => input.with_file_name("views.json"),
    }
}
