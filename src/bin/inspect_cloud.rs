use cloud_denoise::diagnostics::print_flower_summary;
use cloud_denoise::io::{load_xy, write_json_file};
use cloud_denoise::DenoisePipeline;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let input = env::args().nth(1).ok_or_else(usage)?;
    let input = Path::new(&input);
    let points = load_xy(input)?;

    let inspection = DenoisePipeline::default()
        .inspect(&points)
        .map_err(|e| format!("{}: {e}", input.display()))?;

    println!("Point cloud {}", input.display());
    println!("  points: {}", points.len());
    println!("  triangles: {}", inspection.view.simplices.len());
    println!("Classification: {:?}", inspection.classification);
    println!(
        "  region radius: {:.4}  mean count: {:.4}  std count: {:.4}",
        inspection.density.region_radius,
        inspection.density.mean_count,
        inspection.density.std_count
    );
    println!("Noise type: {:?}", inspection.noise_type);
    print_flower_summary(&inspection.flowers);

    if let Some(view_path) = env::args().nth(2) {
        let view_path = Path::new(&view_path);
        write_json_file(view_path, &inspection.view)?;
        println!("Wrote triangulation view to {}", view_path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: inspect_cloud <points.xy> [view.json]".to_string()
}
