//! Generate a default analysis configuration file
//!
//! Creates a JSON config with all default parameters

use std::{env, path::Path, process};
use theme_color::AnalysisConfig;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json> [grid]", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/theme.json 9", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);
    let grid = match args.get(2).map(|value| value.parse::<u32>()) {
        None => 9,
        Some(Ok(grid)) => grid,
        Some(Err(e)) => {
            eprintln!("Error: invalid grid '{}': {}", args[2], e);
            process::exit(1);
        }
    };

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = AnalysisConfig::with_grid(grid);
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    match config.to_json_file(output_path) {
        Ok(_) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Grid: {0}x{0}, average: {1:?}", config.sampling.grid, config.sampling.average_mode);
            eprintln!("  Similarity threshold: {}", config.clustering.similarity_threshold);
            eprintln!("  Minimum saturation: {}", config.saturation.minimum);
            eprintln!("  Bottom band: {}px", config.region.bottom_height);
            eprintln!("  Luminance threshold: {}", config.luminance.threshold);
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
