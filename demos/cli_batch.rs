//! Batch CLI for theme_color with JSON configuration
//!
//! Processes all images in a directory and writes one JSON report per image

use serde::Serialize;
use std::{env, fs, path::{Path, PathBuf}, process};
use theme_color::raster::is_supported_extension;
use theme_color::{AnalysisConfig, RasterImage, ThemeAnalyzer, ThemeReport};

/// Longest side images are reduced to before analysis
const MAX_SIDE: u32 = 512;

#[derive(Serialize)]
struct BatchEntry {
    file: String,
    report: ThemeReport,
    bottom_hex: String,
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        print_help(&args[0]);
        process::exit(1);
    }

    let config_path = Path::new(&args[1]);
    let input_path = Path::new(&args[2]);

    // Load configuration
    let analyzer = match AnalysisConfig::from_json_file(config_path).and_then(ThemeAnalyzer::new) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("Error loading config file: {}", e);
            process::exit(1);
        }
    };
    eprintln!("Loaded configuration from {}", config_path.display());

    let image_files = match find_image_files(input_path) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error finding image files: {}", e);
            process::exit(1);
        }
    };

    if image_files.is_empty() {
        eprintln!("No image files found in {}", input_path.display());
        process::exit(1);
    }

    eprintln!("Found {} image files to process", image_files.len());
    eprintln!();

    let mut entries = Vec::new();
    let mut error_count = 0;

    for (i, image_path) in image_files.iter().enumerate() {
        let filename = image_path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");

        eprint!("[{}/{}] Processing {}... ", i + 1, image_files.len(), filename);

        let image = match RasterImage::open(image_path) {
            Ok(image) => image,
            Err(error) => {
                eprintln!("✗ {}", error);
                error_count += 1;
                continue;
            }
        };

        // Large photos are reduced first; a failed reduction falls back to the original
        let scaled = analyzer.sampler().scaled_copy(&image, MAX_SIDE);
        let image = scaled.as_ref().unwrap_or(&image);

        let report = analyzer.analyze(image);
        let bottom_hex = analyzer.corrected_bottom_color(image).to_hex();
        eprintln!("✓");

        if env::var("VERBOSE").is_ok() {
            eprintln!("  → Hex: {}, Light: {}, Bottom: {}", report.hex, report.is_light, bottom_hex);
        }

        entries.push(BatchEntry {
            file: filename.to_string(),
            report,
            bottom_hex,
        });
    }

    match serde_json::to_string_pretty(&entries) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing results: {}", e),
    }

    eprintln!();
    eprintln!("Batch processing complete:");
    eprintln!("  Success: {}", entries.len());
    eprintln!("  Errors: {}", error_count);

    if error_count > 0 {
        process::exit(1);
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} <config.json> <input>", program_name);
    eprintln!();
    eprintln!("Derive theme colors for every image in a directory.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json    JSON file containing analysis configuration");
    eprintln!("  input          Image file or directory of images");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VERBOSE=1      Print a summary line for each image");
    eprintln!("  RUST_LOG=debug Show sampling fallbacks");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} theme.json covers/", program_name);
    eprintln!("  VERBOSE=1 {} theme.json covers/ > colors.json", program_name);
}

fn find_image_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();

    if dir.is_file() {
        // Single file provided
        files.push(dir.to_path_buf());
        return Ok(files);
    }

    // Directory provided - scan for image files
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(is_supported_extension);
        if path.is_file() && supported {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
