//! Command-line interface for theme_color
//!
//! Basic CLI tool for trying the analysis on a single image

use std::{env, path::Path, process};
use theme_color::{AnalysisConfig, RasterImage, ThemeAnalyzer, ThemeReport};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut grid = 9;
    let mut show_bottom = false;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--grid" if i + 1 < args.len() => {
                grid = match args[i + 1].parse::<u32>() {
                    Ok(value) => value,
                    Err(_) => {
                        eprintln!("Error: --grid expects a positive integer, got '{}'", args[i + 1]);
                        process::exit(1);
                    }
                };
                i += 1;
            }
            "--bottom" => show_bottom = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };
    let image_path = Path::new(&image_path_str);

    let config = match config_path {
        Some(path) => AnalysisConfig::from_json_file(Path::new(&path)),
        None => Ok(AnalysisConfig::with_grid(grid)),
    };
    let analyzer = match config.and_then(ThemeAnalyzer::new) {
        Ok(analyzer) => analyzer,
        Err(error) => {
            eprintln!("Invalid configuration: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    let image = match RasterImage::open(image_path) {
        Ok(image) => image,
        Err(error) => {
            eprintln!("Analysis failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    let report = analyzer.analyze(&image);
    print_result(&report);

    if show_bottom {
        let bottom = analyzer.corrected_bottom_color(&image);
        eprintln!(
            "  Bottom Color: {} ({})",
            bottom.to_hex(),
            if analyzer.is_light(&bottom) { "light" } else { "dark" }
        );
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Derive a theme color from an image file.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load analysis settings from a JSON file");
    eprintln!("  --grid N         Sampling grid side (default: 9, ignored with --config)");
    eprintln!("  --bottom         Also report the bottom band average color");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} cover.jpg", program_name);
    eprintln!("  {} --grid 4 --bottom cover.png", program_name);
}

fn print_result(report: &ThemeReport) {
    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Theme Color Summary:");
    eprintln!("  Hex Color: {}", report.hex);
    eprintln!("  Luminance: {:.3} ({})", report.luminance, if report.is_light { "light" } else { "dark" });
    eprintln!("  Text Tone: {:?}", report.text_tone);
    eprintln!(
        "  Clusters: {} from {} samples, winner holds {:.1}%",
        report.cluster_count,
        report.sample_count,
        report.dominant_share * 100.0
    );

    if report.used_fallback {
        eprintln!("  Warning: Image could not be sampled; fallback color reported.");
    }
}
