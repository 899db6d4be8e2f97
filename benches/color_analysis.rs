use criterion::{black_box, criterion_group, criterion_main, Criterion};
use theme_color::color::{self, Rgba};
use theme_color::{AnalysisConfig, BottomRegion, RasterImage, Sampler, ThemeAnalyzer};

fn striped_image() -> RasterImage {
    RasterImage::from_fn(1200, 800, |x, y| {
        let band = ((x / 100) + (y / 100)) % 3;
        match band {
            0 => Rgba { r: 0.1, g: 0.3, b: 0.7, a: 1.0 },
            1 => Rgba { r: 0.8, g: 0.6, b: 0.2, a: 1.0 },
            _ => Rgba::WHITE,
        }
    })
}

fn benchmark_color_analysis(c: &mut Criterion) {
    let image = striped_image();
    let analyzer = ThemeAnalyzer::new(AnalysisConfig::with_grid(9)).expect("valid config");
    let sampler = Sampler::new();

    c.bench_function("analyze_grid_9", |b| {
        b.iter(|| analyzer.analyze(black_box(&image)))
    });

    c.bench_function("average_box_filter", |b| {
        b.iter(|| sampler.average_color(black_box(&image)))
    });

    c.bench_function("bottom_region", |b| {
        b.iter(|| sampler.sample_region(black_box(&image), &BottomRegion::new(100)))
    });

    let samples = analyzer.samples(&image);
    c.bench_function("dominant_81_samples", |b| {
        b.iter(|| color::dominant(black_box(&samples), 0.1))
    });
}

criterion_group!(benches, benchmark_color_analysis);
criterion_main!(benches);
