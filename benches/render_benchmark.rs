use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scenic_ny_map::config::Config;
use scenic_ny_map::models::{PrimaryDocument, Waterfall};
use scenic_ny_map::services::{drive_time_color, Datasets, MapShell};

fn benchmark_drive_time_color(c: &mut Criterion) {
    let inputs = ["45m", "2h 15m", "3h 30m", "5h", "unknown"];

    c.bench_function("drive_time_color", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(drive_time_color(black_box(input)));
            }
        })
    });
}

fn benchmark_compose(c: &mut Criterion) {
    let primary: PrimaryDocument =
        serde_json::from_str(include_str!("../tests/fixtures/map-data.json"))
            .expect("Failed to parse fixture");
    let mut datasets = Datasets::primary_only(primary);

    // A large synthetic waterfall set spread over the Catskills
    datasets.waterfalls = (0..2_000)
        .map(|i| {
            serde_json::from_value::<Waterfall>(serde_json::json!({
                "name": format!("Falls {}", i),
                "lat": 41.9 + (i % 50) as f64 * 0.01,
                "lng": -74.6 + (i / 50) as f64 * 0.015,
                "height_ft": 5 + (i % 300),
            }))
            .expect("Synthetic waterfall")
        })
        .collect();

    let shell = MapShell::new(&Config::default());
    c.bench_function("compose_scene", |b| {
        b.iter(|| shell.compose(black_box(&datasets)))
    });
}

criterion_group!(benches, benchmark_drive_time_color, benchmark_compose);
criterion_main!(benches);
