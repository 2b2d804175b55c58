use criterion::{Criterion, criterion_group, criterion_main};
use gdp_chart::api::{ChartEngine, ChartEngineConfig, group_thousands};
use gdp_chart::core::{Dataset, DatasetValidation, RawObservation, ValueScale};
use gdp_chart::render::NullRenderer;
use std::hint::black_box;

fn quarterly_raw(count: usize) -> Vec<RawObservation> {
    (0..count)
        .map(|i| {
            let year = 1947 + i / 4;
            let month = (i % 4) * 3 + 1;
            RawObservation::new(format!("{year}-{month:02}-01"), 240.0 + i as f64 * 65.5)
        })
        .collect()
}

fn bench_value_scale_round_trip(c: &mut Criterion) {
    let scale = ValueScale::new(18_064.7, 400.0, 20.0, 20.0).expect("valid scale");

    c.bench_function("value_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.value_to_pixel(black_box(9_876.5));
            let _ = scale.pixel_to_value(px);
        })
    });
}

fn bench_group_thousands(c: &mut Criterion) {
    c.bench_function("group_thousands", |b| {
        b.iter(|| group_thousands(black_box(-1_234_567.891)))
    });
}

fn bench_transform_and_frame_10k(c: &mut Criterion) {
    let raw = quarterly_raw(10_000);

    c.bench_function("transform_10k", |b| {
        b.iter(|| Dataset::from_raw(black_box(&raw), DatasetValidation::Strict).expect("dataset"))
    });

    let dataset = Dataset::from_raw(&raw, DatasetValidation::Strict).expect("dataset");
    let engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default(), dataset)
        .expect("engine init");
    c.bench_function("render_frame_10k", |b| {
        b.iter(|| engine.build_render_frame().expect("frame"))
    });
}

criterion_group!(
    benches,
    bench_value_scale_round_trip,
    bench_group_thousands,
    bench_transform_and_frame_10k
);
criterion_main!(benches);
