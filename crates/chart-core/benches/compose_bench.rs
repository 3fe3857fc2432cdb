use chart_core::block::seasonal_zone_series;
use chart_core::svg::render_svg;
use chart_core::{compose, Dimensions, Margins, Row};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_rows(n: usize) -> Vec<Row> {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let f = i as f64;
            let base = 100.0 + (f * 0.01).sin() * 10.0 + f * 0.0001;
            let mut row = Row::new(start + Duration::days(i as i64))
                .with("TSF", base + 2.5)
                .with("LOW", base - 5.0)
                .with("HIGH", base + 10.0);
            // every 50th actual is missing to exercise gap tracing
            row = row.with("actual", if i % 50 == 0 { None } else { Some(base) });
            row
        })
        .collect()
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let series = seasonal_zone_series();
    for &n in &[1_000usize, 10_000usize, 50_000usize] {
        let rows = gen_rows(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("rows{n}")), &rows, |b, rows| {
            b.iter(|| {
                let scene = compose(rows, &series, Dimensions::new(1200.0, 360.0), Margins::default()).unwrap();
                black_box(scene);
            });
        });
    }
    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let rows = gen_rows(10_000);
    let scene = compose(&rows, &seasonal_zone_series(), Dimensions::new(1200.0, 360.0), Margins::default()).unwrap();
    c.bench_function("render_svg_10k", |b| b.iter(|| black_box(render_svg(&scene, None))));
}

criterion_group!(benches, bench_compose, bench_svg);
criterion_main!(benches);
