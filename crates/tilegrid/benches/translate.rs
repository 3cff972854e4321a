//! Benchmarks for the per-shape translate passes

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tilegrid::{
    Axis, AxisTranslation, TilePoint, TilemapOptions, TilemapSeries, finalize_translation,
};

fn grid_points(cols: usize, rows: usize) -> Vec<TilePoint> {
    let mut points = Vec::with_capacity(cols * rows);
    for x in 0..cols {
        for y in 0..rows {
            points.push(TilePoint::new(x as f64, y as f64, (x * y) as f64));
        }
    }
    points
}

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");

    for shape in ["hexagon", "diamond", "circle", "square"] {
        for side in [10usize, 50] {
            let count = side * side;
            group.throughput(Throughput::Elements(count as u64));

            let mut series = TilemapSeries::new(TilemapOptions {
                tile_shape: shape.into(),
                ..Default::default()
            })
            .unwrap()
            .with_points(grid_points(side, side));

            let x_axis = Axis::horizontal(0.0, side as f64, 800.0);
            let y_axis = Axis::vertical(0.0, side as f64, 600.0);
            let xt = finalize_translation(&x_axis, &[&series]);
            let yt = finalize_translation(&y_axis, &[&series]);

            group.bench_with_input(
                BenchmarkId::new(shape, count),
                &count,
                |b, _| {
                    b.iter(|| {
                        series.translate(black_box(&xt), black_box(&yt));
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_padding_negotiation(c: &mut Criterion) {
    let mut group = c.benchmark_group("padding_negotiation");

    let series: Vec<TilemapSeries> = ["hexagon", "diamond", "circle", "square"]
        .iter()
        .map(|shape| {
            TilemapSeries::new(TilemapOptions {
                tile_shape: (*shape).into(),
                ..Default::default()
            })
            .unwrap()
        })
        .collect();
    let refs: Vec<&TilemapSeries> = series.iter().collect();
    let axis = Axis::horizontal(0.0, 50.0, 800.0);

    group.bench_function("four_series", |b| {
        b.iter(|| -> AxisTranslation { finalize_translation(black_box(&axis), &refs) });
    });

    group.finish();
}

criterion_group!(benches, bench_translate, bench_padding_negotiation);
criterion_main!(benches);
