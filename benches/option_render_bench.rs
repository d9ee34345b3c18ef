use criterion::{Criterion, criterion_group, criterion_main};
use highcharts_rs::api::HighchartsChart;
use highcharts_rs::core::{OptionTree, RawExpression};
use std::hint::black_box;

fn series_tree(points: usize) -> OptionTree {
    let data: Vec<f64> = (0..points).map(|i| (i as f64 * 0.1).sin() * 100.0).collect();
    let mut tree = OptionTree::new();
    tree.child("chart").set("type", "spline");
    tree.child("tooltip")
        .set("formatter", RawExpression::new("function () { return this.y.toFixed(2); }"));
    tree.set(
        "series",
        vec![OptionTree::new().with("name", "signal").with("data", data)],
    );
    tree
}

fn bench_render_10k_points(c: &mut Criterion) {
    let chart = HighchartsChart::default().with_options(series_tree(10_000));

    c.bench_function("render_options_10k_points", |b| {
        b.iter(|| {
            let _ = black_box(chart.render_options().expect("render"));
        })
    });
}

fn bench_deep_copy(c: &mut Criterion) {
    let tree = series_tree(10_000);

    c.bench_function("option_tree_clone_10k_points", |b| {
        b.iter(|| black_box(tree.clone()))
    });
}

criterion_group!(benches, bench_render_10k_points, bench_deep_copy);
criterion_main!(benches);
