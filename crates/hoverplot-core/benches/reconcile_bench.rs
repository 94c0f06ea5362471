// File: crates/hoverplot-core/benches/reconcile_bench.rs
// Summary: Full-replace render cost of both chart views at growing row counts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hoverplot_core::{
    BarChart, Chart, DatasetHandle, MonthRecord, MonthsDataset, MountPoint, ScatterChart, Size,
    StateRecord, StatesDataset, TooltipHost,
};

fn months(n: usize) -> MonthsDataset {
    let months = (0..n)
        .map(|i| MonthRecord {
            month: Some(format!("M{i}")),
            count: Some(500.0 + (i as f64 * 0.37).sin().abs() * 400.0),
            highest_death: Some((i % 17) as f64),
            order: Some(((i * 7919) % n) as f64),
        })
        .collect();
    MonthsDataset { months }
}

fn states(n: usize) -> StatesDataset {
    let states = (0..n)
        .map(|i| {
            let count = 50.0 + (i * 31 % 900) as f64;
            StateRecord {
                state: Some(format!("State {i}")),
                abreviation: Some(["TX", "CA", "NY", "ZZ"][i % 4].to_string()),
                count: Some(count),
                male_count: Some(count * (0.5 + (i as f64 * 0.11).sin() * 0.4)),
                ..Default::default()
            }
        })
        .collect();
    StatesDataset { states }
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_replace");
    for &n in &[12usize, 1_000, 10_000] {
        group.bench_function(format!("bar_{n}"), |b| {
            let data = months(n);
            let mut chart = Chart::new(
                BarChart::default(),
                MountPoint::attached(Size::new(800.0, 600.0)),
                TooltipHost::new(),
            );
            b.iter(|| {
                chart.set_dataset(DatasetHandle::new(data.clone()));
                black_box(chart.update());
            });
        });
        group.bench_function(format!("scatter_{n}"), |b| {
            let data = states(n);
            let mut chart = Chart::new(
                ScatterChart::default(),
                MountPoint::attached(Size::new(800.0, 600.0)),
                TooltipHost::new(),
            );
            b.iter(|| {
                chart.set_dataset(DatasetHandle::new(data.clone()));
                black_box(chart.update());
            });
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut chart = Chart::new(
        ScatterChart::default(),
        MountPoint::attached(Size::new(800.0, 600.0)),
        TooltipHost::new(),
    );
    chart.set_dataset(DatasetHandle::new(states(5_000)));
    chart.update();
    c.bench_function("pointer_sweep_5000", |b| {
        b.iter(|| {
            for i in 0..100 {
                chart.pointer_at(60.0 + i as f64 * 6.8, 300.0);
            }
            black_box(chart.hover_state());
        });
    });
}

criterion_group!(benches, bench_render, bench_hit_test);
criterion_main!(benches);
