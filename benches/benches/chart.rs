// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use odontogram::{ChartConfig, Odontogram};
use odontogram_notation::{Notation, ToothRegistry, convert};

fn bench_convert(c: &mut Criterion) {
    let codes: Vec<_> = ToothRegistry.codes().collect();
    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Elements(codes.len() as u64));
    for notation in [Notation::Fdi, Notation::Universal, Notation::Palmer] {
        group.bench_function(notation.as_str(), |b| {
            b.iter(|| {
                for code in &codes {
                    black_box(convert(black_box(code), notation));
                }
            });
        });
    }
    group.finish();
}

fn bench_chart(c: &mut Criterion) {
    let codes: Vec<_> = ToothRegistry.codes().collect();

    c.bench_function("chart/teeth", |b| {
        let chart = Odontogram::default();
        b.iter(|| black_box(chart.teeth()));
    });

    c.bench_function("chart/toggle_all", |b| {
        b.iter_batched(
            Odontogram::default,
            |mut chart| {
                for code in &codes {
                    chart.click(code);
                }
                black_box(chart.form_field())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_convert, bench_chart);
criterion_main!(benches);
