// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use odontogram_placement::{Measured, Placement, PlacementEngine};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_measurements(count: usize, seed: u64) -> Vec<Measured> {
    let mut rng = Rng::new(seed);
    let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * 1400.0 - 60.0;
            let y = rng.next_f64() * 900.0 - 50.0;
            Measured {
                anchor: Rect::new(x, y, x + 30.0, y + 40.0),
                tooltip: Size::new(80.0 + rng.next_f64() * 160.0, 40.0 + rng.next_f64() * 40.0),
                container: Rect::new(0.0, 60.0, 409.0, 754.0),
                viewport,
            }
        })
        .collect()
}

fn bench_place(c: &mut Criterion) {
    let engine = PlacementEngine::new();
    let measured = gen_measurements(1024, 0x5eed);

    let mut group = c.benchmark_group("place");
    group.throughput(Throughput::Elements(measured.len() as u64));
    for placement in [Placement::Top, Placement::Bottom, Placement::Right] {
        group.bench_function(placement.as_str(), |b| {
            b.iter(|| {
                for m in &measured {
                    black_box(engine.place(black_box(m), placement, 10.0));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_place);
criterion_main!(benches);
