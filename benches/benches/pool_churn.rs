// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use sightline_observer::{
    IntersectionRecord, ObserverPool, RecordingBackend, SensorOptions, Threshold,
};

fn shared_options() -> SensorOptions<u32> {
    SensorOptions {
        root: None,
        margin: String::from("34px 0px 34px 0px"),
        thresholds: Threshold::One(0.2),
    }
}

fn distinct_options(i: usize) -> SensorOptions<u32> {
    SensorOptions {
        root: None,
        margin: format!("{}px 0px {}px 0px", i, i),
        thresholds: Threshold::One(0.2),
    }
}

fn gen_records(n: usize) -> Vec<IntersectionRecord<u32>> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let top = i as f64 * 90.0;
        out.push(IntersectionRecord {
            target: i as u32,
            is_intersecting: i % 2 == 0,
            bounds: Rect::new(0.0, top, 400.0, top + 80.0),
            ratio: 0.5,
        });
    }
    out
}

fn bench_acquire_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_acquire_release");
    for &n in &[64usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        let options = shared_options();
        group.bench_function(format!("shared_sensor_n{}", n), |b| {
            b.iter_batched(
                || ObserverPool::new(RecordingBackend::new()),
                |pool| {
                    let mut ids = Vec::with_capacity(n);
                    for i in 0..n {
                        ids.push(pool.acquire(i as u32, &options, |_| {}));
                    }
                    for (i, id) in ids.into_iter().enumerate() {
                        pool.release(id, i as u32);
                    }
                    black_box(pool.sensor_count());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("distinct_sensors_n{}", n), |b| {
            let options: Vec<_> = (0..n).map(distinct_options).collect();
            b.iter_batched(
                || ObserverPool::new(RecordingBackend::new()),
                |pool| {
                    let mut ids = Vec::with_capacity(n);
                    for (i, options) in options.iter().enumerate() {
                        ids.push(pool.acquire(i as u32, options, |_| {}));
                    }
                    for (i, id) in ids.into_iter().enumerate() {
                        pool.release(id, i as u32);
                    }
                    black_box(pool.sensor_count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_deliver(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_deliver");
    for &n in &[64usize, 256, 1024] {
        let records = gen_records(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("batch_n{}", n), |b| {
            b.iter_batched(
                || {
                    let pool = ObserverPool::new(RecordingBackend::new());
                    let options = shared_options();
                    let hits = Rc::new(Cell::new(0usize));
                    let mut id = None;
                    for i in 0..n {
                        let hits = Rc::clone(&hits);
                        id = Some(pool.acquire(i as u32, &options, move |record| {
                            if record.is_intersecting {
                                hits.set(hits.get() + 1);
                            }
                        }));
                    }
                    (pool, id.expect("at least one registration"), hits)
                },
                |(pool, id, hits)| {
                    pool.deliver(id, &records);
                    black_box(hits.get());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_slot_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_slot_churn");
    group.throughput(Throughput::Elements(1024));
    group.bench_function("acquire_release_cycle_x1024", |b| {
        let options = shared_options();
        b.iter_batched(
            || ObserverPool::new(RecordingBackend::new()),
            |pool| {
                // Last registration out disposes the sensor, so every cycle
                // allocates and frees one slot.
                for i in 0..1024u32 {
                    let id = pool.acquire(i, &options, |_| {});
                    pool.release(id, i);
                }
                black_box(pool.sensor_count());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_acquire_release, bench_deliver, bench_slot_churn);
criterion_main!(benches);
