// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sightline_stagger::{Millis, SiblingOrder, StaggerScheduler, StaggerTask};

/// Elements are dense integers grouped a hundred to a parent.
struct Blocks;

impl SiblingOrder<u32> for Blocks {
    fn parent_of(&self, element: u32) -> Option<u32> {
        Some(element / 100)
    }

    fn index_in_parent(&self, element: u32) -> usize {
        (element % 100) as usize
    }
}

fn schedule_reversed(scheduler: &StaggerScheduler<u32, Blocks>, n: usize) {
    // Reverse arrival order makes the flush sort do real work.
    for i in (0..n).rev() {
        scheduler.schedule(
            StaggerTask {
                element: i as u32,
                payload: (),
            },
            Millis(50.0),
            Millis(0.0),
            |_, _| {},
        );
    }
}

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("stagger_schedule");
    for &n in &[64usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("enqueue_rearm_n{}", n), |b| {
            b.iter_batched(
                || StaggerScheduler::new(Blocks),
                |scheduler| {
                    schedule_reversed(&scheduler, n);
                    black_box(scheduler.pending());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("stagger_flush");
    for &n in &[64usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("document_order_n{}", n), |b| {
            b.iter_batched(
                || {
                    let scheduler = StaggerScheduler::new(Blocks);
                    schedule_reversed(&scheduler, n);
                    scheduler
                },
                |scheduler| {
                    black_box(scheduler.flush_due(Millis(50.0)));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("stagger_replace");
    group.throughput(Throughput::Elements(256));
    group.bench_function("reschedule_same_elements_x256", |b| {
        b.iter_batched(
            || {
                let scheduler = StaggerScheduler::new(Blocks);
                schedule_reversed(&scheduler, 256);
                scheduler
            },
            |scheduler| {
                // Every schedule scans the queues to replace the prior task.
                schedule_reversed(&scheduler, 256);
                black_box(scheduler.pending());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_schedule, bench_flush, bench_replace);
criterion_main!(benches);
