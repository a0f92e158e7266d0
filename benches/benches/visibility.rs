// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Rect;
use understory_visibility::{Thresholds, VisibilityTracker};

const ROW_HEIGHT: f64 = 24.0;
const VIEWPORT_HEIGHT: f64 = 800.0;

fn rows(len: u32) -> Vec<(u32, Rect)> {
    (0..len)
        .map(|id| {
            let y = f64::from(id) * ROW_HEIGHT;
            (id, Rect::new(0.0, y, 400.0, y + ROW_HEIGHT))
        })
        .collect()
}

fn viewport(scroll: f64) -> Rect {
    Rect::new(0.0, scroll, 400.0, scroll + VIEWPORT_HEIGHT)
}

fn bench_steady_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility/steady_pass");

    // Hypothesis: with nothing moving, a pass is dominated by hashing and is
    // linear in the number of reported rows.
    for len in [128_u32, 1_024, 8_192] {
        let items = rows(len);
        group.throughput(Throughput::Elements(u64::from(len)));

        let mut tracker = VisibilityTracker::new(Thresholds::default());
        tracker.report_container_bounds(viewport(0.0));
        for (id, bounds) in &items {
            tracker.report_item_bounds(id, *bounds);
        }

        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter(|| {
                tracker.report_container_bounds(viewport(0.0));
                for (id, bounds) in items {
                    black_box(tracker.report_item_bounds(id, *bounds));
                }
            });
        });
    }

    group.finish();
}

fn bench_scrolling_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility/scrolling_passes");

    // Every pass moves the viewport by a few rows, so items enter, leave,
    // and cross thresholds, and the sorted order is rebuilt incrementally.
    for len in [128_u32, 1_024, 8_192] {
        let items = rows(len);
        let max_scroll = (f64::from(len) * ROW_HEIGHT - VIEWPORT_HEIGHT).max(0.0);
        group.throughput(Throughput::Elements(u64::from(len) * 16));

        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter_batched(
                || VisibilityTracker::<u32>::new(Thresholds::default()),
                |mut tracker| {
                    for pass in 0..16_u32 {
                        let scroll = (f64::from(pass) * 3.5 * ROW_HEIGHT).min(max_scroll);
                        tracker.report_container_bounds(viewport(scroll));
                        for (id, bounds) in items {
                            black_box(tracker.report_item_bounds(id, *bounds));
                        }
                    }
                    black_box(tracker.top_visible_item().copied());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_steady_pass, bench_scrolling_passes);
criterion_main!(benches);
