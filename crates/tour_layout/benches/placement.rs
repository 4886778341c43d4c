use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tour_layout::{LabelGeometry, LayoutPolicy, MarkerGeometry, StatusFlags, compute_placement};

/// A long tour with the current step in the middle.
fn build_bar(count: usize) -> (Vec<MarkerGeometry>, Vec<LabelGeometry>) {
    let markers = (0..count)
        .map(|index| {
            let class_attr = match index.cmp(&(count / 2)) {
                core::cmp::Ordering::Less => "complete available",
                core::cmp::Ordering::Equal => "current incomplete available",
                core::cmp::Ordering::Greater => "incomplete unavailable",
            };
            MarkerGeometry::new(24.0, StatusFlags::from_class_attr(class_attr))
        })
        .collect();
    let labels = (0..count)
        .map(|index| LabelGeometry::new(40.0 + (index % 7) as f64 * 8.0))
        .collect();
    (markers, labels)
}

fn bench_placement(criterion: &mut Criterion) {
    let (markers, labels) = build_bar(256);
    for policy in [
        LayoutPolicy::LEADING_ENDPOINT_FLAGS,
        LayoutPolicy::TRAILING_UNIFORM_FLAGS,
        LayoutPolicy::TRAILING_UNIFORM_LAST_COMPLETE,
    ] {
        criterion.bench_function(&format!("placement_256_{policy}"), |bencher| {
            bencher.iter(|| black_box(compute_placement(&markers, &labels, &policy)));
        });
    }
}

criterion_group!(placement_benches, bench_placement);
criterion_main!(placement_benches);
