//! Benchmarks for the restaurant table views
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dinedash::model::{Restaurant, RestaurantStatus, PARTNER_TIERS};
use dinedash::view::{visible_page, FieldFilter, Pagination};
use dinedash::{EntityStore, Patch};

const CITIES: &[&str] = &["New York", "San Francisco", "Chicago", "Austin", "Seattle"];
const CUISINES: &[&str] = &["Italian", "Japanese", "Mexican", "French", "Indian"];

fn create_restaurants(count: usize) -> Vec<Restaurant> {
    (0..count)
        .map(|i| {
            let status = match i % 3 {
                0 => RestaurantStatus::Active,
                1 => RestaurantStatus::Pending,
                _ => RestaurantStatus::Inactive,
            };
            Restaurant::new(
                i as u32 + 1,
                format!("Restaurant {}", i),
                CITIES[i % CITIES.len()],
                CUISINES[i % CUISINES.len()],
                PARTNER_TIERS[i % PARTNER_TIERS.len()],
            )
            .status(status)
            .metrics(50_000 + i as u64 * 10, 4.0, 500 + i as u32)
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100, 1000, 10000] {
        let restaurants = create_restaurants(size);
        let filter = FieldFilter::new()
            .field("city", "Austin")
            .field("status", "active");

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("apply_{}", size), |b| {
            b.iter(|| filter.apply(black_box(&restaurants)))
        });

        group.bench_function(format!("visible_page_{}", size), |b| {
            let mut pagination = Pagination::new(25);
            b.iter(|| {
                pagination.set_page(3, size);
                visible_page(black_box(&restaurants), &filter, &mut pagination)
            })
        });
    }

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("add_1000", |b| {
        let patch = Patch::new()
            .set("name", "Nori House")
            .set("city", "Seattle")
            .set("cuisine", "Japanese")
            .set("partner", "Standard Partner");
        b.iter(|| {
            let mut store: EntityStore<Restaurant> = EntityStore::default();
            for _ in 0..1000 {
                store.add(black_box(&patch)).unwrap();
            }
            store
        })
    });

    group.bench_function("update_middle_of_1000", |b| {
        let mut store = EntityStore::new(create_restaurants(1000));
        let patch = Patch::new().set("status", "inactive");
        b.iter(|| store.update(black_box(500), &patch).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_store);
criterion_main!(benches);
