use criterion::{black_box, criterion_group, criterion_main, Criterion};
use review_recommender::{build_index, catalog::seed::seed_products, CategoryFilter, Product};

/// Seed catalog repeated `copies` times with fresh ids
fn synthetic_products(copies: u32) -> Vec<Product> {
    let seed = seed_products();
    let width = seed.len() as u32;
    (0..copies)
        .flat_map(|copy| {
            seed.iter().cloned().map(move |mut p| {
                p.product_id += copy * width;
                p.reviews.push(format!("batch{copy} varian{}", p.product_id % 7));
                p
            })
        })
        .collect()
}

fn index_and_recommend_benchmark(c: &mut Criterion) {
    let products = synthetic_products(200);

    c.bench_function("build_index", |b| {
        b.iter(|| build_index(black_box(products.clone())).unwrap());
    });

    let index = build_index(products).unwrap();
    let all = CategoryFilter::All;
    let snacks = CategoryFilter::parse("Makanan Ringan");

    c.bench_function("recommend_all", |b| {
        b.iter(|| index.recommend(black_box("kopi pahit tapi enak"), &all, 0.0, 5).unwrap());
    });

    c.bench_function("recommend_filtered", |b| {
        b.iter(|| index.recommend(black_box("gurih dan tidak pedas"), &snacks, 4.0, 3).unwrap());
    });
}

criterion_group!(benches, index_and_recommend_benchmark);
criterion_main!(benches);
