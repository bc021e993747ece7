use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use catalog::{
  AppType, CatalogService, CreateProductRequest, InMemoryProductRepository, ProductFilter,
};
use serde_json::json;
use std::sync::Arc;
use tokio::runtime::Runtime; // To run async code within Criterion

// --- Helper: Catalog Populated With `size` Products ---
fn populated_service(rt: &Runtime, size: usize) -> CatalogService {
  let service = CatalogService::new(Arc::new(InMemoryProductRepository::new()));
  rt.block_on(async {
    for i in 0..size {
      let app_type = if i % 2 == 0 { 1 } else { 2 };
      let request: CreateProductRequest =
        serde_json::from_value(json!({ "name": format!("Product {}", i), "price": i as f64, "appType": app_type }))
          .expect("valid payload");
      service.create(request).await.expect("create");
    }
  });
  service
}

// --- Benchmark Functions ---

fn bench_filtered_list(c: &mut Criterion) {
  let rt = Runtime::new().expect("tokio runtime");
  let mut group = c.benchmark_group("catalog_list");

  for size in [100usize, 1_000, 10_000] {
    let service = populated_service(&rt, size);
    let service = &service;
    group.throughput(Throughput::Elements(size as u64));

    group.bench_with_input(BenchmarkId::new("all", size), &size, |b, _| {
      b.to_async(&rt).iter(|| async move { service.list(ProductFilter::all()).await.expect("list") })
    });
    group.bench_with_input(BenchmarkId::new("app_type", size), &size, |b, _| {
      b.to_async(&rt)
        .iter(|| async move { service.list(ProductFilter::for_app(AppType::Web2)).await.expect("list") })
    });
  }
  group.finish();
}

fn bench_request_validation(c: &mut Criterion) {
  let body = json!({
    "name": "Wireless Mouse",
    "description": "Ergonomic wireless mouse with long battery life",
    "price": "39.99",
    "category": "Accessories",
    "appType": "2",
    "inStock": true
  });

  c.bench_function("validate_create_request", |b| {
    b.iter(|| {
      let request: CreateProductRequest = serde_json::from_value(body.clone()).expect("payload");
      request.validate().expect("valid")
    })
  });
}

criterion_group!(benches, bench_filtered_list, bench_request_validation);
criterion_main!(benches);
