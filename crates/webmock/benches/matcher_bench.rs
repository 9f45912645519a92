use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hyper::{HeaderMap, Request};
use std::sync::Arc;
use webmock::engine::{find_match, route_matches, IncomingRequest};
use webmock::{Registry, Route, StubOption};

fn create_routes(count: usize) -> Vec<Arc<Route>> {
    (0..count)
        .map(|i| {
            let route = Route::from_stub(
                "GET",
                &format!("/api/v1/endpoint{i}?page=1"),
                "ok",
                [StubOption::headers("Accept: application/json")],
            )
            .unwrap();
            Arc::new(route)
        })
        .collect()
}

fn request(path: &str) -> Request<()> {
    Request::builder()
        .method("GET")
        .uri(path)
        .header("Accept", "application/json")
        .header("User-Agent", "bench")
        .body(())
        .unwrap()
}

fn bench_route_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_selection");

    for route_count in [10, 50, 100, 500, 1000].iter() {
        let routes = create_routes(*route_count);

        // Selection scans from the newest route, so the last one is the best case.
        let req_last = request(&format!("/api/v1/endpoint{}?page=1", route_count - 1));
        let req_first = request("/api/v1/endpoint0?page=1");
        let req_miss = request("/api/v1/unknown?page=1");

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("match_last", route_count),
            route_count,
            |b, _| {
                let incoming = IncomingRequest::from_request(&req_last);
                b.iter(|| find_match(black_box(&routes), black_box(&incoming)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("match_first", route_count),
            route_count,
            |b, _| {
                let incoming = IncomingRequest::from_request(&req_first);
                b.iter(|| find_match(black_box(&routes), black_box(&incoming)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("no_match", route_count),
            route_count,
            |b, _| {
                let incoming = IncomingRequest::from_request(&req_miss);
                b.iter(|| find_match(black_box(&routes), black_box(&incoming)));
            },
        );
    }

    group.finish();
}

fn bench_single_route_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_route");
    let route = create_routes(1).remove(0);

    let hit = request("/api/v1/endpoint0?page=1");
    group.bench_function("hit", |b| {
        let incoming = IncomingRequest::from_request(&hit);
        b.iter(|| route_matches(black_box(&route), black_box(&incoming)));
    });

    let headers = HeaderMap::new();
    let missing_header = IncomingRequest {
        method: "GET",
        path: "/api/v1/endpoint0",
        query: "page=1",
        headers: &headers,
    };
    group.bench_function("missing_header", |b| {
        b.iter(|| route_matches(black_box(&route), black_box(&missing_header)));
    });

    group.finish();
}

fn bench_registry_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    let registry = Registry::new();
    registry.extend(create_routes(1000).into_iter().map(Arc::unwrap_or_clone));

    group.bench_function("snapshot_1000", |b| {
        b.iter(|| black_box(registry.snapshot()));
    });
    group.bench_function("register_onto_1000", |b| {
        b.iter_batched(
            || {
                let registry = Registry::new();
                registry.extend(create_routes(1000).into_iter().map(Arc::unwrap_or_clone));
                registry
            },
            |registry| registry.register(Route::new("GET", "/extra").unwrap()),
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_route_selection,
    bench_single_route_evaluation,
    bench_registry_snapshot
);
criterion_main!(benches);
