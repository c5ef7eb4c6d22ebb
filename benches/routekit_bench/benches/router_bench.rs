//! Route lookup benchmarks
//!
//! Measures `Router::find` and `Dispatcher::resolve` on a route table
//! shaped like a typical REST API.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use routekit::prelude::*;

const ROUTES: &[&str] = &[
    "/",
    "/health",
    "/users",
    "/users/:id",
    "/users/:id/posts",
    "/users/:id/posts/:post",
    "/users/:id/posts/:post/comments",
    "/orgs/:org/repos/:repo/issues/:number",
    "/search",
    "/support",
    "/static/*path",
    "/docs/",
];

fn router() -> Router<usize> {
    let mut router = Router::new();
    for (i, route) in ROUTES.iter().enumerate() {
        router.insert("GET", route, *route, i).unwrap();
    }
    router
}

/// Benchmark lookups that hit a handler
fn bench_find_hits(c: &mut Criterion) {
    let router = router();
    let mut group = c.benchmark_group("find_hit");

    let cases = [
        ("static", "/support"),
        ("one_param", "/users/12345"),
        ("three_params", "/orgs/rust-lang/repos/rust/issues/1"),
        ("catch_all", "/static/css/vendor/site.min.css"),
    ];

    for (name, path) in cases.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), path, |b, path| {
            let mut params = router.params();
            b.iter(|| {
                params.clear();
                let m = router.find("GET", black_box(path), &mut params);
                black_box(m.value)
            })
        });
    }

    group.finish();
}

/// Benchmark lookups that miss, with and without a redirect hint
fn bench_find_misses(c: &mut Criterion) {
    let router = router();
    let mut group = c.benchmark_group("find_miss");

    group.bench_function("not_found", |b| {
        let mut params = router.params();
        b.iter(|| {
            params.clear();
            black_box(router.find("GET", black_box("/nothing/here"), &mut params).tsr)
        })
    });

    group.bench_function("tsr_strip", |b| {
        let mut params = router.params();
        b.iter(|| {
            params.clear();
            black_box(router.find("GET", black_box("/users/12345/"), &mut params).tsr)
        })
    });

    group.bench_function("tsr_append", |b| {
        let mut params = router.params();
        b.iter(|| {
            params.clear();
            black_box(router.find("GET", black_box("/docs"), &mut params).tsr)
        })
    });

    group.finish();
}

/// Benchmark the full dispatch decision
fn bench_resolve(c: &mut Criterion) {
    let mut builder = Dispatcher::builder();
    for (i, route) in ROUTES.iter().enumerate() {
        builder.get(route, route, i).unwrap();
    }
    builder.post("/users", "create_user", ROUTES.len()).unwrap();
    let dispatcher = builder.build();

    let mut group = c.benchmark_group("resolve");

    let cases = [
        ("found", Method::GET, "/users/42/posts/7"),
        ("redirect", Method::GET, "/users/"),
        ("method_not_allowed", Method::DELETE, "/users"),
        ("not_found", Method::GET, "/nope"),
    ];

    for (name, method, path) in cases.iter() {
        group.bench_function(*name, |b| {
            let mut params = dispatcher.params();
            b.iter(|| {
                params.clear();
                let resolution = dispatcher.resolve(method, black_box(path), &mut params);
                black_box(resolution.status())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_hits, bench_find_misses, bench_resolve);
criterion_main!(benches);
