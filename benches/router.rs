use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use route_trie::{Params, Router};

fn github_like() -> Router<usize> {
    let router = Router::new(0);
    router
        .add("/users/:user", 1)
        .add("/users/:user/repos", 2)
        .add("/repos/:owner/:repo", 3)
        .add("/repos/:owner/:repo/issues", 4)
        .add("/repos/:owner/:repo/issues/:number", 5)
        .add("/repos/:owner/:repo/pulls/new", 6)
        .add("/repos/:owner/:repo/pulls/:number", 7)
        .add("/search/code", 8);
    router
}

fn router_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-find");

    group.bench_function("single-route", |b| {
        let router: Router<usize> = Router::new(0);
        router.add("/hello/:name", 1);
        b.iter(|| {
            let mut params = Params::new();
            router.find("/hello/world", &mut params)
        })
    });

    group.bench_function("github-like", |b| {
        let router = github_like();
        b.iter(|| {
            let mut params = Params::new();
            router.find("/repos/octo/route-trie/pulls/42", &mut params)
        })
    });

    group.bench_function("miss", |b| {
        let router = github_like();
        b.iter(|| router.find("/repos/a/b/c/d/e", &mut ()))
    });
}

fn router_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-add");

    group.bench_function("single-route", |b| {
        b.iter_batched_ref(
            || Router::new(0),
            |router: &mut Router<usize>| {
                router.add("/hello/:name", 1);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, router_find, router_add);
criterion_main!(benches);
