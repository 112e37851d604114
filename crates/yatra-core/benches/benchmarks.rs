use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use yatra_core::fuzzy::similarity;
use yatra_core::{Dataset, DirSource, FilterSelection, Level};

fn load_bundled() -> Dataset {
    Dataset::from_source(&DirSource::new(Dataset::default_data_dir())).expect("bundled tables load")
}

fn bench_filter(c: &mut Criterion) {
    let db = load_bundled();
    let mut group = c.benchmark_group("filter");

    group.bench_function("cascade_default", |b| {
        b.iter(|| db.places.cascade(black_box(FilterSelection::default())))
    });

    let sel = db.places.cascade(FilterSelection::default());
    group.bench_function("city_candidates", |b| {
        b.iter(|| db.places.candidates_at_level(Level::City, black_box(&sel)))
    });

    group.finish();
}

fn bench_fuzzy(c: &mut Criterion) {
    let db = load_bundled();
    let mut group = c.benchmark_group("fuzzy");

    group.bench_function("similarity_pair", |b| {
        b.iter(|| {
            similarity(
                black_box("history of taj mahal"),
                black_box("What is the history of the Taj Mahal?"),
            )
        })
    });

    group.bench_function("ask_bundled", |b| {
        b.iter(|| db.qa.ask(black_box("who built konark sun temple")).answer().is_some())
    });

    group.finish();
}

fn bench_tables(c: &mut Criterion) {
    c.bench_function("build_from_tables", |b| b.iter(load_bundled));
}

criterion_group!(benches, bench_filter, bench_fuzzy, bench_tables);
criterion_main!(benches);
