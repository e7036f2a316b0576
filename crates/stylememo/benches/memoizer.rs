use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use stylememo::{derive_key, CacheKey, StyleMap, ThemeMemoizer};

const EXTENSIONS: &[&str] = &["core", "forms", "icons"];

fn component_keys(count: usize) -> Vec<Option<CacheKey>> {
    let names: Vec<String> = (0..count).map(|i| format!("component-{}", i)).collect();
    names
        .iter()
        .map(|name| derive_key("dark", Some(EXTENSIONS), Some(name.as_str()), &["large"], Some("hover")))
        .collect()
}

fn sample_styles() -> StyleMap {
    (0..16)
        .map(|i| (format!("property-{}", i), format!("value-{}", i)))
        .collect()
}

fn bench_derive_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_key");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("derive_key_3ext_2mod", |b| {
        b.iter(|| {
            black_box(derive_key(
                "dark",
                Some(black_box(EXTENSIONS)),
                Some("button"),
                &["small", "primary"],
                Some("hover"),
            ))
        });
    });

    group.finish();
}

fn bench_fetch_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fetch");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("fetch_hit", |b| {
        let memo = ThemeMemoizer::new();
        let keys = component_keys(100);
        let styles = sample_styles();

        for key in &keys {
            memo.add("dark", *key, styles.clone());
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(memo.fetch("dark", keys[counter % 100]));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_fetch_or_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("fetch_or_create");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("fetch_or_create_warm", |b| {
        let memo = ThemeMemoizer::new();
        let keys = component_keys(100);

        let mut counter = 0;
        b.iter(|| {
            black_box(memo.fetch_or_create("dark", keys[counter % 100], sample_styles));
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_derive_key, bench_fetch_hit, bench_fetch_or_create);
criterion_main!(benches);
