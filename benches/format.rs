use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use json_mend::format;

fn record(id: u32) -> String {
    format!(
        r#"{{"id":{id},"name":"record-{id}","active":{},"score":{}.5,"tags":["a","b","c"]}}"#,
        id % 2 == 0,
        id % 100
    )
}

fn valid_array(count: u32) -> String {
    let records: Vec<String> = (0..count).map(record).collect();
    format!("[{}]", records.join(","))
}

fn pasted_objects(count: u32) -> String {
    let records: Vec<String> = (0..count).map(record).collect();
    records.join("\n")
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for &count in &[10u32, 100, 1000] {
        let input = valid_array(count);
        group.bench_with_input(BenchmarkId::new("valid_array", count), &input, |b, input| {
            b.iter(|| format(black_box(input)))
        });

        let input = pasted_objects(count);
        group.bench_with_input(
            BenchmarkId::new("pasted_objects", count),
            &input,
            |b, input| b.iter(|| format(black_box(input))),
        );
    }

    let malformed = {
        let mut text = valid_array(100);
        text.truncate(text.len() - 20);
        text
    };
    group.bench_with_input(
        BenchmarkId::new("malformed", 100),
        &malformed,
        |b, input| b.iter(|| format(black_box(input))),
    );

    group.finish();
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
