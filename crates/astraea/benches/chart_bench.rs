use astraea::{chart, SimCalendar};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_generate_chart(c: &mut Criterion) {
    let calendar = SimCalendar::default();

    c.bench_function("generate_chart", |b| {
        b.iter(|| {
            chart::generate(
                black_box(&calendar),
                black_box(23),
                black_box(412),
                black_box(38.9072),
            )
        })
    });
}

criterion_group!(benches, bench_generate_chart);
criterion_main!(benches);
