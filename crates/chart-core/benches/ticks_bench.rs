use chart_core::{LinearScale, ScaleTransform, TimeScale};
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_ticks(c: &mut Criterion) {
    let from = NaiveDate::from_ymd_opt(1947, 1, 1).expect("date");
    let to = NaiveDate::from_ymd_opt(2015, 7, 1).expect("date");
    let x = TimeScale::new((from, to), (40.0, 700.0));
    let y = LinearScale::new((0.0, 18064.7), (370.0, 20.0));

    c.bench_function("time_ticks_1947_2015", |b| {
        b.iter(|| {
            let t = x.ticks(black_box(10));
            black_box(t.iter().map(|d| x.format_tick(d, 10)).collect::<Vec<_>>())
        })
    });
    c.bench_function("linear_ticks_gdp", |b| {
        b.iter(|| {
            let t = y.ticks(black_box(10));
            black_box(t.iter().map(|v| y.format_tick(v, 10)).collect::<Vec<_>>())
        })
    });
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
