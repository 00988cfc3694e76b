use criterion::{criterion_group, criterion_main, Criterion};
use farm_stress_monitor::sensor::{ReadingGenerator, SensorRanges};
use farm_stress_monitor::session::Session;
use farm_stress_monitor::stress::calculate_csi;

fn benchmark_reading_generation(c: &mut Criterion) {
    let mut gen = ReadingGenerator::seeded(42, SensorRanges::default());
    c.bench_function("reading_generate", |b| b.iter(|| gen.generate()));
}

fn benchmark_csi(c: &mut Criterion) {
    c.bench_function("csi_compute", |b| b.iter(|| calculate_csi(31.4, 47.0, 22.5)));
}

fn benchmark_session_record(c: &mut Criterion) {
    let mut gen = ReadingGenerator::seeded(42, SensorRanges::default());
    c.bench_function("session_record_100", |b| {
        b.iter(|| {
            let mut session = Session::new();
            for _ in 0..100 {
                let _ = session.record(gen.generate());
            }
            session.len()
        })
    });
}

criterion_group!(benches, benchmark_reading_generation, benchmark_csi, benchmark_session_record);
criterion_main!(benches);
