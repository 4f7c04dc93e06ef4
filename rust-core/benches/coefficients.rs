use criterion::{black_box, criterion_group, criterion_main, Criterion};
use square_fourier::series::{riemann_steps, FourierCoefficients, FourierSeries, RiemannRule};
use square_fourier::signal::{linspace, BitString, SquareWave};
use square_fourier::FftEngine;

fn default_wave() -> SquareWave {
    let bits = BitString::parse("100101000111011100011110").unwrap().padded(100);
    SquareWave::new(bits, 1.0, 10.0).unwrap()
}

fn benchmark_coefficients(c: &mut Criterion) {
    let wave = default_wave();
    let mut group = c.benchmark_group("coefficients");

    group.bench_function("riemann_200_harmonics", |b| {
        b.iter(|| {
            FourierCoefficients::for_wave(black_box(&wave), 200, 100, RiemannRule::Midpoint).unwrap()
        })
    });

    let steps = riemann_steps(wave.bits().len(), wave.bit_period(), 100).unwrap();
    let mut fft = FftEngine::new(steps).unwrap();
    group.bench_function("fft_200_harmonics", |b| {
        b.iter(|| fft.coefficients(|x| wave.evaluate(x), 200, black_box(wave.period())).unwrap())
    });

    group.finish();
}

fn benchmark_series(c: &mut Criterion) {
    let wave = default_wave();
    let coeffs = FourierCoefficients::for_wave(&wave, 200, 100, RiemannRule::Midpoint).unwrap();
    let series = FourierSeries::new(coeffs);
    let grid = linspace(0.0, 24.0, 10_000);

    c.bench_function("series_sample_10k", |b| b.iter(|| series.sample(black_box(&grid))));
}

criterion_group!(benches, benchmark_coefficients, benchmark_series);
criterion_main!(benches);
