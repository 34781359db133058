use criterion::{black_box, criterion_group, criterion_main, Criterion};
use textbook_figures::figures::{DoublePeakFigure, DualToneFigure, WindowCompareFigure};

fn bench_transforms(c: &mut Criterion) {
    let double_peak = DoublePeakFigure::default();
    c.bench_function("stft double_peak", |b| {
        b.iter(|| black_box(double_peak.spectrogram().unwrap()))
    });

    let window = WindowCompareFigure::default();
    c.bench_function("window responses", |b| b.iter(|| black_box(window.traces())));

    let dual_tone = DualToneFigure::default();
    c.bench_function("dual tone spectra", |b| b.iter(|| black_box(dual_tone.spectra().unwrap())));
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
