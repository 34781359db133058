//! Sampled signal synthesis
//!
//! Sums of complex exponentials or real sinusoids evaluated on a uniform
//! time axis, optionally assembled piecewise over disjoint time intervals.

use num_complex::Complex64;
use std::f64::consts::PI;

/// One spectral line: amplitude weight at a frequency in Hz
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub amplitude: f64,
    pub frequency_hz: f64,
}

impl Tone {
    pub fn new(amplitude: f64, frequency_hz: f64) -> Self {
        Self {
            amplitude,
            frequency_hz,
        }
    }
}

/// Time interval [start, end) in seconds filled with a sum of tones
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub tones: Vec<Tone>,
}

impl Segment {
    /// Whether sample time `t` falls inside this segment's mask
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t < self.end
    }
}

/// Uniform sample times 0, 1/fs, 2/fs, ... strictly below `duration`
///
/// # Arguments
/// * `sample_rate` - Sample rate in Hz
/// * `duration` - Signal length in seconds
pub fn time_axis(sample_rate: f64, duration: f64) -> Vec<f64> {
    let step = 1.0 / sample_rate;
    let num_samples = (duration / step).ceil().max(0.0) as usize;
    (0..num_samples)
        .map(|n| n as f64 / sample_rate)
        .collect()
}

/// Carrier plus lower and upper sideband at ±`offset_hz`
pub fn sideband_triplet(
    carrier_hz: f64,
    offset_hz: f64,
    carrier_amplitude: f64,
    sideband_amplitude: f64,
) -> Vec<Tone> {
    vec![
        Tone::new(carrier_amplitude, carrier_hz),
        Tone::new(sideband_amplitude, carrier_hz - offset_hz),
        Tone::new(sideband_amplitude, carrier_hz + offset_hz),
    ]
}

/// Evaluate Σ Aₖ·e^(j2πfₖt) at a single time instant
fn complex_tone_sample(tones: &[Tone], t: f64) -> Complex64 {
    tones
        .iter()
        .map(|tone| Complex64::from_polar(tone.amplitude, 2.0 * PI * tone.frequency_hz * t))
        .sum()
}

/// Complex multi-tone signal Σ Aₖ·e^(j2πfₖt) over the whole time axis
pub fn complex_tone_sum(tones: &[Tone], t: &[f64]) -> Vec<Complex64> {
    t.iter().map(|&ti| complex_tone_sample(tones, ti)).collect()
}

/// Real multi-tone signal Σ Aₖ·sin(2πfₖt)
pub fn real_tone_sum(tones: &[Tone], t: &[f64]) -> Vec<f64> {
    t.iter()
        .map(|&ti| {
            tones
                .iter()
                .map(|tone| tone.amplitude * (2.0 * PI * tone.frequency_hz * ti).sin())
                .sum()
        })
        .collect()
}

/// Complex signal assembled from time-masked segments
///
/// Each sample takes the tone sum of the first segment whose mask contains
/// its time; samples outside every segment stay at zero.
pub fn piecewise_signal(t: &[f64], segments: &[Segment]) -> Vec<Complex64> {
    t.iter()
        .map(|&ti| {
            segments
                .iter()
                .find(|segment| segment.contains(ti))
                .map(|segment| complex_tone_sample(&segment.tones, ti))
                .unwrap_or_default()
        })
        .collect()
}
