//! Spectrum analysis helpers
//! 
//! One-sided amplitude spectra with window gain compensation, window
//! frequency responses, and peak picking.

use crate::error::Result;
use super::fft::{fftshift, magnitude_to_db, FftEngine, RealFftEngine};
use super::windowing::{apply_window, coherent_gain};
use super::windows::{generate_window, WindowType};

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// FFT size (number of samples, the whole signal for the book figures)
    pub fft_size: usize,
    
    /// Window type for spectral analysis (symmetric form)
    pub window_type: WindowType,
    
    /// Sample rate in Hz
    pub sample_rate: f64,
    
    /// Scale by 2/Σw instead of 2/N so a windowed sinusoid keeps its amplitude
    pub apply_correction: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 1000,
            window_type: WindowType::Rectangular,
            sample_rate: 1000.0,
            apply_correction: true,
        }
    }
}

/// One-sided amplitude spectrum analyzer
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    fft_engine: RealFftEngine,
    window: Vec<f64>,
    scale: f64,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        let fft_engine = RealFftEngine::new(config.fft_size);
        let window = generate_window(config.window_type, config.fft_size);
        let scale = if config.apply_correction {
            2.0 / coherent_gain(&window)
        } else {
            2.0 / config.fft_size as f64
        };
        
        Self {
            config,
            fft_engine,
            window,
            scale,
        }
    }
    
    /// Analyze signal and return the amplitude spectrum
    /// 
    /// # Arguments
    /// * `signal` - Input signal (windowed, zero-padded to fft_size if shorter)
    /// 
    /// # Returns
    /// Amplitude for bins k = 0..fft_size/2 (Nyquist excluded); a sinusoid of
    /// amplitude A on an exact bin reads A
    pub fn analyze(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        let windowed = apply_window(signal, &self.window);
        let spectrum = self.fft_engine.compute_magnitude(&windowed)?;
        
        Ok(spectrum
            .iter()
            .take(self.config.fft_size / 2)
            .map(|&mag| mag * self.scale)
            .collect())
    }
    
    /// Get frequency bins in Hz, matching `analyze` output
    pub fn frequency_bins_hz(&self) -> Vec<f64> {
        let n = self.config.fft_size;
        (0..n / 2)
            .map(|k| k as f64 * self.config.sample_rate / n as f64)
            .collect()
    }
}

/// Local maxima above `min_height`, strongest first
pub fn find_peaks(spectrum: &[f64], min_height: f64) -> Vec<usize> {
    let mut peaks: Vec<usize> = (1..spectrum.len().saturating_sub(1))
        .filter(|&k| {
            spectrum[k] >= min_height
                && spectrum[k] > spectrum[k - 1]
                && spectrum[k] >= spectrum[k + 1]
        })
        .collect();
    
    peaks.sort_by(|&a, &b| spectrum[b].total_cmp(&spectrum[a]));
    peaks
}

/// Frequency response of a window, normalized and in dB
#[derive(Debug, Clone)]
pub struct WindowResponse {
    /// fftshift-ed response in dB, zero frequency at index nfft/2
    pub db: Vec<f64>,
}

impl WindowResponse {
    /// Bins from zero frequency up to just below Nyquist, with the
    /// normalized frequency axis (1 = Nyquist) in [0, 1)
    pub fn one_sided(&self) -> (Vec<f64>, Vec<f64>) {
        let half = self.db.len() / 2;
        let freqs = (0..half).map(|k| k as f64 / half as f64).collect();
        let values = self.db[half..half + half].to_vec();
        (freqs, values)
    }
}

/// Largest |W[k]| of a window zero-padded to `nfft`
pub fn peak_response(engine: &mut FftEngine, window: &[f64], nfft: usize) -> f64 {
    engine
        .forward_real(window, nfft)
        .iter()
        .map(|c| c.norm())
        .fold(0.0, f64::max)
}

/// Zero-padded, shifted window spectrum relative to `reference`
/// 
/// # Arguments
/// * `engine` - FFT engine
/// * `window` - Window coefficients
/// * `nfft` - Transform length (>= window length)
/// * `reference` - Magnitude mapped to 0 dB
pub fn window_response(
    engine: &mut FftEngine,
    window: &[f64],
    nfft: usize,
    reference: f64,
) -> WindowResponse {
    let magnitude: Vec<f64> = engine
        .forward_real(window, nfft)
        .iter()
        .map(|c| c.norm())
        .collect();
    
    WindowResponse {
        db: magnitude_to_db(&fftshift(&magnitude), reference, 1e-10 * reference),
    }
}
