//! FFT engines
//! 
//! `FftEngine` wraps rustfft for complex sequences (zero-padded forward
//! transform and scaled inverse). `RealFftEngine` wraps realfft for the
//! one-sided spectrum of a real signal.

use crate::error::{FigureError, Result};
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::FftPlanner;
use std::sync::Arc;

/// Complex FFT engine with a plan cache
pub struct FftEngine {
    planner: FftPlanner<f64>,
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FftEngine {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }
    
    /// Forward FFT of length `nfft`
    /// 
    /// # Arguments
    /// * `signal` - Input sequence (zero-padded when shorter than `nfft`,
    ///   truncated when longer)
    /// * `nfft` - Transform length
    /// 
    /// # Returns
    /// Unscaled spectrum X[k] for k = 0..nfft-1
    pub fn forward(&mut self, signal: &[Complex64], nfft: usize) -> Vec<Complex64> {
        let mut buffer = vec![Complex64::new(0.0, 0.0); nfft];
        let copy_len = signal.len().min(nfft);
        buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        
        if nfft > 0 {
            let fft = self.planner.plan_fft_forward(nfft);
            fft.process(&mut buffer);
        }
        
        log::debug!("forward FFT: {} samples -> {} bins", signal.len(), nfft);
        buffer
    }
    
    /// Forward FFT of a real sequence, zero-padded to `nfft`
    pub fn forward_real(&mut self, signal: &[f64], nfft: usize) -> Vec<Complex64> {
        let complex: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        self.forward(&complex, nfft)
    }
    
    /// Inverse FFT scaled by 1/N, so `inverse(forward(x, x.len()))` returns x
    pub fn inverse(&mut self, spectrum: &[Complex64]) -> Vec<Complex64> {
        let n = spectrum.len();
        let mut buffer = spectrum.to_vec();
        
        if n > 0 {
            let ifft = self.planner.plan_fft_inverse(n);
            ifft.process(&mut buffer);
            let scale = 1.0 / n as f64;
            for x in buffer.iter_mut() {
                *x *= scale;
            }
        }
        
        buffer
    }
}

/// FFT engine for real-valued signals
pub struct RealFftEngine {
    /// FFT size (number of samples)
    fft_size: usize,
    
    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,
    
    /// Reusable input buffer
    input_buffer: Vec<f64>,
    
    /// Reusable output buffer (complex spectrum)
    output_buffer: Vec<Complex64>,
}

impl RealFftEngine {
    /// Create new FFT engine
    /// 
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples)
    pub fn new(fft_size: usize) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);
        
        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();
        
        Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        }
    }
    
    /// Compute FFT and return magnitude spectrum
    /// 
    /// # Arguments
    /// * `signal` - Input signal (will be zero-padded if shorter than fft_size)
    /// 
    /// # Returns
    /// Magnitude spectrum |X[k]| for k = 0..=fft_size/2 (positive frequencies only)
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        // Copy signal to input buffer with zero-padding
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        self.input_buffer[copy_len..].fill(0.0);
        
        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .map_err(|e| FigureError::Fft(e.to_string()))?;
        
        Ok(self.output_buffer.iter().map(|c| c.norm()).collect())
    }
}

/// Move the zero-frequency bin to the center (index n/2)
pub fn fftshift<T: Clone>(values: &[T]) -> Vec<T> {
    let mut shifted = values.to_vec();
    shifted.rotate_right(values.len() / 2);
    shifted
}

/// Undo `fftshift`
pub fn ifftshift<T: Clone>(values: &[T]) -> Vec<T> {
    let mut shifted = values.to_vec();
    shifted.rotate_left(values.len() / 2);
    shifted
}

/// Sample frequencies of an n-point DFT with sample spacing `d`
/// 
/// Layout: [0, 1, ..., ceil(n/2)-1, -floor(n/2), ..., -1] / (d·n)
pub fn fftfreq(n: usize, d: f64) -> Vec<f64> {
    let scale = 1.0 / (d * n as f64);
    let positive = n.div_ceil(2);
    (0..n)
        .map(|k| {
            if k < positive {
                k as f64 * scale
            } else {
                -((n - k) as f64) * scale
            }
        })
        .collect()
}

/// 20·log10(|x| / reference), with magnitudes clamped at `floor` to avoid log(0)
pub fn magnitude_to_db(magnitude: &[f64], reference: f64, floor: f64) -> Vec<f64> {
    magnitude
        .iter()
        .map(|&mag| 20.0 * (mag.max(floor) / reference).log10())
        .collect()
}
