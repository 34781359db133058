//! Short-Time Fourier Transform
//! 
//! Segment layout follows the common scientific-Python convention: the
//! input is extended by nperseg/2 zeros on both sides, zero-padded so a
//! whole number of hops fits, and every segment spectrum is scaled by 1/Σw.

use super::fft::{fftfreq, fftshift, FftEngine};
use super::windowing::apply_window_complex;
use super::windows::{generate_periodic_window, WindowType};
use crate::error::{FigureError, Result};
use ndarray::{Array2, Axis};
use num_complex::Complex64;

/// STFT configuration
#[derive(Debug, Clone)]
pub struct StftConfig {
    /// Window applied to every segment (periodic form)
    pub window_type: WindowType,
    
    /// Segment length in samples
    pub nperseg: usize,
    
    /// Samples shared by consecutive segments
    pub noverlap: usize,
    
    /// Sample rate in Hz
    pub sample_rate: f64,
    
    /// Keep negative frequencies (required for complex input)
    pub two_sided: bool,
}

impl Default for StftConfig {
    fn default() -> Self {
        Self {
            window_type: WindowType::Hann,
            nperseg: 256,
            noverlap: 128,
            sample_rate: 1.0,
            two_sided: true,
        }
    }
}

impl StftConfig {
    /// Hop between segment starts
    pub fn hop(&self) -> usize {
        self.nperseg - self.noverlap
    }
    
    fn validate(&self) -> Result<()> {
        if self.nperseg == 0 {
            return Err(FigureError::InvalidConfig("nperseg must be positive".into()));
        }
        if self.noverlap >= self.nperseg {
            return Err(FigureError::InvalidConfig(format!(
                "noverlap ({}) must be less than nperseg ({})",
                self.noverlap, self.nperseg
            )));
        }
        Ok(())
    }
}

/// Time-frequency grid produced by `Stft::process`
#[derive(Debug, Clone)]
pub struct StftResult {
    /// Bin frequencies in Hz (one per grid row)
    pub freqs: Vec<f64>,
    
    /// Segment center times in seconds (one per grid column)
    pub times: Vec<f64>,
    
    /// Complex coefficients, shape (freqs.len(), times.len())
    pub values: Array2<Complex64>,
}

impl StftResult {
    /// Reorder rows so frequencies run from -fs/2 to fs/2
    pub fn shifted(&self) -> StftResult {
        let rows = self.values.nrows();
        let order = fftshift(&(0..rows).collect::<Vec<_>>());
        
        StftResult {
            freqs: fftshift(&self.freqs),
            times: self.times.clone(),
            values: self.values.select(Axis(0), &order),
        }
    }
    
    /// |Z| for every grid cell
    pub fn magnitude(&self) -> Array2<f64> {
        self.values.mapv(|z| z.norm())
    }
}

/// STFT processor
pub struct Stft {
    config: StftConfig,
    window: Vec<f64>,
    engine: FftEngine,
}

impl Stft {
    /// Create a new STFT processor, rejecting segment layouts that cannot advance
    pub fn new(config: StftConfig) -> Result<Self> {
        config.validate()?;
        let window = generate_periodic_window(config.window_type, config.nperseg);
        
        Ok(Self {
            config,
            window,
            engine: FftEngine::new(),
        })
    }
    
    /// Number of segments produced for an input of `len` samples
    pub fn num_segments(&self, len: usize) -> usize {
        let nperseg = self.config.nperseg;
        let hop = self.config.hop();
        let extended = len + 2 * (nperseg / 2);
        if extended < nperseg {
            return 1;
        }
        let remainder = (extended - nperseg) % hop;
        let padded = if remainder == 0 { extended } else { extended + hop - remainder };
        (padded - nperseg) / hop + 1
    }
    
    /// Compute the STFT of a complex signal
    pub fn process(&mut self, signal: &[Complex64]) -> StftResult {
        let nperseg = self.config.nperseg;
        let hop = self.config.hop();
        let fs = self.config.sample_rate;
        let num_segments = self.num_segments(signal.len());
        
        // Zero-extended, zero-padded copy of the input
        let half = nperseg / 2;
        let padded_len = (num_segments - 1) * hop + nperseg;
        let mut padded = vec![Complex64::new(0.0, 0.0); padded_len.max(half + signal.len())];
        padded[half..half + signal.len()].copy_from_slice(signal);
        
        let num_bins = if self.config.two_sided { nperseg } else { nperseg / 2 + 1 };
        let scale = 1.0 / self.window.iter().sum::<f64>();
        let mut values = Array2::<Complex64>::zeros((num_bins, num_segments));
        
        for (seg, mut column) in values.axis_iter_mut(Axis(1)).enumerate() {
            let start = seg * hop;
            let segment = apply_window_complex(&padded[start..start + nperseg], &self.window);
            let spectrum = self.engine.forward(&segment, nperseg);
            for (dst, src) in column.iter_mut().zip(spectrum.iter()) {
                *dst = *src * scale;
            }
        }
        
        let freqs = if self.config.two_sided {
            fftfreq(nperseg, 1.0 / fs)
        } else {
            (0..num_bins).map(|k| k as f64 * fs / nperseg as f64).collect()
        };
        let times = (0..num_segments).map(|k| (k * hop) as f64 / fs).collect();
        
        log::debug!(
            "STFT: {} samples -> {} bins x {} segments",
            signal.len(),
            num_bins,
            num_segments
        );
        
        StftResult {
            freqs,
            times,
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    
    fn config() -> StftConfig {
        StftConfig {
            window_type: WindowType::Hann,
            nperseg: 128,
            noverlap: 100,
            sample_rate: 200e3,
            two_sided: true,
        }
    }
    
    #[test]
    fn test_rejects_full_overlap() {
        let bad = StftConfig {
            noverlap: 128,
            ..config()
        };
        assert!(matches!(Stft::new(bad), Err(FigureError::InvalidConfig(_))));
    }
    
    #[test]
    fn test_segment_count() {
        let stft = Stft::new(config()).unwrap();
        // 4000 + 128 = 4128 -> padded to 4132 -> (4132 - 128) / 28 + 1
        assert_eq!(stft.num_segments(4000), 144);
    }
    
    #[test]
    fn test_grid_shape_matches_axes() {
        let mut stft = Stft::new(config()).unwrap();
        let signal = vec![Complex64::new(1.0, 0.0); 4000];
        let result = stft.process(&signal);
        
        assert_eq!(result.values.dim(), (result.freqs.len(), result.times.len()));
        assert_eq!(result.freqs.len(), 128);
        assert_eq!(result.times[0], 0.0);
        assert!((result.times[1] - 28.0 / 200e3).abs() < 1e-15);
    }
    
    #[test]
    fn test_tone_peaks_at_its_frequency() {
        let fs = 200e3;
        let signal: Vec<Complex64> = (0..4000)
            .map(|n| Complex64::from_polar(1.0, 2.0 * PI * 50e3 * n as f64 / fs))
            .collect();
        
        let mut stft = Stft::new(config()).unwrap();
        let result = stft.process(&signal).shifted();
        let magnitude = result.magnitude();
        
        // Middle segment, away from the zero-extended edges
        let column = magnitude.column(result.times.len() / 2);
        let (peak, &peak_mag) = column
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();
        
        assert!((result.freqs[peak] - 50e3).abs() < 1.0);
        // Scaled by 1/Σw, so a unit tone reads ~1.0
        assert!((peak_mag - 1.0).abs() < 1e-6);
    }
    
    #[test]
    fn test_shifted_frequencies_are_sorted() {
        let mut stft = Stft::new(config()).unwrap();
        let result = stft.process(&vec![Complex64::new(0.0, 0.0); 500]).shifted();
        
        assert!(result.freqs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(result.freqs[64], 0.0);
        assert!((result.freqs[0] + 100e3).abs() < 1e-6);
    }
}
