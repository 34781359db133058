//! Window functions for spectral analysis
//! 
//! Symmetric windows (length-M, endpoints equal) for sampling a window's
//! shape and response, periodic windows for STFT segments.

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    Hann,
    
    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    /// Sidelobe attenuation: ~43 dB
    Hamming,
    
    /// Hamming with a cubic correction term:
    /// w[n] = 0.54 - 0.46*cos(2πn/(M-1)) - 0.006*cos³(2πn/(M-1))
    ///
    /// The 0.006 weight is tuned by eye for the chapter 3 figure.
    HammingPlus,
    
    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    Blackman,
    
    /// Rectangular window (no windowing)
    Rectangular,
}

impl WindowType {
    /// Legend label used in the figures
    pub fn label(&self) -> &'static str {
        match self {
            WindowType::Hann => "汉宁窗",
            WindowType::Hamming | WindowType::HammingPlus => "汉明窗+",
            WindowType::Blackman => "布莱克曼窗",
            WindowType::Rectangular => "标准傅里叶变换",
        }
    }

    /// Weight at phase angle `angle` = 2πn/D
    fn weight(&self, angle: f64) -> f64 {
        match self {
            WindowType::Hann => 0.5 - 0.5 * angle.cos(),
            WindowType::Hamming => 0.54 - 0.46 * angle.cos(),
            WindowType::HammingPlus => {
                let c = angle.cos();
                0.54 - 0.46 * c - 0.006 * c.powi(3)
            }
            WindowType::Blackman => 0.42 - 0.5 * angle.cos() + 0.08 * (2.0 * angle).cos(),
            WindowType::Rectangular => 1.0,
        }
    }
}

fn sample_window(window_type: WindowType, length: usize, denominator: f64) -> Vec<f64> {
    if length == 1 {
        return vec![1.0];
    }

    (0..length)
        .map(|n| window_type.weight(2.0 * PI * n as f64 / denominator))
        .collect()
}

/// Generate symmetric window coefficients
/// 
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
/// 
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1, with w[0] = w[M-1]
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    sample_window(window_type, length, length as f64 - 1.0)
}

/// Generate periodic (DFT-even) window coefficients
/// 
/// Same formula with denominator M instead of M-1, i.e. the first M points of
/// an M+1 symmetric window. Overlapping segments of a periodic Hann window
/// sum to a constant.
pub fn generate_periodic_window(window_type: WindowType, length: usize) -> Vec<f64> {
    sample_window(window_type, length, length as f64)
}
