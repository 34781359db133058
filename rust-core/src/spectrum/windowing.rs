//! Applying windows to sample sequences before the FFT

use num_complex::Complex64;

/// Apply window to a real signal
/// 
/// # Arguments
/// * `signal` - Input signal
/// * `window` - Window coefficients (same length as the signal)
/// 
/// # Returns
/// Windowed signal
pub fn apply_window(signal: &[f64], window: &[f64]) -> Vec<f64> {
    signal
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect()
}

/// Apply window to a complex signal
pub fn apply_window_complex(signal: &[Complex64], window: &[f64]) -> Vec<Complex64> {
    signal
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect()
}

/// Coherent gain of a window: Σ w[n]
/// 
/// A windowed sinusoid of amplitude A peaks at A·Σw/2 in a one-sided
/// spectrum, so multiplying by 2/Σw restores A.
pub fn coherent_gain(window: &[f64]) -> f64 {
    window.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::windows::{generate_window, WindowType};
    
    #[test]
    fn test_apply_window() {
        let signal = vec![1.0; 100];
        let window = generate_window(WindowType::Hamming, 100);
        let windowed = apply_window(&signal, &window);
        
        assert_eq!(windowed.len(), 100);
        
        // Edges should be reduced (Hamming ~0.08)
        assert!(windowed[0] < 0.1);
        assert!(windowed[99] < 0.1);
        assert!(windowed[50] > 0.99);
    }
    
    #[test]
    fn test_coherent_gain() {
        let rect = generate_window(WindowType::Rectangular, 1000);
        let hamming = generate_window(WindowType::Hamming, 1000);
        
        assert!((coherent_gain(&rect) - 1000.0).abs() < 1e-9);
        
        // Hamming keeps ~54% of the amplitude
        let ratio = coherent_gain(&hamming) / 1000.0;
        assert!(ratio > 0.53 && ratio < 0.55);
    }

    #[test]
    fn test_apply_window_complex() {
        let signal = vec![Complex64::new(1.0, -1.0); 4];
        let windowed = apply_window_complex(&signal, &[0.0, 0.5, 1.0, 0.5]);
        assert_eq!(windowed[1], Complex64::new(0.5, -0.5));
        assert_eq!(windowed[0], Complex64::new(0.0, 0.0));
    }
}
