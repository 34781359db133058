//! Spectral transforms: FFT, STFT, windows

pub mod fft;
pub mod windows;
pub mod windowing;
pub mod stft;
pub mod analysis;

pub use fft::{fftfreq, fftshift, ifftshift, magnitude_to_db, FftEngine, RealFftEngine};
pub use windows::{generate_periodic_window, generate_window, WindowType};
pub use windowing::{apply_window, coherent_gain};
pub use stft::{Stft, StftConfig, StftResult};
pub use analysis::{find_peaks, peak_response, window_response, SpectrumAnalyzer, WindowResponse};
