//! Textbook Figures - signal-processing figures for the book
//! 
//! Phasor diagrams, STFT spectrograms and window responses, each built from
//! literal parameters, transformed with FFT/STFT and exported as PDF.

pub mod config;
pub mod error;
pub mod figures;
pub mod render;
pub mod signal;
pub mod spectrum;

pub use config::ExportConfig;
pub use error::{FigureError, Result};
pub use figures::{generate, generate_all, Figure, FigureId};
pub use render::ExportFormat;
pub use signal::Phasor;
