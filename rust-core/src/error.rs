//! Error type shared by the transform, render and export stages

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FigureError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("FFT failed: {0}")]
    Fft(String),

    #[error("Failed to draw chart: {0}")]
    Render(String),

    #[error("Failed to parse rendered SVG: {0}")]
    Svg(String),

    #[error("Failed to convert SVG to PDF: {0}")]
    Pdf(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<DrawingAreaErrorKind<std::io::Error>> for FigureError {
    fn from(err: DrawingAreaErrorKind<std::io::Error>) -> Self {
        FigureError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FigureError>;
