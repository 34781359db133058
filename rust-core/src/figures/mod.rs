//! Textbook figures
//! 
//! Each figure owns its literal parameters and runs
//! construction → transform → render in one pass.

pub mod double_peak;
pub mod dual_tone;
pub mod vector2d;
pub mod vector3d;
pub mod window_compare;

pub use double_peak::{DoublePeakFigure, DoublePeakParams};
pub use dual_tone::{DualToneFigure, DualToneParams};
pub use vector2d::{Vector2dFigure, Vector2dParams};
pub use vector3d::{Vector3dFigure, Vector3dParams};
pub use window_compare::{WindowCompareFigure, WindowCompareParams};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::render::Exporter;
use std::path::PathBuf;

/// Figure identifiers, in book order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FigureId {
    /// Phasor sum in the complex plane (chapter 2)
    Vector2d,
    /// Phasors of different frequencies on a frequency axis (chapter 2)
    Vector3d,
    /// STFT spectrogram of a carrier hopping from +50 kHz to -50 kHz (chapter 3)
    DoublePeak,
    /// Hamming+ vs rectangular window, time and frequency (chapter 3)
    Window,
    /// Dual-tone spectrum with and without a Hamming window (chapter 5)
    WindowResult,
}

impl FigureId {
    pub const ALL: [FigureId; 5] = [
        FigureId::Vector2d,
        FigureId::Vector3d,
        FigureId::DoublePeak,
        FigureId::Window,
        FigureId::WindowResult,
    ];

    /// The figure with its textbook parameters
    pub fn figure(&self) -> Box<dyn Figure> {
        match self {
            FigureId::Vector2d => Box::new(Vector2dFigure::default()),
            FigureId::Vector3d => Box::new(Vector3dFigure::default()),
            FigureId::DoublePeak => Box::new(DoublePeakFigure::default()),
            FigureId::Window => Box::new(WindowCompareFigure::default()),
            FigureId::WindowResult => Box::new(DualToneFigure::default()),
        }
    }
}

/// One textbook figure
pub trait Figure {
    fn id(&self) -> FigureId;

    /// Output path relative to the export root, e.g. `chap02/vector2D.pdf`
    fn output_path(&self) -> PathBuf;

    /// Build the signal, transform it and draw the chart
    fn render_svg(&self) -> Result<String>;

    /// Console summary printed before the figure is written
    fn report(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Run one figure end to end and return the written path
pub fn generate(figure: &dyn Figure, config: &ExportConfig, exporter: &Exporter) -> Result<PathBuf> {
    log::info!("rendering {:?}", figure.id());

    for line in figure.report()? {
        println!("{line}");
    }

    let svg = figure.render_svg()?;
    exporter.write(&svg, &config.resolve(&figure.output_path()))
}

/// Run every figure in `ids` in order
pub fn generate_all(ids: &[FigureId], config: &ExportConfig) -> Result<Vec<PathBuf>> {
    let exporter = Exporter::new(config.format);
    ids.iter()
        .map(|id| generate(id.figure().as_ref(), config, &exporter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_ids_round_trip() {
        for id in FigureId::ALL {
            assert_eq!(id.figure().id(), id);
        }
    }

    #[test]
    fn test_output_paths_are_unique() {
        let mut paths: Vec<PathBuf> = FigureId::ALL
            .iter()
            .map(|id| id.figure().output_path())
            .collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), FigureId::ALL.len());
    }
}
