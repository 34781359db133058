//! Writing rendered figures to disk
//! 
//! PDF output parses the SVG into a usvg tree (system fonts loaded so the
//! text is embedded) and converts it with svg2pdf. The PDF page takes the
//! canvas size, so there is no whitespace beyond the chart's own margins.

use crate::error::{FigureError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use svg2pdf::usvg;
use svg2pdf::{ConversionOptions, PageOptions};

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Vector PDF
    #[default]
    Pdf,
    /// The rendered SVG as is
    Svg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Svg => "svg",
        }
    }
}

/// Converts and writes figures in one format
pub struct Exporter {
    format: ExportFormat,
    options: usvg::Options<'static>,
}

impl Exporter {
    /// Create an exporter; PDF exporters load the system font database once
    pub fn new(format: ExportFormat) -> Self {
        let mut options = usvg::Options::default();
        if format == ExportFormat::Pdf {
            options.fontdb_mut().load_system_fonts();
            log::debug!("loaded {} font faces", options.fontdb.len());
        }

        Self { format, options }
    }

    /// Convert an SVG document to PDF bytes
    pub fn svg_to_pdf(&self, svg: &str) -> Result<Vec<u8>> {
        let tree = usvg::Tree::from_str(svg, &self.options)
            .map_err(|e| FigureError::Svg(e.to_string()))?;

        svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
            .map_err(|e| FigureError::Pdf(e.to_string()))
    }

    /// Write `svg` to `path` in this exporter's format
    /// 
    /// # Arguments
    /// * `svg` - Rendered SVG document
    /// * `path` - Destination; the extension is replaced to match the format
    /// 
    /// # Returns
    /// The path actually written
    pub fn write(&self, svg: &str, path: &Path) -> Result<PathBuf> {
        let path = path.with_extension(self.format.extension());
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        match self.format {
            ExportFormat::Pdf => fs::write(&path, self.svg_to_pdf(svg)?)?,
            ExportFormat::Svg => fs::write(&path, svg)?,
        }

        log::info!("wrote {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = r##"<svg width="100" height="50" viewBox="0 0 100 50" xmlns="http://www.w3.org/2000/svg"><rect x="10" y="10" width="30" height="20" fill="#ff0000"/></svg>"##;

    #[test]
    fn test_extension() {
        assert_eq!(ExportFormat::Pdf.extension(), "pdf");
        assert_eq!(ExportFormat::Svg.extension(), "svg");
        assert_eq!(ExportFormat::default(), ExportFormat::Pdf);
    }

    #[test]
    fn test_svg_to_pdf() {
        let exporter = Exporter::new(ExportFormat::Svg);
        let pdf = exporter.svg_to_pdf(SVG).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_invalid_svg_is_reported() {
        let exporter = Exporter::new(ExportFormat::Svg);
        assert!(matches!(exporter.svg_to_pdf("not svg"), Err(FigureError::Svg(_))));
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(ExportFormat::Svg);

        let written = exporter
            .write(SVG, &dir.path().join("chap02").join("vector2D.pdf"))
            .unwrap();

        assert_eq!(written, dir.path().join("chap02").join("vector2D.svg"));
        assert_eq!(fs::read_to_string(&written).unwrap(), SVG);
    }
}
