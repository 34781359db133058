//! Export configuration

use crate::render::ExportFormat;
use std::path::{Path, PathBuf};

/// Where and how figures are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Root directory; figures go to `<out_dir>/<chapter>/<file>`
    pub out_dir: PathBuf,

    /// Output format
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            format: ExportFormat::Pdf,
        }
    }
}

impl ExportConfig {
    /// Resolve a figure's relative output path against `out_dir`
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.out_dir
            .join(relative)
            .with_extension(self.format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let config = ExportConfig {
            out_dir: PathBuf::from("book"),
            format: ExportFormat::Svg,
        };
        assert_eq!(
            config.resolve(Path::new("chap03/window.pdf")),
            PathBuf::from("book/chap03/window.svg")
        );
        assert_eq!(
            ExportConfig::default().resolve(Path::new("chap02/vector2D.pdf")),
            PathBuf::from("./chap02/vector2D.pdf")
        );
    }
}
