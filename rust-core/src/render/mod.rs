//! Chart rendering and export
//! 
//! Every figure draws onto an in-memory SVG canvas; `Exporter` then writes
//! it out as PDF or SVG.

pub mod arrow;
pub mod clip;
pub mod colormap;
pub mod export;
pub mod style;

pub use arrow::{arrow3d_segments, arrow_polygon, QuiverStyle};
pub use clip::visible_runs;
pub use colormap::{cell_edges, Colormap};
pub use export::{ExportFormat, Exporter};
pub use style::FigureStyle;

use crate::error::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Drawing area over the in-memory SVG backend
pub type SvgArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Pixels per inch of the SVG canvas; figure sizes are given in inches
pub const PX_PER_INCH: f64 = 100.0;

/// Canvas size in pixels for a figure size in inches
pub fn canvas_size(width_in: f64, height_in: f64) -> (u32, u32) {
    (
        (width_in * PX_PER_INCH).round() as u32,
        (height_in * PX_PER_INCH).round() as u32,
    )
}

/// Render a chart into an SVG document
/// 
/// # Arguments
/// * `size` - Canvas size in pixels
/// * `draw` - Draws the chart onto the white-filled root area
/// 
/// # Returns
/// The SVG document text
pub fn render_svg<F>(size: (u32, u32), draw: F) -> Result<String>
where
    F: FnOnce(&SvgArea<'_>) -> Result<()>,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size() {
        assert_eq!(canvas_size(8.0, 8.0), (800, 800));
        assert_eq!(canvas_size(6.0, 5.0), (600, 500));
    }

    #[test]
    fn test_render_svg_produces_document() {
        let svg = render_svg((200, 100), |root| {
            root.draw(&Rectangle::new([(10, 10), (50, 50)], RED.filled()))?;
            Ok(())
        })
        .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("width=\"200\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
