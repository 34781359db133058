//! Chapter 3: Hamming+ window against the plain (rectangular) Fourier
//! transform, as time-domain weights and as frequency response

use super::{Figure, FigureId};
use crate::error::Result;
use crate::render::style::{TAB_BLUE, TAB_RED};
use crate::render::{canvas_size, render_svg, visible_runs, FigureStyle, SvgArea};
use crate::spectrum::{generate_window, peak_response, window_response, FftEngine, WindowType};
use plotters::prelude::*;
use std::ops::Range;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct WindowCompareParams {
    /// Window length in samples
    pub length: usize,

    /// Zero-padded FFT length for the response
    pub nfft: usize,

    /// Windows compared against the rectangular reference
    pub windows: Vec<WindowType>,

    pub weight_range: Range<f64>,
    pub response_range_db: Range<f64>,

    pub width_in: f64,
    pub height_in: f64,
}

impl Default for WindowCompareParams {
    fn default() -> Self {
        Self {
            length: 100,
            nfft: 1024,
            windows: vec![WindowType::HammingPlus, WindowType::Rectangular],
            weight_range: 0.0..1.1,
            response_range_db: -80.0..5.0,
            width_in: 12.0,
            height_in: 5.0,
        }
    }
}

/// Sampled weights and one-sided normalized response of one window
#[derive(Debug, Clone)]
pub struct WindowTrace {
    pub window_type: WindowType,
    pub weights: Vec<f64>,
    pub freqs: Vec<f64>,
    pub response_db: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct WindowCompareFigure {
    pub params: WindowCompareParams,
    pub style: FigureStyle,
}

impl Default for WindowCompareFigure {
    fn default() -> Self {
        Self {
            params: WindowCompareParams::default(),
            style: FigureStyle {
                title_size: 18.0,
                label_size: 18.0,
                tick_size: 16.0,
                legend_size: 16.0,
                annotation_size: 16.0,
            },
        }
    }
}

fn trace_color(index: usize) -> RGBColor {
    [TAB_BLUE, TAB_RED][index % 2]
}

impl WindowCompareFigure {
    /// Responses are normalized to the rectangular window's peak, so the
    /// rectangular curve starts at exactly 0 dB
    pub fn traces(&self) -> Vec<WindowTrace> {
        let p = &self.params;
        let mut engine = FftEngine::new();
        let rect = generate_window(WindowType::Rectangular, p.length);
        let reference = peak_response(&mut engine, &rect, p.nfft);

        p.windows
            .iter()
            .map(|&window_type| {
                let weights = generate_window(window_type, p.length);
                let (freqs, response_db) =
                    window_response(&mut engine, &weights, p.nfft, reference).one_sided();
                WindowTrace {
                    window_type,
                    weights,
                    freqs,
                    response_db,
                }
            })
            .collect()
    }

    fn draw_weights(&self, area: &SvgArea<'_>, traces: &[WindowTrace]) -> Result<()> {
        let style = &self.style;
        let n = self.params.length as f64;
        let y_range = self.params.weight_range.clone();

        let mut chart = ChartBuilder::on(area)
            .caption("(a) 时域权重", style.title())
            .margin(15)
            .x_label_area_size(FigureStyle::px(style.label_size) * 3)
            .y_label_area_size(FigureStyle::px(style.label_size) * 4)
            .build_cartesian_2d(0.0..n, y_range.clone())?;

        chart
            .configure_mesh()
            .x_desc("样本点")
            .y_desc("权重")
            .axis_desc_style(style.label())
            .label_style(style.tick())
            .bold_line_style(BLACK.mix(0.15))
            .light_line_style(TRANSPARENT)
            .draw()?;

        for (i, trace) in traces.iter().enumerate() {
            let color = trace_color(i);
            let points = trace.weights.iter().enumerate().map(|(k, &w)| (k as f64, w));
            chart
                .draw_series(
                    visible_runs(points, 0.0..n, y_range.clone())
                        .into_iter()
                        .map(|run| PathElement::new(run, color.stroke_width(2))),
                )?
                .label(trace.window_type.label())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerMiddle)
            .label_font(style.legend())
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()?;

        Ok(())
    }

    fn draw_response(&self, area: &SvgArea<'_>, traces: &[WindowTrace]) -> Result<()> {
        let style = &self.style;
        let y_range = self.params.response_range_db.clone();

        let mut chart = ChartBuilder::on(area)
            .caption("(b) 频率响应", style.title())
            .margin(15)
            .x_label_area_size(FigureStyle::px(style.label_size) * 3)
            .y_label_area_size(FigureStyle::px(style.label_size) * 4)
            .build_cartesian_2d(0.0..1.0, y_range.clone())?;

        chart
            .configure_mesh()
            .x_desc("归一化频率")
            .y_desc("频率响应")
            .axis_desc_style(style.label())
            .label_style(style.tick())
            .bold_line_style(BLACK.mix(0.15))
            .light_line_style(TRANSPARENT)
            .draw()?;

        for (i, trace) in traces.iter().enumerate() {
            let color = trace_color(i);
            let points = trace
                .freqs
                .iter()
                .copied()
                .zip(trace.response_db.iter().copied());
            chart
                .draw_series(
                    visible_runs(points, 0.0..1.0, y_range.clone())
                        .into_iter()
                        .map(|run| PathElement::new(run, color.stroke_width(2))),
                )?
                .label(trace.window_type.label())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(style.legend())
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()?;

        Ok(())
    }
}

impl Figure for WindowCompareFigure {
    fn id(&self) -> FigureId {
        FigureId::Window
    }

    fn output_path(&self) -> PathBuf {
        PathBuf::from("chap03/window.pdf")
    }

    fn render_svg(&self) -> Result<String> {
        let p = &self.params;
        let traces = self.traces();

        render_svg(canvas_size(p.width_in, p.height_in), |root| {
            let panels = root.split_evenly((1, 2));
            self.draw_weights(&panels[0], &traces)?;
            self.draw_response(&panels[1], &traces)?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_reference_is_zero_db() {
        let traces = WindowCompareFigure::default().traces();
        let rect = traces
            .iter()
            .find(|t| t.window_type == WindowType::Rectangular)
            .unwrap();

        assert_eq!(rect.freqs[0], 0.0);
        assert_eq!(rect.response_db[0], 0.0);
        assert_eq!(rect.response_db.len(), 512);
    }

    #[test]
    fn test_hamming_plus_main_lobe_is_lower() {
        let traces = WindowCompareFigure::default().traces();
        let plus = &traces[0];
        assert_eq!(plus.window_type, WindowType::HammingPlus);

        // Coherent gain ~0.54 -> about -5.4 dB at DC
        assert!(plus.response_db[0] < -5.0 && plus.response_db[0] > -6.0);
        assert_eq!(plus.weights.len(), 100);
    }

    #[test]
    fn test_render_is_deterministic() {
        let figure = WindowCompareFigure::default();
        let svg = figure.render_svg().unwrap();
        assert_eq!(svg, figure.render_svg().unwrap());
        assert!(svg.contains("(b) 频率响应"));
    }
}
