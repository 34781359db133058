//! Chapter 5: a strong 10 Hz tone next to a weak 14 Hz tone, analyzed with
//! the plain FFT and with a Hamming window, on twin dB axes

use super::{Figure, FigureId};
use crate::error::Result;
use crate::render::style::{BURNT_ORANGE, DEEP_BLUE};
use crate::render::{canvas_size, render_svg, visible_runs, FigureStyle};
use crate::signal::{real_tone_sum, time_axis, Tone};
use crate::spectrum::analysis::AnalyzerConfig;
use crate::spectrum::{find_peaks, magnitude_to_db, SpectrumAnalyzer, WindowType};
use plotters::prelude::*;
use std::ops::Range;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DualToneParams {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Signal length in seconds
    pub duration: f64,

    pub tones: Vec<Tone>,

    /// Lowest amplitude before taking dB
    pub db_floor: f64,

    pub freq_range_hz: Range<f64>,
    pub standard_range_db: Range<f64>,
    pub hamming_range_db: Range<f64>,

    pub width_in: f64,
    pub height_in: f64,
}

impl Default for DualToneParams {
    fn default() -> Self {
        Self {
            sample_rate: 1000.0,
            duration: 1.0,
            tones: vec![Tone::new(1.0, 10.0), Tone::new(0.1, 14.0)],
            db_floor: 1e-6,
            freq_range_hz: 2.0..45.0,
            standard_range_db: 0.0..50.0,
            hamming_range_db: -40.0..40.0,
            width_in: 10.0,
            height_in: 6.0,
        }
    }
}

/// Single-sided amplitude spectra of the dual-tone signal
#[derive(Debug, Clone)]
pub struct DualToneSpectra {
    pub freqs: Vec<f64>,
    pub standard: Vec<f64>,
    pub hamming: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct DualToneFigure {
    pub params: DualToneParams,
    pub style: FigureStyle,
}

impl Default for DualToneFigure {
    fn default() -> Self {
        Self {
            params: DualToneParams::default(),
            style: FigureStyle {
                title_size: 15.0,
                label_size: 14.0,
                tick_size: 12.0,
                legend_size: 12.0,
                annotation_size: 12.0,
            },
        }
    }
}

impl DualToneFigure {
    pub fn signal(&self) -> Vec<f64> {
        let p = &self.params;
        real_tone_sum(&p.tones, &time_axis(p.sample_rate, p.duration))
    }

    pub fn spectra(&self) -> Result<DualToneSpectra> {
        let p = &self.params;
        let signal = self.signal();

        let analyze = |window_type| -> Result<(Vec<f64>, Vec<f64>)> {
            let mut analyzer = SpectrumAnalyzer::new(AnalyzerConfig {
                fft_size: signal.len(),
                window_type,
                sample_rate: p.sample_rate,
                apply_correction: true,
            });
            Ok((analyzer.frequency_bins_hz(), analyzer.analyze(&signal)?))
        };

        let (freqs, standard) = analyze(WindowType::Rectangular)?;
        let (_, hamming) = analyze(WindowType::Hamming)?;

        Ok(DualToneSpectra {
            freqs,
            standard,
            hamming,
        })
    }

    /// Amplitudes in dB re 1, floored at `db_floor`
    pub fn to_db(&self, values: &[f64]) -> Vec<f64> {
        magnitude_to_db(values, 1.0, self.params.db_floor)
    }
}

impl Figure for DualToneFigure {
    fn id(&self) -> FigureId {
        FigureId::WindowResult
    }

    fn output_path(&self) -> PathBuf {
        PathBuf::from("chap05/window_result.pdf")
    }

    fn report(&self) -> Result<Vec<String>> {
        let spectra = self.spectra()?;
        let threshold = self
            .params
            .tones
            .iter()
            .map(|t| t.amplitude)
            .fold(f64::INFINITY, f64::min)
            / 2.0;

        let summarize = |name: &str, values: &[f64]| {
            let db = self.to_db(values);
            let peaks: Vec<String> = find_peaks(values, threshold)
                .into_iter()
                .map(|k| {
                    // Round first so a bin a hair under 1.0 prints as 0.00, not -0.00
                    let level = (db[k] * 100.0).round() / 100.0 + 0.0;
                    format!("{:.1} Hz ({level:.2} dB)", spectra.freqs[k])
                })
                .collect();
            format!("{name}: {}", peaks.join(", "))
        };

        Ok(vec![
            summarize("rectangular", &spectra.standard),
            summarize("hamming", &spectra.hamming),
        ])
    }

    fn render_svg(&self) -> Result<String> {
        let p = &self.params;
        let style = &self.style;
        let spectra = self.spectra()?;
        let standard_db = self.to_db(&spectra.standard);
        let hamming_db = self.to_db(&spectra.hamming);
        let x_range = p.freq_range_hz.clone();
        let label_area = FigureStyle::px(style.label_size) * 4;

        render_svg(canvas_size(p.width_in, p.height_in), |root| {
            let mut chart = ChartBuilder::on(root)
                .caption("双信号频谱分析对比", style.title())
                .margin(15)
                .x_label_area_size(FigureStyle::px(style.label_size) * 3)
                .y_label_area_size(label_area)
                .right_y_label_area_size(label_area)
                .build_cartesian_2d(x_range.clone(), p.standard_range_db.clone())?
                .set_secondary_coord(x_range.clone(), p.hamming_range_db.clone());

            chart
                .configure_mesh()
                .x_desc("频率(Hz)")
                .y_desc("幅度(dB)")
                .x_labels(5)
                .axis_desc_style(style.label().color(&BURNT_ORANGE))
                .x_label_style(style.tick())
                .y_label_style(style.tick().color(&BURNT_ORANGE))
                .bold_line_style(BLACK.mix(0.15))
                .light_line_style(TRANSPARENT)
                .draw()?;

            chart
                .configure_secondary_axes()
                .y_desc("幅度(dB)")
                .axis_desc_style(style.label().color(&DEEP_BLUE))
                .label_style(style.tick().color(&DEEP_BLUE))
                .draw()?;

            let standard = spectra.freqs.iter().copied().zip(standard_db.iter().copied());
            chart
                .draw_series(
                    visible_runs(standard, x_range.clone(), p.standard_range_db.clone())
                        .into_iter()
                        .map(|run| PathElement::new(run, BURNT_ORANGE.stroke_width(2))),
                )?
                .label(WindowType::Rectangular.label())
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BURNT_ORANGE.stroke_width(2)));

            let hamming = spectra.freqs.iter().copied().zip(hamming_db.iter().copied());
            chart
                .draw_secondary_series(
                    visible_runs(hamming, x_range.clone(), p.hamming_range_db.clone())
                        .into_iter()
                        .map(|run| PathElement::new(run, DEEP_BLUE.stroke_width(3))),
                )?
                .label(WindowType::Hamming.label())
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DEEP_BLUE.stroke_width(3)));

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .label_font(style.legend())
                .background_style(WHITE)
                .border_style(BLACK)
                .draw()?;

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peaks_at_10_and_14_hz() {
        let spectra = DualToneFigure::default().spectra().unwrap();
        let peaks = find_peaks(&spectra.standard, 0.05);

        assert_eq!(peaks.len(), 2);
        assert!((spectra.freqs[peaks[0]] - 10.0).abs() < 1e-9);
        assert!((spectra.freqs[peaks[1]] - 14.0).abs() < 1e-9);

        let ratio = spectra.standard[peaks[0]] / spectra.standard[peaks[1]];
        assert!((ratio - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_hamming_preserves_amplitudes() {
        let spectra = DualToneFigure::default().spectra().unwrap();
        let ten = spectra.freqs.iter().position(|&f| f == 10.0).unwrap();
        let fourteen = spectra.freqs.iter().position(|&f| f == 14.0).unwrap();

        assert!((spectra.hamming[ten] - 1.0).abs() < 0.01);
        assert!((spectra.hamming[fourteen] - 0.1).abs() < 0.01);
    }

    #[test]
    fn test_db_floor() {
        let figure = DualToneFigure::default();
        let db = figure.to_db(&[0.0, 1.0, 0.1]);
        assert!((db[0] + 120.0).abs() < 1e-9);
        assert_eq!(db[1], 0.0);
        assert!((db[2] + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_lists_both_tones() {
        let lines = DualToneFigure::default().report().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("rectangular: 10.0 Hz (0.00 dB), 14.0 Hz (-20.00 dB)"));
        assert!(lines[1].contains("10.0 Hz"));
        assert!(lines[1].contains("14.0 Hz"));
    }

    /// `<text>` elements filled with `color`
    fn text_in_color(svg: &str, color: &RGBColor) -> usize {
        let fill = format!("fill=\"#{:02x}{:02x}{:02x}\"", color.0, color.1, color.2);
        svg.split("<text")
            .skip(1)
            .filter_map(|tag| tag.split('>').next())
            .filter(|attrs| attrs.to_ascii_lowercase().contains(&fill))
            .count()
    }

    #[test]
    fn test_axis_ticks_take_series_colors() {
        let svg = DualToneFigure::default().render_svg().unwrap();

        // Axis title plus at least a few tick labels on each side
        assert!(text_in_color(&svg, &BURNT_ORANGE) >= 4);
        assert!(text_in_color(&svg, &DEEP_BLUE) >= 4);
    }

    #[test]
    fn test_render_is_deterministic() {
        let figure = DualToneFigure::default();
        let svg = figure.render_svg().unwrap();
        assert_eq!(svg, figure.render_svg().unwrap());
        assert!(svg.contains("双信号频谱分析对比"));
    }
}
