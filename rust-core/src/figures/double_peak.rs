//! Chapter 3: spectrogram of a carrier with sidebands that jumps from
//! +50 kHz to -50 kHz halfway through
//!
//! The signal is complex so positive and negative frequencies stay
//! distinct; the STFT is two-sided and shifted to put 0 Hz in the middle.

use super::{Figure, FigureId};
use crate::error::Result;
use crate::render::{canvas_size, cell_edges, render_svg, Colormap, FigureStyle};
use crate::signal::{piecewise_signal, sideband_triplet, time_axis, Segment};
use crate::spectrum::{Stft, StftConfig, StftResult, WindowType};
use plotters::prelude::*;
use std::ops::Range;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DoublePeakParams {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Signal length in seconds
    pub duration: f64,

    /// Time at which the carrier jumps
    pub switch_time: f64,

    pub first_carrier_hz: f64,
    pub second_carrier_hz: f64,
    pub sideband_offset_hz: f64,
    pub carrier_amplitude: f64,
    pub sideband_amplitude: f64,

    pub nperseg: usize,
    pub noverlap: usize,

    /// Color limits on |Z|
    pub vmin: f64,
    pub vmax: f64,

    pub time_range_ms: Range<f64>,
    pub freq_range_khz: Range<f64>,

    pub width_in: f64,
    pub height_in: f64,
}

impl Default for DoublePeakParams {
    fn default() -> Self {
        Self {
            sample_rate: 200e3,
            duration: 0.02,
            switch_time: 0.010,
            first_carrier_hz: 50e3,
            second_carrier_hz: -50e3,
            sideband_offset_hz: 20e3,
            carrier_amplitude: 1.0,
            sideband_amplitude: 0.4,
            nperseg: 128,
            noverlap: 100,
            vmin: 0.0,
            vmax: 0.8,
            time_range_ms: 0.0..20.0,
            freq_range_khz: -100.0..100.0,
            width_in: 6.0,
            height_in: 5.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DoublePeakFigure {
    pub params: DoublePeakParams,
    pub style: FigureStyle,
}

impl Default for DoublePeakFigure {
    fn default() -> Self {
        Self {
            params: DoublePeakParams::default(),
            style: FigureStyle {
                title_size: 16.0,
                label_size: 16.0,
                tick_size: 14.0,
                legend_size: 14.0,
                annotation_size: 14.0,
            },
        }
    }
}

impl DoublePeakFigure {
    /// Two disjoint segments, each a carrier with two weaker sidebands
    pub fn segments(&self) -> Vec<Segment> {
        let p = &self.params;
        let tones = |carrier| {
            sideband_triplet(
                carrier,
                p.sideband_offset_hz,
                p.carrier_amplitude,
                p.sideband_amplitude,
            )
        };

        vec![
            Segment {
                start: f64::NEG_INFINITY,
                end: p.switch_time,
                tones: tones(p.first_carrier_hz),
            },
            Segment {
                start: p.switch_time,
                end: f64::INFINITY,
                tones: tones(p.second_carrier_hz),
            },
        ]
    }

    /// Shifted two-sided STFT of the synthesized signal
    pub fn spectrogram(&self) -> Result<StftResult> {
        let p = &self.params;
        let t = time_axis(p.sample_rate, p.duration);
        let signal = piecewise_signal(&t, &self.segments());

        let mut stft = Stft::new(StftConfig {
            window_type: WindowType::Hann,
            nperseg: p.nperseg,
            noverlap: p.noverlap,
            sample_rate: p.sample_rate,
            two_sided: true,
        })?;

        Ok(stft.process(&signal).shifted())
    }
}

/// Clamp a cell [a, b] to `range`, or None when it falls outside
fn clamp_cell(a: f64, b: f64, range: &Range<f64>) -> Option<(f64, f64)> {
    let lo = a.max(range.start);
    let hi = b.min(range.end);
    (lo < hi).then_some((lo, hi))
}

impl Figure for DoublePeakFigure {
    fn id(&self) -> FigureId {
        FigureId::DoublePeak
    }

    fn output_path(&self) -> PathBuf {
        PathBuf::from("chap03/double_peak.pdf")
    }

    fn render_svg(&self) -> Result<String> {
        let p = &self.params;
        let style = &self.style;
        let spectrogram = self.spectrogram()?;
        let magnitude = spectrogram.magnitude();

        let times_ms: Vec<f64> = spectrogram.times.iter().map(|t| t * 1e3).collect();
        let freqs_khz: Vec<f64> = spectrogram.freqs.iter().map(|f| f / 1e3).collect();
        let time_edges = cell_edges(&times_ms);
        let freq_edges = cell_edges(&freqs_khz);
        let colormap = Colormap::Jet;

        let x_range = p.time_range_ms.clone();
        let y_range = p.freq_range_khz.clone();

        render_svg(canvas_size(p.width_in, p.height_in), |root| {
            let mut chart = ChartBuilder::on(root)
                .caption("STFT 频谱图", style.title())
                .margin(15)
                .x_label_area_size(FigureStyle::px(style.label_size) * 3)
                .y_label_area_size(FigureStyle::px(style.label_size) * 4)
                .build_cartesian_2d(x_range.clone(), y_range.clone())?;

            let cells = magnitude.indexed_iter().filter_map(|((row, col), &value)| {
                let (t0, t1) = clamp_cell(time_edges[col], time_edges[col + 1], &x_range)?;
                let (f0, f1) = clamp_cell(freq_edges[row], freq_edges[row + 1], &y_range)?;
                let color = colormap.map_range(value, p.vmin, p.vmax);
                Some(Rectangle::new([(t0, f0), (t1, f1)], color.filled()))
            });
            chart.draw_series(cells)?;

            chart
                .configure_mesh()
                .disable_mesh()
                .x_desc("时间 (ms)")
                .y_desc("频率 (KHz)")
                .axis_desc_style(style.label())
                .label_style(style.tick())
                .draw()?;

            Ok(())
        })
    }
}
