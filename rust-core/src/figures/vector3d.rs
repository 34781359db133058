//! Chapter 2: phasors of different frequencies live on separate planes
//!
//! The complex plane is laid flat and a third axis stands for frequency,
//! so H2 rises off the plane of H1 instead of adding to it.

use super::{Figure, FigureId};
use crate::error::Result;
use crate::render::style::{DARK_GREEN, PURE_BLUE};
use crate::render::{arrow3d_segments, canvas_size, render_svg, FigureStyle};
use crate::signal::Phasor;
use plotters::prelude::*;
use std::ops::Range;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Vector3dParams {
    pub h1_amplitude: f64,
    pub h1_phase_deg: f64,
    pub h2_amplitude: f64,
    pub h2_phase_deg: f64,

    /// Start height of H2 on the frequency axis; it rises by the same amount
    pub h2_frequency_offset: f64,

    pub real_range: Range<f64>,
    pub imag_range: Range<f64>,
    pub frequency_range: Range<f64>,

    /// View elevation and azimuth in degrees
    pub elevation_deg: f64,
    pub azimuth_deg: f64,

    pub size_in: f64,
}

impl Default for Vector3dParams {
    fn default() -> Self {
        Self {
            h1_amplitude: 1.5,
            h1_phase_deg: 30.0,
            h2_amplitude: 1.5,
            h2_phase_deg: 60.0,
            h2_frequency_offset: 0.1,
            real_range: 0.0..1.5,
            imag_range: 0.0..1.5,
            frequency_range: 0.0..0.5,
            elevation_deg: 20.0,
            azimuth_deg: -45.0,
            size_in: 10.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Vector3dFigure {
    pub params: Vector3dParams,
    pub style: FigureStyle,
}

impl Default for Vector3dFigure {
    fn default() -> Self {
        Self {
            params: Vector3dParams::default(),
            style: FigureStyle {
                title_size: 22.0,
                label_size: 18.0,
                tick_size: 16.0,
                legend_size: 16.0,
                annotation_size: 20.0,
            },
        }
    }
}

impl Vector3dParams {
    /// Book axes (real, imaginary, frequency) to chart axes, whose y is
    /// vertical; the imaginary axis runs from `imag_range.end` at the front
    pub fn to_chart(&self, (re, im, freq): (f64, f64, f64)) -> (f64, f64, f64) {
        (re, freq, self.imag_range.start + self.imag_range.end - im)
    }
}

impl Vector3dFigure {
    pub fn phasors(&self) -> (Phasor, Phasor) {
        let p = &self.params;
        (
            Phasor::from_polar_deg(p.h1_amplitude, p.h1_phase_deg),
            Phasor::from_polar_deg(p.h2_amplitude, p.h2_phase_deg),
        )
    }
}

impl Figure for Vector3dFigure {
    fn id(&self) -> FigureId {
        FigureId::Vector3d
    }

    fn output_path(&self) -> PathBuf {
        PathBuf::from("chap02/vector3D.pdf")
    }

    fn report(&self) -> Result<Vec<String>> {
        let (_, h2) = self.phasors();
        Ok(vec![format!("H2 = {h2}")])
    }

    fn render_svg(&self) -> Result<String> {
        let p = &self.params;
        let style = &self.style;
        let (h1, h2) = self.phasors();
        let lift = p.h2_frequency_offset;

        render_svg(canvas_size(p.size_in, p.size_in), |root| {
            let mut chart = ChartBuilder::on(root).margin(40).build_cartesian_3d(
                p.real_range.clone(),
                p.frequency_range.clone(),
                p.imag_range.clone(),
            )?;

            let pitch = p.elevation_deg.to_radians();
            let yaw = -p.azimuth_deg.to_radians();
            chart.with_projection(|mut pb| {
                pb.pitch = pitch;
                pb.yaw = yaw;
                pb.scale = 0.85;
                pb.into_matrix()
            });

            chart
                .configure_axes()
                .light_grid_style(BLACK.mix(0.1))
                .max_light_lines(3)
                .label_style(style.tick())
                .x_formatter(&|_: &f64| String::new())
                .y_formatter(&|_: &f64| String::new())
                .z_formatter(&|_: &f64| String::new())
                .draw()?;

            let arrows = [
                ((0.0, 0.0, 0.0), (h1.re(), h1.im(), 0.0), PURE_BLUE, "H₁ = Ae^(j(2πf₁t + θ₁))"),
                ((0.0, 0.0, lift), (h2.re(), h2.im(), lift), DARK_GREEN, "H₂ = Ae^(j(2πf₂t + θ₂))"),
            ];

            for (origin, delta, color, label) in arrows {
                let segments = arrow3d_segments(origin, delta, 0.1);
                chart
                    .draw_series(segments.into_iter().map(|[a, b]| {
                        PathElement::new(vec![p.to_chart(a), p.to_chart(b)], color.stroke_width(2))
                    }))?
                    .label(label)
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
            }

            let real_mid = (p.real_range.start + p.real_range.end) / 2.0;
            let imag_mid = (p.imag_range.start + p.imag_range.end) / 2.0;
            let freq_mid = (p.frequency_range.start + p.frequency_range.end) / 2.0;
            // Axis titles sit on the chart frame, so they use chart coordinates
            let (imag_lo, freq_lo) = (p.imag_range.start, p.frequency_range.start);
            chart.draw_series([
                Text::new(
                    "H₁",
                    p.to_chart((h1.re() * 0.5, h1.im() * 0.5, 0.02)),
                    style.annotation(&PURE_BLUE),
                ),
                Text::new(
                    "H₂",
                    p.to_chart((h2.re() * 0.8, h2.im() * 0.8, 0.24)),
                    style.annotation(&DARK_GREEN),
                ),
                Text::new(
                    "实部（I）",
                    (real_mid, freq_lo, imag_lo),
                    style.annotation(&BLACK),
                ),
                Text::new(
                    "虚部（Q）",
                    (p.real_range.end, freq_lo, imag_mid),
                    style.annotation(&BLACK),
                ),
                Text::new(
                    "频率轴",
                    (p.real_range.end, freq_mid, imag_lo),
                    style.annotation(&BLACK),
                ),
            ])?;

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .label_font(style.legend())
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK.mix(0.3))
                .draw()?;

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h2_value() {
        let (_, h2) = Vector3dFigure::default().phasors();
        assert!((h2.re() - 0.75).abs() < 1e-12);
        assert!((h2.im() - 1.5 * 3f64.sqrt() / 2.0).abs() < 1e-12);
        assert_eq!(
            Vector3dFigure::default().report().unwrap(),
            vec!["H2 = 0.750+1.299j".to_string()]
        );
    }

    #[test]
    fn test_axis_mapping_puts_frequency_up() {
        let p = Vector3dParams::default();
        assert_eq!(p.to_chart((1.0, 0.5, 0.2)), (1.0, 0.2, 1.0));
    }

    #[test]
    fn test_imaginary_axis_is_mirrored() {
        let p = Vector3dParams::default();
        assert_eq!(p.to_chart((0.0, 0.0, 0.0)).2, p.imag_range.end);
        assert_eq!(p.to_chart((0.0, p.imag_range.end, 0.0)).2, p.imag_range.start);

        // Mirrored vectors stay inside the imaginary range
        let (h1, h2) = Vector3dFigure::default().phasors();
        for v in [h1, h2] {
            assert!(p.imag_range.contains(&p.to_chart((v.re(), v.im(), 0.0)).2));
        }
    }

    #[test]
    fn test_vectors_fit_the_axes() {
        let figure = Vector3dFigure::default();
        let (h1, h2) = figure.phasors();
        let p = &figure.params;
        for v in [h1, h2] {
            assert!(p.real_range.contains(&v.re()));
            assert!(p.imag_range.contains(&v.im()));
        }
        assert!(p.frequency_range.contains(&(2.0 * p.h2_frequency_offset)));
    }

    #[test]
    fn test_render_is_deterministic() {
        let figure = Vector3dFigure::default();
        let svg = figure.render_svg().unwrap();
        assert_eq!(svg, figure.render_svg().unwrap());
        assert!(svg.contains("频率轴"));
    }
}
