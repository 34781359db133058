//! Chapter 2: summing two same-frequency phasors tip to tail

use super::{Figure, FigureId};
use crate::error::Result;
use crate::render::style::{GRAY, PURE_BLUE, PURE_RED, DARK_GREEN};
use crate::render::{canvas_size, render_svg, FigureStyle, QuiverStyle};
use crate::signal::Phasor;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Vector2dParams {
    pub h1_amplitude: f64,
    pub h1_phase_deg: f64,
    pub h2_amplitude: f64,
    pub h2_phase_deg: f64,

    /// Spacing of the dashed grid lines
    pub grid_step: f64,

    /// Square figure side in inches
    pub size_in: f64,
}

impl Default for Vector2dParams {
    fn default() -> Self {
        Self {
            h1_amplitude: 1.5,
            h1_phase_deg: 30.0,
            h2_amplitude: 1.0,
            h2_phase_deg: 120.0,
            grid_step: 0.5,
            size_in: 8.0,
        }
    }
}

/// H1, H2 and their resultant R = H1 + H2
#[derive(Debug, Clone, Copy)]
pub struct PhasorSum {
    pub h1: Phasor,
    pub h2: Phasor,
    pub r: Phasor,
}

#[derive(Debug, Clone)]
pub struct Vector2dFigure {
    pub params: Vector2dParams,
    pub style: FigureStyle,
}

impl Default for Vector2dFigure {
    fn default() -> Self {
        Self {
            params: Vector2dParams::default(),
            style: FigureStyle {
                title_size: 20.0,
                label_size: 16.0,
                tick_size: 14.0,
                legend_size: 14.0,
                annotation_size: 16.0,
            },
        }
    }
}

impl Vector2dFigure {
    pub fn phasors(&self) -> PhasorSum {
        let p = &self.params;
        let h1 = Phasor::from_polar_deg(p.h1_amplitude, p.h1_phase_deg);
        let h2 = Phasor::from_polar_deg(p.h2_amplitude, p.h2_phase_deg);
        PhasorSum { h1, h2, r: h1 + h2 }
    }

    /// Equal x and y limits leaving room around the longest vector
    pub fn axis_limits(&self) -> (f64, f64) {
        let sum = self.phasors();
        let max_lim = sum
            .h1
            .magnitude()
            .max(sum.h2.magnitude())
            .max(sum.r.magnitude())
            * 1.2;
        (-max_lim / 4.0, max_lim * 0.8)
    }

    /// Grid line positions: multiples of `grid_step` inside the axis limits
    pub fn grid_lines(&self) -> Vec<f64> {
        let (lo, hi) = self.axis_limits();
        let step = self.params.grid_step;
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|k| k as f64 * step).collect()
    }
}

impl Figure for Vector2dFigure {
    fn id(&self) -> FigureId {
        FigureId::Vector2d
    }

    fn output_path(&self) -> PathBuf {
        PathBuf::from("chap02/vector2D.pdf")
    }

    fn report(&self) -> Result<Vec<String>> {
        let PhasorSum { h1, h2, r } = self.phasors();
        Ok(vec![
            format!("H1 = {h1}"),
            format!("H2 = {h2}"),
            format!(
                "R = H1 + H2 = {r} (Magnitude: {:.3}, Phase: {:.1}°)",
                r.magnitude(),
                r.phase_deg()
            ),
        ])
    }

    fn render_svg(&self) -> Result<String> {
        let PhasorSum { h1, h2, r } = self.phasors();
        let (lo, hi) = self.axis_limits();
        let span = hi - lo;
        let style = &self.style;
        let label_area = FigureStyle::px(style.label_size) * 2;

        render_svg(canvas_size(self.params.size_in, self.params.size_in), |root| {
            // Same label area on both axes keeps the plot square (equal aspect)
            let mut chart = ChartBuilder::on(root)
                .margin(20)
                .x_label_area_size(label_area)
                .y_label_area_size(label_area)
                .build_cartesian_2d(lo..hi, lo..hi)?;

            chart
                .configure_mesh()
                .x_desc("实部（I）")
                .y_desc("虚部（Q）")
                .axis_desc_style(style.label())
                .x_label_formatter(&|_: &f64| String::new())
                .y_label_formatter(&|_: &f64| String::new())
                .disable_mesh()
                .draw()?;

            let grid_style = BLACK.mix(0.3).stroke_width(1);
            for v in self.grid_lines() {
                chart.draw_series([
                    DashedPathElement::new(vec![(v, lo), (v, hi)], 6, 4, grid_style),
                    DashedPathElement::new(vec![(lo, v), (hi, v)], 6, 4, grid_style),
                ])?;
            }

            // Real and imaginary axes
            chart.draw_series([
                PathElement::new(vec![(lo, 0.0), (hi, 0.0)], GRAY.stroke_width(1)),
                PathElement::new(vec![(0.0, lo), (0.0, hi)], GRAY.stroke_width(1)),
            ])?;

            let thin = QuiverStyle::new(0.005, 8.0, 10.0);
            let bold = QuiverStyle::new(0.007, 10.0, 12.0);
            let arrows = [
                ((0.0, 0.0), h1, thin, PURE_BLUE, "H₁ = A₁e^(jθ₁)"),
                ((h1.re(), h1.im()), h2, thin, DARK_GREEN, "H₂ = A₂e^(jθ₂) (平移后)"),
                ((0.0, 0.0), r, bold, PURE_RED, "R = H₁ + H₂"),
            ];

            // H2 starts at the tip of H1; R is drawn last so it stays on top
            for (origin, phasor, quiver, color, label) in arrows {
                let outline = quiver.outline(origin, (phasor.re(), phasor.im()), span);
                chart
                    .draw_series(std::iter::once(Polygon::new(outline, color.filled())))?
                    .label(label)
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 2), (x + 20, y + 2)], color.filled())
                    });
            }

            let anchor = Pos::new(HPos::Left, VPos::Bottom);
            chart.draw_series([
                Text::new(
                    "H₁",
                    (h1.re() * 1.05, h1.im() * 1.05),
                    style.annotation(&PURE_BLUE).pos(anchor),
                ),
                Text::new(
                    "R",
                    (r.re() * 0.9, r.im() * 0.77),
                    style.annotation(&PURE_RED).pos(anchor),
                ),
                Text::new(
                    "H₂",
                    (h1.re() + h2.re() * 0.5, h1.im() + h2.im() * 0.6),
                    style.annotation(&DARK_GREEN).pos(anchor),
                ),
            ])?;

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::LowerLeft)
                .label_font(style.legend())
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK.mix(0.3))
                .draw()?;

            Ok(())
        })
    }
}
