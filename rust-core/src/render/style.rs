//! Fonts and colors shared by the figures

use plotters::style::{FontDesc, IntoFont, RGBColor, TextStyle};

use super::PX_PER_INCH;

/// Font fallback list: CJK serif first for the Chinese labels
pub const FONT_FAMILY: &str = "SimSun, Times New Roman, sans-serif";

pub const TAB_BLUE: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
pub const TAB_RED: RGBColor = RGBColor(0xd6, 0x27, 0x28);
pub const PURE_BLUE: RGBColor = RGBColor(0, 0, 255);
pub const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);
pub const PURE_RED: RGBColor = RGBColor(255, 0, 0);
pub const GRAY: RGBColor = RGBColor(128, 128, 128);
pub const BURNT_ORANGE: RGBColor = RGBColor(0xd3, 0x54, 0x00);
pub const DEEP_BLUE: RGBColor = RGBColor(0x00, 0x72, 0xbd);

/// Text sizes of one figure, in typographic points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    pub title_size: f64,
    pub label_size: f64,
    pub tick_size: f64,
    pub legend_size: f64,
    pub annotation_size: f64,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            title_size: 20.0,
            label_size: 16.0,
            tick_size: 14.0,
            legend_size: 14.0,
            annotation_size: 16.0,
        }
    }
}

impl FigureStyle {
    fn font(size_pt: f64) -> FontDesc<'static> {
        (FONT_FAMILY, size_pt * PX_PER_INCH / 72.0).into_font()
    }

    pub fn title(&self) -> TextStyle<'static> {
        Self::font(self.title_size).into()
    }

    pub fn label(&self) -> TextStyle<'static> {
        Self::font(self.label_size).into()
    }

    pub fn tick(&self) -> TextStyle<'static> {
        Self::font(self.tick_size).into()
    }

    pub fn legend(&self) -> TextStyle<'static> {
        Self::font(self.legend_size).into()
    }

    /// Annotation text in the given color
    pub fn annotation(&self, color: &RGBColor) -> TextStyle<'static> {
        Self::font(self.annotation_size).color(color)
    }

    /// Pixel height of a point size, for sizing label areas
    pub fn px(size_pt: f64) -> u32 {
        (size_pt * PX_PER_INCH / 72.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_to_pixel() {
        assert_eq!(FigureStyle::px(72.0), 100);
        assert_eq!(FigureStyle::px(18.0), 25);
    }
}
