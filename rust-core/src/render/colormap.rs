//! Colormaps for pseudocolor heatmaps

use plotters::style::RGBColor;

/// Colormap for heatmap cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Jet (blue → cyan → yellow → red), the classic spectrogram look
    #[default]
    Jet,
}

impl Colormap {
    /// Map normalized value (0-1) to a color
    pub fn map(&self, value: f64) -> RGBColor {
        let t = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };

        match self {
            Colormap::Jet => Self::jet(t),
        }
    }

    /// Map `value` after clamping it into [vmin, vmax]
    pub fn map_range(&self, value: f64, vmin: f64, vmax: f64) -> RGBColor {
        let span = vmax - vmin;
        let t = if span > 0.0 { (value - vmin) / span } else { 0.0 };
        self.map(t)
    }

    // Piecewise-linear jet: each channel is a clipped triangle
    fn jet(t: f64) -> RGBColor {
        let channel = |center: f64| {
            let v = (1.5 - (4.0 * t - center).abs()).clamp(0.0, 1.0);
            (v * 255.0).round() as u8
        };
        RGBColor(channel(3.0), channel(2.0), channel(1.0))
    }
}

/// Cell boundaries around sample centers
///
/// Interior edges sit halfway between neighbours; the outer edges extend
/// half a step beyond the first and last centers. Returns `centers.len() + 1`
/// edges.
pub fn cell_edges(centers: &[f64]) -> Vec<f64> {
    match centers.len() {
        0 => Vec::new(),
        1 => vec![centers[0] - 0.5, centers[0] + 0.5],
        n => {
            let mut edges = Vec::with_capacity(n + 1);
            edges.push(centers[0] - (centers[1] - centers[0]) / 2.0);
            edges.extend(centers.windows(2).map(|w| (w[0] + w[1]) / 2.0));
            edges.push(centers[n - 1] + (centers[n - 1] - centers[n - 2]) / 2.0);
            edges
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jet_endpoints() {
        // Dark blue at 0, dark red at 1, green in the middle
        assert_eq!(Colormap::Jet.map(0.0), RGBColor(0, 0, 128));
        assert_eq!(Colormap::Jet.map(1.0), RGBColor(128, 0, 0));
        assert_eq!(Colormap::Jet.map(0.5), RGBColor(128, 255, 128));
    }

    #[test]
    fn test_map_range_clamps() {
        let map = Colormap::Jet;
        assert_eq!(map.map_range(1.5, 0.0, 0.8), map.map(1.0));
        assert_eq!(map.map_range(-0.2, 0.0, 0.8), map.map(0.0));
        assert_eq!(map.map_range(0.4, 0.0, 0.8), map.map(0.5));
    }

    #[test]
    fn test_nan_maps_to_low_end() {
        assert_eq!(Colormap::Jet.map(f64::NAN), Colormap::Jet.map(0.0));
    }

    #[test]
    fn test_cell_edges() {
        assert_eq!(cell_edges(&[0.0, 1.0, 2.0]), vec![-0.5, 0.5, 1.5, 2.5]);
        assert_eq!(cell_edges(&[3.0]), vec![2.5, 3.5]);
        assert!(cell_edges(&[]).is_empty());
    }
}
