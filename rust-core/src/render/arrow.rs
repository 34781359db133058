//! Quiver-style arrows in data coordinates

/// Arrow proportions, in the conventions of a quiver plot: the shaft width
/// is a fraction of the axis span, head sizes are multiples of the shaft width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuiverStyle {
    pub width: f64,
    pub head_width: f64,
    pub head_length: f64,
}

impl QuiverStyle {
    pub fn new(width: f64, head_width: f64, head_length: f64) -> Self {
        Self {
            width,
            head_width,
            head_length,
        }
    }

    /// Outline of an arrow from `origin` along `delta`
    ///
    /// # Arguments
    /// * `origin` - Tail point
    /// * `delta` - Vector components (the tip is `origin + delta`)
    /// * `span` - Axis span in data units, scaling the shaft width
    pub fn outline(&self, origin: (f64, f64), delta: (f64, f64), span: f64) -> Vec<(f64, f64)> {
        let shaft = self.width * span;
        arrow_polygon(origin, delta, shaft, self.head_width * shaft, self.head_length * shaft)
    }
}

/// Closed outline of a filled arrow: shaft rectangle plus triangular head
///
/// Returns seven vertices; a zero-length vector degenerates to its origin.
pub fn arrow_polygon(
    origin: (f64, f64),
    delta: (f64, f64),
    shaft_width: f64,
    head_width: f64,
    head_length: f64,
) -> Vec<(f64, f64)> {
    let length = delta.0.hypot(delta.1);
    if length == 0.0 {
        return vec![origin];
    }

    let (ux, uy) = (delta.0 / length, delta.1 / length);
    let (nx, ny) = (-uy, ux);
    let head_length = head_length.min(length);
    let base = (
        origin.0 + ux * (length - head_length),
        origin.1 + uy * (length - head_length),
    );
    let tip = (origin.0 + delta.0, origin.1 + delta.1);
    let offset = |p: (f64, f64), half: f64| (p.0 + nx * half, p.1 + ny * half);

    vec![
        offset(origin, shaft_width / 2.0),
        offset(base, shaft_width / 2.0),
        offset(base, head_width / 2.0),
        tip,
        offset(base, -head_width / 2.0),
        offset(base, -shaft_width / 2.0),
        offset(origin, -shaft_width / 2.0),
    ]
}

type Point3 = (f64, f64, f64);

fn scale(v: Point3, k: f64) -> Point3 {
    (v.0 * k, v.1 * k, v.2 * k)
}

fn add(a: Point3, b: Point3) -> Point3 {
    (a.0 + b.0, a.1 + b.1, a.2 + b.2)
}

fn cross(a: Point3, b: Point3) -> Point3 {
    (
        a.1 * b.2 - a.2 * b.1,
        a.2 * b.0 - a.0 * b.2,
        a.0 * b.1 - a.1 * b.0,
    )
}

fn norm(v: Point3) -> f64 {
    (v.0 * v.0 + v.1 * v.1 + v.2 * v.2).sqrt()
}

/// Line segments of a 3D arrow: the shaft and two head strokes
///
/// Head strokes are `length_ratio` of the arrow long and open 15° from the
/// shaft, lying in the plane spanned by the shaft and its normal to z.
pub fn arrow3d_segments(origin: Point3, delta: Point3, length_ratio: f64) -> Vec<[Point3; 2]> {
    let tip = add(origin, delta);
    let length = norm(delta);
    if length == 0.0 {
        return Vec::new();
    }

    let u = scale(delta, 1.0 / length);
    let mut side = cross(u, (0.0, 0.0, 1.0));
    if norm(side) < 1e-9 {
        side = cross(u, (1.0, 0.0, 0.0));
    }
    let side = scale(side, 1.0 / norm(side));

    let (sin, cos) = 15f64.to_radians().sin_cos();
    let head = length * length_ratio;
    let back = scale(u, -cos * head);

    vec![
        [origin, tip],
        [tip, add(tip, add(back, scale(side, sin * head)))],
        [tip, add(tip, add(back, scale(side, -sin * head)))],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_polygon_tip_and_width() {
        let outline = arrow_polygon((0.0, 0.0), (2.0, 0.0), 0.1, 0.4, 0.5);
        assert_eq!(outline.len(), 7);
        assert_eq!(outline[3], (2.0, 0.0));

        // Shaft corners at ±width/2, head base at length - head_length
        assert!((outline[0].1 - 0.05).abs() < 1e-12);
        assert!((outline[1].0 - 1.5).abs() < 1e-12);
        assert!((outline[2].1 - 0.2).abs() < 1e-12);
        assert!((outline[4].1 + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_arrow_head_clamped_to_length() {
        let outline = arrow_polygon((1.0, 1.0), (0.0, 0.1), 0.01, 0.08, 1.0);
        // Head base collapses onto the tail
        assert!((outline[1].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_quiver_style_scales_with_span() {
        let style = QuiverStyle::new(0.005, 8.0, 10.0);
        let outline = style.outline((0.0, 0.0), (1.0, 0.0), 2.0);
        // shaft 0.01, head length 0.1, head width 0.08
        assert!((outline[1].0 - 0.9).abs() < 1e-12);
        assert!((outline[2].1 - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_arrow3d_head_points_back() {
        let segments = arrow3d_segments((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 0.1);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0][1], (1.0, 0.0, 0.0));

        for stroke in &segments[1..] {
            let end = stroke[1];
            assert!(end.0 < 1.0);
            assert!((norm((end.0 - 1.0, end.1, end.2)) - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn test_arrow3d_vertical_vector() {
        let segments = arrow3d_segments((0.0, 0.0, 0.0), (0.0, 0.0, 1.0), 0.2);
        assert_eq!(segments.len(), 3);
        assert!(segments[1][1].2 < 1.0);
    }
}
