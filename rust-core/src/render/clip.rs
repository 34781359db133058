//! Clipping polylines to the axis limits
//!
//! Series that leave the visible range are cut at the frame instead of
//! spilling into the margins.

use std::ops::Range;

/// Liang-Barsky clip of segment p0→p1; returns the visible parameter range
fn clip_segment(
    p0: (f64, f64),
    p1: (f64, f64),
    x: &Range<f64>,
    y: &Range<f64>,
) -> Option<(f64, f64)> {
    let dx = p1.0 - p0.0;
    let dy = p1.1 - p0.1;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    for (p, q) in [
        (-dx, p0.0 - x.start),
        (dx, x.end - p0.0),
        (-dy, p0.1 - y.start),
        (dy, y.end - p0.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((t0, t1))
}

fn lerp(p0: (f64, f64), p1: (f64, f64), t: f64) -> (f64, f64) {
    (p0.0 + (p1.0 - p0.0) * t, p0.1 + (p1.1 - p0.1) * t)
}

/// Split a polyline into the runs visible inside `x` × `y` (bounds inclusive)
///
/// Segments crossing the frame are cut at the crossing point, so every run
/// starts and ends either at a data point or on the frame. A non-finite
/// point breaks the line.
pub fn visible_runs<I>(points: I, x: Range<f64>, y: Range<f64>) -> Vec<Vec<(f64, f64)>>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let points: Vec<(f64, f64)> = points.into_iter().collect();

    let mut runs = Vec::new();
    for piece in points.split(|p| !(p.0.is_finite() && p.1.is_finite())) {
        clip_polyline(piece, &x, &y, &mut runs);
    }
    runs
}

fn clip_polyline(
    points: &[(f64, f64)],
    x: &Range<f64>,
    y: &Range<f64>,
    runs: &mut Vec<Vec<(f64, f64)>>,
) {
    let mut current: Vec<(f64, f64)> = Vec::new();

    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        match clip_segment(p0, p1, x, y) {
            Some((t0, t1)) => {
                if current.is_empty() || t0 > 0.0 {
                    if current.len() >= 2 {
                        runs.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(lerp(p0, p1, t0));
                }
                current.push(lerp(p0, p1, t1));
                if t1 < 1.0 {
                    runs.push(std::mem::take(&mut current));
                }
            }
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                }
                current.clear();
            }
        }
    }

    if current.len() >= 2 {
        runs.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_visible_line_is_one_run() {
        let runs = visible_runs(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.5)], 0.0..2.0, 0.0..1.0);
        assert_eq!(runs, vec![vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.5)]]);
    }

    #[test]
    fn test_dip_below_floor_splits_run() {
        // Drops below y = -1 between x = 1 and x = 3
        let points = vec![(0.0, 0.0), (2.0, -4.0), (4.0, 0.0)];
        let runs = visible_runs(points, 0.0..4.0, -1.0..1.0);

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0.0, 0.0), (0.5, -1.0)]);
        assert_eq!(runs[1], vec![(3.5, -1.0), (4.0, 0.0)]);
    }

    #[test]
    fn test_x_limits_trim_the_series() {
        let points = (0..10).map(|k| (k as f64, 1.0));
        let runs = visible_runs(points, 2.5..4.5, 0.0..2.0);
        assert_eq!(runs, vec![vec![(2.5, 1.0), (3.0, 1.0), (4.0, 1.0), (4.5, 1.0)]]);
    }

    #[test]
    fn test_non_finite_point_breaks_the_line() {
        let points = vec![
            (0.0, 0.0),
            (0.25, 0.5),
            (0.5, f64::NEG_INFINITY),
            (0.75, 0.0),
            (1.0, 0.5),
        ];
        let runs = visible_runs(points, 0.0..1.0, -1.0..1.0);
        assert_eq!(
            runs,
            vec![vec![(0.0, 0.0), (0.25, 0.5)], vec![(0.75, 0.0), (1.0, 0.5)]]
        );

        // An isolated finite point between gaps draws nothing
        let runs = visible_runs(vec![(0.0, 0.0), (0.5, f64::NAN), (1.0, 0.0)], 0.0..1.0, -1.0..1.0);
        assert!(runs.is_empty());
    }

    #[test]
    fn test_invisible_series_has_no_runs() {
        let runs = visible_runs(vec![(0.0, 5.0), (1.0, 6.0)], 0.0..1.0, 0.0..1.0);
        assert!(runs.is_empty());
    }
}
