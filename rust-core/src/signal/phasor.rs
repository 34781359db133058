//! Phasors: a sinusoid's amplitude and phase as one complex number

use num_complex::Complex64;
use std::fmt;
use std::ops::Add;

/// Complex amplitude A·e^(jθ)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phasor(Complex64);

impl Phasor {
    /// Build a phasor from amplitude and phase in degrees
    pub fn from_polar_deg(amplitude: f64, phase_deg: f64) -> Self {
        Self(Complex64::from_polar(amplitude, phase_deg.to_radians()))
    }

    pub fn re(&self) -> f64 {
        self.0.re
    }

    pub fn im(&self) -> f64 {
        self.0.im
    }

    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Phase angle in degrees, in (-180, 180]
    pub fn phase_deg(&self) -> f64 {
        self.0.arg().to_degrees()
    }

    pub fn as_complex(&self) -> Complex64 {
        self.0
    }
}

impl Add for Phasor {
    type Output = Phasor;

    fn add(self, rhs: Phasor) -> Phasor {
        Phasor(self.0 + rhs.0)
    }
}

impl fmt::Display for Phasor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}{:+.3}j", self.0.re, self.0.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phasor_sum_matches_complex_exponentials() {
        let h1 = Phasor::from_polar_deg(1.5, 30.0);
        let h2 = Phasor::from_polar_deg(1.0, 120.0);
        let r = h1 + h2;

        let expected = 1.5 * Complex64::new(0.0, 30f64.to_radians()).exp()
            + 1.0 * Complex64::new(0.0, 120f64.to_radians()).exp();

        assert!((r.re() - expected.re).abs() < 1e-12);
        assert!((r.im() - expected.im).abs() < 1e-12);

        // |R| ≈ 1.803, ∠R ≈ 63.7°
        assert!((r.magnitude() - 1.8028).abs() < 1e-3);
        assert!((r.phase_deg() - 63.69).abs() < 0.05);
    }

    #[test]
    fn test_phasor_display() {
        let h1 = Phasor::from_polar_deg(1.5, 30.0);
        assert_eq!(h1.to_string(), "1.299+0.750j");

        let h2 = Phasor::from_polar_deg(1.0, 120.0);
        assert_eq!(h2.to_string(), "-0.500+0.866j");
    }

    #[test]
    fn test_phase_wraps_to_principal_value() {
        let p = Phasor::from_polar_deg(2.0, 270.0);
        assert!((p.phase_deg() + 90.0).abs() < 1e-9);
        assert!((p.magnitude() - 2.0).abs() < 1e-12);
    }
}
