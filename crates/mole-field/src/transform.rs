//! Monotone value transforms applied during import.
//!
//! The normal-score transform maps a standard normal value to another
//! standard normal value whose high (or low) extremes are spatially
//! connected, following Zinn & Harvey (2003). It needs `erf` and its
//! inverse, which are evaluated here to near double precision.

use std::f64::consts::{PI, SQRT_2};

/// Which extreme of a normal-score transformed field becomes connected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// High values form connected channels.
    Connected,
    /// Low values form connected barriers.
    Disconnected,
}

impl Connectivity {
    fn sign(self) -> f64 {
        match self {
            Connectivity::Connected => 1.0,
            Connectivity::Disconnected => -1.0,
        }
    }
}

/// Smallest magnitude fed to the transform; `erf_inv(-1)` diverges.
const MIN_MAGNITUDE: f64 = 1e-6;

/// Normal-score transform of a standard normal value.
pub fn normal_score(value: f64, connectivity: Connectivity) -> f64 {
    let t = value.abs().max(MIN_MAGNITUDE);
    -connectivity.sign() * SQRT_2 * erf_inv(2.0 * erf(t / SQRT_2) - 1.0)
}

/// The error function.
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return -erf(-x);
    }
    if x < 2.5 {
        erf_series(x)
    } else {
        1.0 - erfc_continued_fraction(x)
    }
}

/// Maclaurin series, accurate to ~1e-15 on `[0, 2.5)`.
fn erf_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    for n in 1..120 {
        let n = n as f64;
        term *= -x2 / n;
        let contrib = term / (2.0 * n + 1.0);
        sum += contrib;
        if contrib.abs() < 1e-17 * sum.abs() {
            break;
        }
    }
    sum * 2.0 / PI.sqrt()
}

/// Laplace continued fraction for `erfc`, evaluated bottom-up.
fn erfc_continued_fraction(x: f64) -> f64 {
    let mut t = x;
    for k in (1..=100).rev() {
        t = x + (k as f64 / 2.0) / t;
    }
    (-x * x).exp() / PI.sqrt() / t
}

/// Inverse of [`erf`] on `(-1, 1)`.
///
/// Returns `±inf` at `±1` and NaN outside `[-1, 1]`.
pub fn erf_inv(x: f64) -> f64 {
    if x.is_nan() || !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }
    if x == 1.0 {
        return f64::INFINITY;
    }
    if x == -1.0 {
        return f64::NEG_INFINITY;
    }

    // Giles' single-precision approximation, then Newton refinement.
    let mut w = -((1.0 - x) * (1.0 + x)).ln();
    let p = if w < 5.0 {
        w -= 2.5;
        let mut p = 2.810_226_36e-08;
        p = 3.432_739_39e-07 + p * w;
        p = -3.523_387_7e-06 + p * w;
        p = -4.391_506_54e-06 + p * w;
        p = 0.000_218_580_87 + p * w;
        p = -0.001_253_725_03 + p * w;
        p = -0.004_177_681_64 + p * w;
        p = 0.246_640_727 + p * w;
        1.501_409_41 + p * w
    } else {
        w = w.sqrt() - 3.0;
        let mut p = -0.000_200_214_257;
        p = 0.000_100_950_558 + p * w;
        p = 0.001_349_343_22 + p * w;
        p = -0.003_673_428_44 + p * w;
        p = 0.005_739_507_73 + p * w;
        p = -0.007_622_461_3 + p * w;
        p = 0.009_438_870_47 + p * w;
        p = 1.001_674_06 + p * w;
        2.832_976_82 + p * w
    };
    let mut y = p * x;

    let scale = 2.0 / PI.sqrt();
    for _ in 0..2 {
        let slope = scale * (-y * y).exp();
        if slope == 0.0 {
            break;
        }
        y -= (erf(y) - x) / slope;
    }
    y
}
