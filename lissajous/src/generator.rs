//! Lissajous curve generator.
//!
//! A Lissajous figure is the family of curves described by:
//!   x(t) = sin(a*t + δ)
//!   y(t) = cos(b*t)
//!
//! sampled at `resolution` evenly spaced values of t over [0, 2π].
//! Different a:b ratios create different figures (1:1 = circle, 1:2 = parabola arc, etc.)
//!
//! The phase shift δ only moves the x component. y is left unshifted.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::CurveError;
use crate::geometry::{Figure, Point};

/// Fewest points that still describe a curve.
pub const MIN_RESOLUTION: usize = 2;

/// Resolution used when the caller doesn't pick one.
pub const DEFAULT_RESOLUTION: usize = 20;

/// Number of sample points on a curve. Always at least [`MIN_RESOLUTION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution(usize);

impl Resolution {
    pub fn new(points: usize) -> Result<Self, CurveError> {
        if points < MIN_RESOLUTION {
            return Err(CurveError::invalid(
                "resolution",
                format!("must be at least {}, got {}", MIN_RESOLUTION, points),
            ));
        }
        Ok(Self(points))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self(DEFAULT_RESOLUTION)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for Resolution {
    type Error = CurveError;

    fn try_from(points: usize) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl TryFrom<i64> for Resolution {
    type Error = CurveError;

    fn try_from(points: i64) -> Result<Self, Self::Error> {
        let points = usize::try_from(points).map_err(|_| {
            CurveError::invalid("resolution", format!("must be positive, got {}", points))
        })?;
        Self::new(points)
    }
}

impl TryFrom<f64> for Resolution {
    type Error = CurveError;

    fn try_from(points: f64) -> Result<Self, Self::Error> {
        if !points.is_finite() {
            return Err(CurveError::invalid("resolution", "must be finite"));
        }
        if points.fract() != 0.0 {
            return Err(CurveError::invalid(
                "resolution",
                format!("must be a whole number, got {}", points),
            ));
        }
        // `usize::MAX as f64` rounds up to 2^64, which doesn't fit.
        if points < 0.0 || points >= usize::MAX as f64 {
            return Err(CurveError::invalid(
                "resolution",
                format!("out of range: {}", points),
            ));
        }
        Self::new(points as usize)
    }
}

impl FromStr for Resolution {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(points) => Self::new(points),
            Err(_) => Err(CurveError::invalid(
                "resolution",
                format!("expected a positive integer, got {:?}", s),
            )),
        }
    }
}

/// Everything needed to trace one figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    pub freq_x: f64,
    pub freq_y: f64,
    pub phase_shift: f64,
    pub resolution: Resolution,
}

impl CurveParameters {
    pub fn new(freq_x: f64, freq_y: f64, phase_shift: f64, resolution: Resolution) -> Self {
        Self { freq_x, freq_y, phase_shift, resolution }
    }

    /// Reject NaN and infinite inputs.
    pub fn validate(&self) -> Result<(), CurveError> {
        check_finite("freq_x", self.freq_x)?;
        check_finite("freq_y", self.freq_y)?;
        check_finite("phase_shift", self.phase_shift)?;
        Ok(())
    }

    pub fn generate(&self) -> Result<Figure, CurveError> {
        self.validate()?;
        Ok(sample(self.freq_x, self.freq_y, self.phase_shift, self.resolution))
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), CurveError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CurveError::invalid(name, format!("must be finite, got {}", value)))
    }
}

/// Generate a Lissajous figure.
///
/// Samples `resolution` points at `t_i = i * 2π / (resolution - 1)` and
/// returns `(sin(freq_x * t_i + phase_shift), cos(freq_y * t_i))` in index
/// order. Fails with [`CurveError::InvalidParameter`] before producing
/// anything if `resolution < 2` or any real input is NaN/infinite.
pub fn generate(
    freq_x: f64,
    freq_y: f64,
    phase_shift: f64,
    resolution: usize,
) -> Result<Figure, CurveError> {
    let resolution = Resolution::new(resolution)?;
    CurveParameters::new(freq_x, freq_y, phase_shift, resolution).generate()
}

fn sample(freq_x: f64, freq_y: f64, phase_shift: f64, resolution: Resolution) -> Figure {
    let n = resolution.get();
    let last = n - 1;
    let step = 2.0 * PI / last as f64;

    let points: Vec<Point> = (0..n)
        .map(|i| {
            // Pin the endpoint so the last sample is exactly 2π.
            let t = if i == last { 2.0 * PI } else { i as f64 * step };
            Point::new((freq_x * t + phase_shift).sin(), (freq_y * t).cos())
        })
        .collect();

    trace!(
        "generated {} points (freq_x={}, freq_y={}, phase_shift={})",
        points.len(), freq_x, freq_y, phase_shift
    );

    Figure::new(points)
}

/// Generator with a stored default resolution.
///
/// Calls that don't pass a resolution use the stored one. Changing it only
/// affects later calls; figures already handed out are untouched.
#[derive(Debug, Clone, Default)]
pub struct LissajousGenerator {
    resolution: Resolution,
}

impl LissajousGenerator {
    pub fn new(resolution: usize) -> Result<Self, CurveError> {
        Ok(Self { resolution: Resolution::new(resolution)? })
    }

    /// Number of points in each generated figure.
    pub fn resolution(&self) -> usize {
        self.resolution.get()
    }

    /// Change the stored resolution. On error the previous value is kept.
    pub fn set_resolution(&mut self, resolution: usize) -> Result<(), CurveError> {
        self.resolution = Resolution::new(resolution)?;
        Ok(())
    }

    /// Generate a figure using the stored resolution.
    pub fn generate_figure(
        &self,
        freq_x: f64,
        freq_y: f64,
        phase_shift: f64,
    ) -> Result<Figure, CurveError> {
        CurveParameters::new(freq_x, freq_y, phase_shift, self.resolution).generate()
    }
}
