//! Easing catalog used to shape the mask ramp.
//!
//! Eight families, each with an `in`, `out` and `in-out` variant, plus linear.
//! Every curve maps `t` in `[0, 1]` onto `[0, 1]` with `f(0) = 0` and
//! `f(1) = 1`. Resolution goes through [`lookup`] or [`ease`], which match
//! exhaustively on the family/variant pair.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::params::ParamError;

/// Signature shared by every catalog entry.
pub type EasingFn = fn(f64) -> f64;

/// Easing curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingFamily {
    Linear,
    Sine,
    Quad,
    Cubic,
    Quart,
    Quint,
    Expo,
    Circ,
}

impl EasingFamily {
    /// All families in selector order.
    pub const ALL: [EasingFamily; 8] = [
        EasingFamily::Linear,
        EasingFamily::Sine,
        EasingFamily::Quad,
        EasingFamily::Cubic,
        EasingFamily::Quart,
        EasingFamily::Quint,
        EasingFamily::Expo,
        EasingFamily::Circ,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EasingFamily::Linear => "linear",
            EasingFamily::Sine => "sine",
            EasingFamily::Quad => "quad",
            EasingFamily::Cubic => "cubic",
            EasingFamily::Quart => "quart",
            EasingFamily::Quint => "quint",
            EasingFamily::Expo => "expo",
            EasingFamily::Circ => "circ",
        }
    }
}

impl fmt::Display for EasingFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EasingFamily {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EasingFamily::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| ParamError::UnknownEasingFamily(s.to_string()))
    }
}

/// Which end(s) of the curve are slow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EasingVariant {
    /// Slow start
    #[serde(rename = "in")]
    In,
    /// Slow end
    #[serde(rename = "out")]
    Out,
    /// Slow start and end
    #[default]
    #[serde(rename = "in-out")]
    InOut,
}

impl EasingVariant {
    pub const ALL: [EasingVariant; 3] = [EasingVariant::In, EasingVariant::Out, EasingVariant::InOut];

    pub const fn as_str(self) -> &'static str {
        match self {
            EasingVariant::In => "in",
            EasingVariant::Out => "out",
            EasingVariant::InOut => "in-out",
        }
    }
}

impl fmt::Display for EasingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EasingVariant {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EasingVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| ParamError::UnknownEasingVariant(s.to_string()))
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Resolve a family/variant pair to its curve.
///
/// Linear ignores the variant.
pub fn lookup(family: EasingFamily, variant: EasingVariant) -> EasingFn {
    use EasingFamily::*;
    use EasingVariant::{In, InOut, Out};

    match (family, variant) {
        (Linear, _) => linear,
        (Sine, In) => sine_in,
        (Sine, Out) => sine_out,
        (Sine, InOut) => sine_in_out,
        (Quad, In) => quad_in,
        (Quad, Out) => quad_out,
        (Quad, InOut) => quad_in_out,
        (Cubic, In) => cubic_in,
        (Cubic, Out) => cubic_out,
        (Cubic, InOut) => cubic_in_out,
        (Quart, In) => quart_in,
        (Quart, Out) => quart_out,
        (Quart, InOut) => quart_in_out,
        (Quint, In) => quint_in,
        (Quint, Out) => quint_out,
        (Quint, InOut) => quint_in_out,
        (Expo, In) => expo_in,
        (Expo, Out) => expo_out,
        (Expo, InOut) => expo_in_out,
        (Circ, In) => circ_in,
        (Circ, Out) => circ_out,
        (Circ, InOut) => circ_in_out,
    }
}

/// Evaluate the eased progress for `t`.
///
/// The endpoints are pinned so every curve returns exactly `0.0` and `1.0`
/// there, regardless of trigonometric rounding (`1 - cos(PI / 2)` is not
/// exactly one in binary floating point). Out-of-range `t` is clamped.
pub fn ease(family: EasingFamily, variant: EasingVariant, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    lookup(family, variant)(t)
}

// ============================================================================
// Curves
// ============================================================================

fn linear(t: f64) -> f64 {
    t
}

fn sine_in(t: f64) -> f64 {
    1.0 - (t * PI / 2.0).cos()
}

fn sine_out(t: f64) -> f64 {
    (t * PI / 2.0).sin()
}

fn sine_in_out(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

/// Polynomial in/out/in-out triple for degree `n`.
#[inline]
fn power_in(t: f64, n: i32) -> f64 {
    t.powi(n)
}

#[inline]
fn power_out(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

#[inline]
fn power_in_out(t: f64, n: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(n - 1) * t.powi(n)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(n) / 2.0
    }
}

fn quad_in(t: f64) -> f64 {
    power_in(t, 2)
}

fn quad_out(t: f64) -> f64 {
    power_out(t, 2)
}

fn quad_in_out(t: f64) -> f64 {
    power_in_out(t, 2)
}

fn cubic_in(t: f64) -> f64 {
    power_in(t, 3)
}

fn cubic_out(t: f64) -> f64 {
    power_out(t, 3)
}

fn cubic_in_out(t: f64) -> f64 {
    power_in_out(t, 3)
}

fn quart_in(t: f64) -> f64 {
    power_in(t, 4)
}

fn quart_out(t: f64) -> f64 {
    power_out(t, 4)
}

fn quart_in_out(t: f64) -> f64 {
    power_in_out(t, 4)
}

fn quint_in(t: f64) -> f64 {
    power_in(t, 5)
}

fn quint_out(t: f64) -> f64 {
    power_out(t, 5)
}

fn quint_in_out(t: f64) -> f64 {
    power_in_out(t, 5)
}

// 2^(10t - 10) is about 0.001 at t = 0, not zero, so both ends are special-cased.
fn expo_in(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * t - 10.0)
    }
}

fn expo_out(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

fn expo_in_out(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else if t < 0.5 {
        2f64.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
    }
}

fn circ_in(t: f64) -> f64 {
    1.0 - (1.0 - t * t).sqrt()
}

fn circ_out(t: f64) -> f64 {
    (1.0 - (t - 1.0).powi(2)).sqrt()
}

fn circ_in_out(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
    }
}
