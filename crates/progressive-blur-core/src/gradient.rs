//! Mask gradient synthesis.
//!
//! Turns a [`BlurParameters`] snapshot into a CSS `linear-gradient(...)` used as
//! a mask image. The eased ramp is sampled at `precision + 1` evenly spaced
//! points and compressed into the first `height` percent of the axis; when the
//! ramp stops short of the edge a pinned stop at 100% holds the far end.
//!
//! ## Stop format
//!
//! - Eased stops: `rgba(0,0,0,A) P%` with `A` to 3 decimals and `P` to 1 decimal
//! - Pinned stop: `rgba(0,0,0,0) 100%` or `rgba(0,0,0,1) 100%`

use std::fmt;

use crate::easing::ease;
use crate::params::BlurParameters;

/// A single color stop of the mask gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaskStop {
    /// Sample of the eased ramp.
    Eased {
        /// Alpha of the black stop (0.0 to 1.0)
        alpha: f64,
        /// Position along the axis in percent
        position: f64,
    },
    /// Terminal stop at 100% pinning the rest of the axis to one extreme.
    Pinned {
        /// `true` for alpha 1, `false` for alpha 0
        opaque: bool,
    },
}

impl MaskStop {
    /// Alpha channel of this stop.
    pub fn alpha(&self) -> f64 {
        match *self {
            MaskStop::Eased { alpha, .. } => alpha,
            MaskStop::Pinned { opaque } => f64::from(u8::from(opaque)),
        }
    }

    /// Position of this stop in percent.
    pub fn position(&self) -> f64 {
        match *self {
            MaskStop::Eased { position, .. } => position,
            MaskStop::Pinned { .. } => 100.0,
        }
    }
}

impl fmt::Display for MaskStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MaskStop::Eased { alpha, position } => {
                write!(f, "rgba(0,0,0,{alpha:.3}) {position:.1}%")
            }
            MaskStop::Pinned { opaque } => {
                write!(f, "rgba(0,0,0,{}) 100%", u8::from(opaque))
            }
        }
    }
}

/// Compute the ordered stop list for a parameter snapshot.
///
/// Yields `precision + 1` eased stops, plus one pinned stop when `height < 100`.
///
/// # Panics
/// Panics if `precision` is zero. Validated parameters never have a zero
/// precision; reaching this is a caller bug, not a recoverable condition.
pub fn mask_stops(params: &BlurParameters) -> Vec<MaskStop> {
    assert!(
        params.precision > 0,
        "mask gradient precision must be at least 1 (got 0)"
    );

    let precision = f64::from(params.precision);
    let height = f64::from(params.height);
    let mut stops = Vec::with_capacity(params.precision as usize + 2);

    for i in 0..=params.precision {
        let t = f64::from(i) / precision;
        let eased = ease(params.easing_family, params.easing_variant, t);
        let alpha = if params.reverse { eased } else { 1.0 - eased };
        let position = t * height;
        stops.push(MaskStop::Eased { alpha, position });
    }

    if params.height < 100 {
        stops.push(MaskStop::Pinned {
            opaque: params.reverse,
        });
    }

    stops
}

/// Render the mask gradient for a parameter snapshot.
///
/// Output is a pure function of `params`: structurally equal inputs always
/// produce byte-identical strings.
///
/// # Panics
/// Panics if `params.precision` is zero (see [`mask_stops`]).
pub fn compute_mask_gradient(params: &BlurParameters) -> String {
    let stops: Vec<String> = mask_stops(params).iter().map(ToString::to_string).collect();
    format!("linear-gradient({}, {})", params.direction, stops.join(", "))
}
