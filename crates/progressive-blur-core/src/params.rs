//! Blur parameter snapshot and its vocabulary.
//!
//! [`BlurParameters`] is the single value the editor passes around: it feeds
//! the gradient synthesizer and is what the history stores. Values are `Copy`
//! and never mutated in place; the `with_*` builders return new snapshots.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::easing::{EasingFamily, EasingVariant};

/// Valid range for [`BlurParameters::height`] (percent of the container).
pub const HEIGHT_RANGE: RangeInclusive<u32> = 0..=100;

/// Valid range for [`BlurParameters::precision`] (gradient segments).
pub const PRECISION_RANGE: RangeInclusive<u32> = 2..=20;

/// Valid range for [`BlurParameters::blur_radius`] (pixels).
pub const BLUR_RADIUS_RANGE: RangeInclusive<u32> = 0..=50;

/// Errors raised when host input cannot be turned into parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The direction keyword is not one of the four CSS side keywords.
    #[error("Unknown gradient direction: {0}")]
    UnknownDirection(String),

    /// The easing family is not in the catalog.
    #[error("Unknown easing family: {0}")]
    UnknownEasingFamily(String),

    /// The easing variant is not `in`, `out` or `in-out`.
    #[error("Unknown easing variant: {0}")]
    UnknownEasingVariant(String),

    /// The export format is not supported.
    #[error("Unknown export format: {0}")]
    UnknownExportFormat(String),

    /// A numeric field lies outside its domain.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Gradient axis, rendered as a CSS side keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "to top")]
    ToTop,
    #[default]
    #[serde(rename = "to bottom")]
    ToBottom,
    #[serde(rename = "to right")]
    ToRight,
    #[serde(rename = "to left")]
    ToLeft,
}

impl Direction {
    /// All directions in selector order.
    pub const ALL: [Direction; 4] = [
        Direction::ToTop,
        Direction::ToBottom,
        Direction::ToRight,
        Direction::ToLeft,
    ];

    /// CSS keyword for this direction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::ToTop => "to top",
            Direction::ToBottom => "to bottom",
            Direction::ToRight => "to right",
            Direction::ToLeft => "to left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParamError::UnknownDirection(s.to_string()))
    }
}

/// Full parameter snapshot for the progressive blur effect.
///
/// Equality is structural over all seven fields, which is what the history
/// uses to drop no-change commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlurParameters {
    /// Gradient axis
    pub direction: Direction,
    /// Share of the container covered by the eased ramp (0 to 100 percent)
    pub height: u32,
    /// Number of gradient segments (2 to 20)
    pub precision: u32,
    /// Backdrop blur radius in pixels (0 to 50); not used for stops
    pub blur_radius: u32,
    /// Easing curve family
    pub easing_family: EasingFamily,
    /// Easing curve variant (ignored for linear)
    pub easing_variant: EasingVariant,
    /// Flip which end of the ramp is opaque
    pub reverse: bool,
}

impl Default for BlurParameters {
    fn default() -> Self {
        Self {
            direction: Direction::ToBottom,
            height: 50,
            precision: 10,
            blur_radius: 16,
            easing_family: EasingFamily::Quad,
            easing_variant: EasingVariant::InOut,
            reverse: false,
        }
    }
}

impl BlurParameters {
    /// Create parameters with the editor's mount defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    pub fn with_height(self, height: u32) -> Self {
        Self { height, ..self }
    }

    pub fn with_precision(self, precision: u32) -> Self {
        Self { precision, ..self }
    }

    pub fn with_blur_radius(self, blur_radius: u32) -> Self {
        Self { blur_radius, ..self }
    }

    pub fn with_easing(self, family: EasingFamily, variant: EasingVariant) -> Self {
        Self {
            easing_family: family,
            easing_variant: variant,
            ..self
        }
    }

    pub fn with_reverse(self, reverse: bool) -> Self {
        Self { reverse, ..self }
    }

    /// Check every numeric field against its domain.
    ///
    /// # Errors
    /// Returns [`ParamError::OutOfRange`] for the first field outside its range,
    /// checked in the order height, precision, blur radius.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_range("height", self.height, &HEIGHT_RANGE)?;
        check_range("precision", self.precision, &PRECISION_RANGE)?;
        check_range("blurRadius", self.blur_radius, &BLUR_RADIUS_RANGE)?;
        Ok(())
    }

    /// Return a copy with every numeric field clamped into its domain.
    pub fn clamped(self) -> Self {
        Self {
            height: clamp_to(self.height, &HEIGHT_RANGE),
            precision: clamp_to(self.precision, &PRECISION_RANGE),
            blur_radius: clamp_to(self.blur_radius, &BLUR_RADIUS_RANGE),
            ..self
        }
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), ParamError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ParamError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[inline]
fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BlurParameters::default().validate().is_ok());
    }

    #[test]
    fn test_builders_leave_original_untouched() {
        let original = BlurParameters::new();
        let edited = original.with_height(80).with_reverse(true);

        assert_eq!(original.height, 50);
        assert!(!original.reverse);
        assert_eq!(edited.height, 80);
        assert!(edited.reverse);
        assert_ne!(original, edited);
    }

    #[test]
    fn test_structural_equality() {
        let a = BlurParameters::default().with_precision(12);
        let b = BlurParameters::default().with_precision(12);
        assert_eq!(a, b);
        assert_ne!(a, b.with_blur_radius(3));
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let params = BlurParameters::default().with_height(101).with_precision(1);
        assert_eq!(
            params.validate(),
            Err(ParamError::OutOfRange {
                field: "height",
                value: 101,
                min: 0,
                max: 100,
            })
        );
    }

    #[test]
    fn test_validate_precision_bounds() {
        let base = BlurParameters::default();
        assert!(base.with_precision(2).validate().is_ok());
        assert!(base.with_precision(20).validate().is_ok());
        assert!(base.with_precision(1).validate().is_err());
        assert!(base.with_precision(21).validate().is_err());
        assert!(base.with_precision(0).validate().is_err());
    }

    #[test]
    fn test_validate_blur_radius() {
        let err = BlurParameters::default()
            .with_blur_radius(51)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "blurRadius must be between 0 and 50, got 51");
    }

    #[test]
    fn test_clamped() {
        let params = BlurParameters::default()
            .with_height(250)
            .with_precision(0)
            .with_blur_radius(99)
            .clamped();
        assert_eq!(params.height, 100);
        assert_eq!(params.precision, 2);
        assert_eq!(params.blur_radius, 50);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_direction_round_trip_strings() {
        for direction in Direction::ALL {
            assert_eq!(direction.as_str().parse::<Direction>(), Ok(direction));
            assert_eq!(direction.to_string(), direction.as_str());
        }
    }

    #[test]
    fn test_direction_parse_unknown() {
        assert_eq!(
            "to top left".parse::<Direction>(),
            Err(ParamError::UnknownDirection("to top left".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_host_field_names() {
        let params = BlurParameters::default()
            .with_direction(Direction::ToLeft)
            .with_easing(EasingFamily::Expo, EasingVariant::Out);
        let json = serde_json::to_value(params).unwrap();

        assert_eq!(json["direction"], "to left");
        assert_eq!(json["blurRadius"], 16);
        assert_eq!(json["easingFamily"], "expo");
        assert_eq!(json["easingVariant"], "out");
        assert_eq!(json["reverse"], false);
    }

    #[test]
    fn test_serde_parses_host_object() {
        let json = r#"{
            "direction": "to top",
            "height": 50,
            "precision": 6,
            "blurRadius": 8,
            "easingFamily": "circ",
            "easingVariant": "in-out",
            "reverse": true
        }"#;
        let params: BlurParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.direction, Direction::ToTop);
        assert_eq!(params.easing_family, EasingFamily::Circ);
        assert_eq!(params.easing_variant, EasingVariant::InOut);
        assert!(params.reverse);
    }

    #[test]
    fn test_serde_rejects_unknown_family() {
        let json = r#"{
            "direction": "to top",
            "height": 50,
            "precision": 6,
            "blurRadius": 8,
            "easingFamily": "bounce",
            "easingVariant": "in",
            "reverse": false
        }"#;
        assert!(serde_json::from_str::<BlurParameters>(json).is_err());
    }
}
