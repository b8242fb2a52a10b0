//! Style-code export.
//!
//! Formats a parameter snapshot as copyable style code: a plain CSS rule or a
//! Tailwind arbitrary-value class list. Both embed the same mask gradient the
//! preview uses, so what the user copies matches what they see.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::gradient::compute_mask_gradient;
use crate::params::{BlurParameters, ParamError};

/// Class name used for the exported CSS rule.
pub const CSS_CLASS_NAME: &str = "progressive-blur";

/// Output flavor for [`export_style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Tailwind,
}

impl ExportFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Tailwind => "tailwind",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "css" => Ok(ExportFormat::Css),
            "tailwind" => Ok(ExportFormat::Tailwind),
            other => Err(ParamError::UnknownExportFormat(other.to_string())),
        }
    }
}

/// Render `params` as style code in the requested format.
///
/// # Panics
/// Panics if `params.precision` is zero, like [`compute_mask_gradient`].
pub fn export_style(params: &BlurParameters, format: ExportFormat) -> String {
    let gradient = compute_mask_gradient(params);
    match format {
        ExportFormat::Css => css_rule(params.blur_radius, &gradient),
        ExportFormat::Tailwind => tailwind_classes(params.blur_radius, &gradient),
    }
}

fn css_rule(blur_radius: u32, gradient: &str) -> String {
    format!(
        ".{CSS_CLASS_NAME} {{\n\
         \x20 backdrop-filter: blur({blur_radius}px);\n\
         \x20 -webkit-backdrop-filter: blur({blur_radius}px);\n\
         \x20 mask-image: {gradient};\n\
         \x20 -webkit-mask-image: {gradient};\n\
         }}\n"
    )
}

// Tailwind arbitrary values cannot contain whitespace; `_` stands in for a space.
fn tailwind_classes(blur_radius: u32, gradient: &str) -> String {
    let gradient = gradient.replace(' ', "_");
    format!("backdrop-blur-[{blur_radius}px] [mask-image:{gradient}] [-webkit-mask-image:{gradient}]")
}
