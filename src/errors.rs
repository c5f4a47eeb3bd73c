//! Error types for the host-facing conversion seams.
//!
//! The pass engine itself is total; these only surface when a host turns
//! untrusted input (color strings, numbers from a settings screen) into
//! configuration.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Color Errors
// ============================================================================

/// Errors from parsing a color string
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("empty color string")]
    #[diagnostic(code(stepkit::color::empty))]
    Empty,

    #[error("invalid hex digit {digit:?} in {input:?}")]
    #[diagnostic(code(stepkit::color::invalid_hex_digit))]
    InvalidHexDigit { input: String, digit: char },

    #[error("hex color {input:?} has {len} digits")]
    #[diagnostic(
        code(stepkit::color::invalid_hex_length),
        help("use 3, 6 or 8 hex digits: #rgb, #rrggbb or #rrggbbaa")
    )]
    InvalidHexLength { input: String, len: usize },

    #[error("unknown color name: {name}")]
    #[diagnostic(code(stepkit::color::unknown_name))]
    UnknownName {
        name: String,
        #[help]
        suggestion: Option<String>,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors from the checked configuration setters
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid {field}: {source}")]
    #[diagnostic(code(stepkit::config::invalid_length))]
    InvalidLength {
        field: &'static str,
        value: f64,
        #[source]
        source: NumericError,
    },

    #[error("invalid shape scale {value}: {source}")]
    #[diagnostic(
        code(stepkit::config::invalid_scale),
        help("shape scale multiplies the label font size and must be a finite, non-negative number")
    )]
    InvalidScale {
        value: f64,
        #[source]
        source: NumericError,
    },
}
