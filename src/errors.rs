//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`Error`] covers the failure modes of:
//! - Keyframe track construction (empty, unsorted, mismatched tables)
//! - Sampling results that fail shape validation
//! - Color parsing and timeline descriptions loaded from JSON
//! - Browser integration (WASM only)
//!
//! Per-frame sampling never surfaces these to its caller: the animator
//! logs them and keeps the last valid output. They are returned from the
//! explicit `try_*` entry points and from construction.
//!
//! ```rust,ignore
//! use scrollscape::errors::Result;
//! use scrollscape::animation::ScrollTimeline;
//!
//! fn load(json: &str) -> Result<ScrollTimeline> {
//!     ScrollTimeline::from_json(json)
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Keyframe Track Errors
    // ========================================================================
    /// A track was built without any keyframes.
    #[error("Keyframe track '{0}' has no keyframes")]
    EmptyTrack(&'static str),

    /// Input and output tables have different lengths.
    #[error("Keyframe track '{track}' has {times} inputs but {values} outputs")]
    KeyframeCountMismatch {
        /// Name of the offending track
        track: &'static str,
        /// Number of keyframe inputs
        times: usize,
        /// Number of keyframe outputs
        values: usize,
    },

    /// Keyframe inputs are not strictly increasing or not finite.
    #[error("Keyframe track '{track}' input {index} ({value}) is not strictly increasing")]
    UnsortedKeyframes {
        /// Name of the offending track
        track: &'static str,
        /// Index of the first offending input
        index: usize,
        /// The offending input value
        value: f32,
    },

    /// A scroll track does not start at 0 and end at 1.
    #[error("Keyframe track '{track}' spans [{start}, {end}], expected [0, 1]")]
    DomainMismatch {
        /// Name of the offending track
        track: &'static str,
        /// First keyframe input
        start: f32,
        /// Last keyframe input
        end: f32,
    },

    // ========================================================================
    // Sampling Errors
    // ========================================================================
    /// A sampled value has the wrong number of components.
    #[error("Sampled '{track}' has {actual} components, expected {expected}")]
    ShapeMismatch {
        /// Name of the sampled track
        track: &'static str,
        /// Expected component count
        expected: usize,
        /// Actual component count
        actual: usize,
    },

    /// A sampled value contains NaN, infinities, or out-of-gamut channels.
    #[error("Sampled '{0}' is not a valid value")]
    InvalidSample(&'static str),

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// A color string is not of the form `#rrggbb` or `#rgb`.
    #[error("Invalid color: '{0}'")]
    InvalidColor(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ========================================================================
    // Platform-Specific Errors
    // ========================================================================
    /// A DOM element the section mounts on could not be found.
    #[cfg(target_arch = "wasm32")]
    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    /// WASM-specific error.
    #[cfg(target_arch = "wasm32")]
    #[error("WASM error: {0}")]
    WasmError(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::WasmError(format!("{value:?}"))
    }
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
