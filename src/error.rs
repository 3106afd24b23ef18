//! Crate-level error types and recoverable-condition diagnostics.
//!
//! Framing and motion synthesis never fail hard: the conditions they
//! recover from are described by [`FramingIssue`] and [`MotionIssue`] and
//! reported through `log`. Only configuration and job-file loading return
//! [`StudioError`].

use std::fmt;

/// Errors produced by the studioframe crate.
#[derive(Debug)]
pub enum StudioError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A job description could not be parsed or serialized.
    JobParse(String),
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::JobParse(msg) => write!(f, "job parse error: {msg}"),
        }
    }
}

impl std::error::Error for StudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StudioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Conditions a framing pass recovers from locally.
#[derive(Debug, Clone, PartialEq)]
pub enum FramingIssue {
    /// No points survived exclusion filtering; the camera is left as is.
    EmptyGeometry {
        /// Collection that produced no geometry.
        collection: String,
    },
    /// The field of view is zero or invalid; a fixed distance was used.
    DegenerateProjection {
        /// Distance used in place of the solved one.
        fallback_distance: f32,
    },
    /// The refinement loop ran out of iterations.
    NonConvergent {
        /// Iterations spent before giving up.
        iterations: u32,
    },
}

impl fmt::Display for FramingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGeometry { collection } => write!(
                f,
                "no vertices found in collection '{collection}' (after \
                 exclusions); cannot frame"
            ),
            Self::DegenerateProjection { fallback_distance } => write!(
                f,
                "degenerate field of view; using fallback distance \
                 {fallback_distance}"
            ),
            Self::NonConvergent { iterations } => write!(
                f,
                "framing did not converge after {iterations} iterations; \
                 framing may be imperfect"
            ),
        }
    }
}

/// Malformed motion input that was degraded to a simpler curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotionIssue {
    /// Multi-segment mode without any segments.
    NoSegments,
    /// Random mode with zero variation points.
    NoRandomPoints,
    /// Hold-points mode without any holds.
    NoHoldPoints,
    /// Hold points whose angles were out of order, duplicated, or beyond
    /// the rotation span.
    SkippedHoldPoints {
        /// How many holds were ignored.
        count: usize,
    },
}

impl fmt::Display for MotionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSegments => {
                write!(f, "multi-segment mode has no segments; using linear")
            }
            Self::NoRandomPoints => {
                write!(f, "random mode has no variation points; using linear")
            }
            Self::NoHoldPoints => {
                write!(f, "hold-points mode has no holds; using linear")
            }
            Self::SkippedHoldPoints { count } => {
                write!(f, "ignored {count} hold point(s) out of angle order")
            }
        }
    }
}
