// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera auto-framing and turntable motion synthesis for studio product
//! renders.
//!
//! Studioframe places a studio camera so arbitrary product geometry is
//! framed from a set of named viewpoints, and generates turntable rotation
//! curves with non-uniform ("scrub") speed profiles. The host 3D
//! application supplies geometry snapshots and consumes the resulting
//! camera placements and keyframe curves.
//!
//! # Key entry points
//!
//! - [`framing::Framer`] - one framing pass: bounds, projective fit, lens
//!   shift recentering
//! - [`motion::TurntableSynthesizer`] - motion spec to keyframe curve
//! - [`motion::total_frames`] - animation length without building a curve
//! - [`studio::run_still`] / [`studio::run_turntable`] - job orchestration
//!   over a [`studio::StudioHost`]
//! - [`options::Options`] - TOML-backed configuration and the named view
//!   table
//!
//! # Architecture
//!
//! Framing and synthesis are synchronous and own the camera rig they are
//! given for the duration of a call. Nothing fails hard: empty geometry,
//! degenerate projections, non-convergent fits and malformed motion input
//! are recovered locally and reported through `log`.

pub mod camera;
pub mod error;
pub mod framing;
pub mod motion;
pub mod options;
pub mod scene;
pub mod studio;
pub mod util;
