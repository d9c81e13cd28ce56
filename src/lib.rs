#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Frequency conversions and shared thresholds.
pub mod constants;
/// Shared numerical aliases and complex helpers.
pub mod math;
/// Passive components, series/parallel reduction and driven circuits.
pub mod circuits;
/// Frequency sweep configuration and post-processing helpers.
pub mod sweep;
/// Owned repository of components and circuits for front ends.
pub mod library;
/// Plain-text rendering of circuits.
pub mod report;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
