//! # ggd-core
//!
//! Shared building blocks for the generalized Gaussian toolkit:
//! - the error taxonomy used by every crate in the workspace,
//! - serializable result types (`ShapeEstimate`, `ConfidenceInterval`),
//! - the `ContinuousDistribution` trait implemented by distribution models.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types.
pub mod error;
/// Distribution traits.
pub mod traits;
/// Shared result types.
pub mod types;

pub use error::{Error, Result};
pub use traits::ContinuousDistribution;
pub use types::{ConfidenceInterval, ShapeEstimate};

/// Crate version, shared by all workspace members.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
