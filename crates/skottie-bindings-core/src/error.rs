//! Error types for the binding layer.

use serde::{Deserialize, Serialize};

/// Errors surfaced by source resolution, handle construction, and
/// registry dispatch. The installer itself defines no errors of its own;
/// registration failures stay in the host runtime's error type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BindingError {
    /// The ctor argument was not a recognized source shape.
    #[error("invalid animation source: {reason}")]
    InvalidSource { reason: String },

    /// The platform context could not produce bytes for a URI source.
    #[error("failed to fetch animation source {uri}: {reason}")]
    SourceFetch { uri: String, reason: String },

    /// The animation engine rejected the source bytes.
    #[error("backend could not build animation: {reason}")]
    Backend { reason: String },

    /// Property dispatch addressed a handle that is not registered.
    #[error("no live handle with id {id}")]
    HandleNotFound { id: u32 },
}
