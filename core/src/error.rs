//! Error taxonomy shared by the reveal controller and the collection filter.

use thiserror::Error;

/// Failures raised while configuring or registering reveal targets.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RevealError {
    /// Visibility threshold outside `0.0..=1.0` (or NaN).
    #[error("visibility threshold must be within 0.0..=1.0, got {threshold}")]
    InvalidConfiguration { threshold: f64 },

    /// The host cannot observe viewport intersections. Callers fall back to
    /// revealing everything.
    #[error("viewport observation is unavailable in this environment")]
    ObservationUnsupported,
}

/// Failures raised by [`crate::filter::CollectionFilter`] and its records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Requested tag is neither `all` nor part of the collection vocabulary.
    #[error("unknown filter key '{key}'")]
    InvalidFilterKey { key: String },

    /// A record was built without any tag.
    #[error("filterable record must carry at least one tag")]
    EmptyTagSet,

    /// A record tag is blank or collides with the reserved `all` key.
    #[error("invalid record tag '{tag}'")]
    InvalidTag { tag: String },
}
