//! Error types for measurement and persistence.

/// Errors that can occur while fetching a commute time or appending a
/// sample.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level HTTP failure.
    #[error("distance matrix API error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response carried no route for the requested pair.
    #[error("no route found from {from} to {to}")]
    NoRoute { from: String, to: String },

    /// The route element came back with a non-OK status.
    #[error("route status: {0}")]
    RouteStatus(String),

    /// The element had no usable duration field.
    #[error("route element carried no duration")]
    MissingDuration,

    /// Filesystem I/O error while appending a sample.
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),
}
