use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced around the mocked API.
///
/// The listing operations themselves never fail; these cover fixture
/// loading and composing the request a real client would send.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to read fixtures from {path}: {source}")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture data: {0}")]
    FixtureParse(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
