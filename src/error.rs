use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a comparison run. An incomparable vector pair is not an error;
/// it is skipped by the aggregator.
#[derive(Error, Debug)]
pub enum CompareError {
    /// An input could not be read from its location.
    #[error("Failed to read {label} input '{}': {source}", path.display())]
    InputUnavailable {
        label: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input was read but does not have the expected structure.
    #[error("Failed to parse {label} input '{}': {source}", path.display())]
    InputMalformed {
        label: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write report '{}': {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
