// Error types for dataset loading

use std::path::PathBuf;

/// Error type for lexicon loading failures.
///
/// Only surfaced by the fallible loaders. The facade degrades to an empty
/// lexicon instead of propagating these.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of words or records.
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}
