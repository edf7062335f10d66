//! # Error Types

use std::path::PathBuf;

use crate::encoding::Encoding;

/// Errors from encdetect operations.
#[derive(Debug, thiserror::Error)]
pub enum EncDetectError {
    /// A training corpus has zero length.
    #[error("empty corpus for {encoding}")]
    EmptyCorpus {
        /// The encoding the corpus was meant to train.
        encoding: Encoding,
    },

    /// Detection was asked to classify zero bytes.
    #[error("empty input")]
    EmptyInput,

    /// A corpus or input file could not be read.
    #[error("unable to read file '{}': {source}", .path.display())]
    CorpusRead {
        /// The path that failed.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for encdetect operations.
pub type EDResult<T> = core::result::Result<T, EncDetectError>;
