use std::path::PathBuf;
use thiserror::Error;

/// Failures the analysis pipeline can surface.
///
/// There is no partial-success mode: the first error aborts the whole run
/// and propagates to the caller (a 500 at the HTTP boundary). Nothing is
/// retried. `GraphWrite` is kept distinct from `Extraction` because the
/// graph was already computed when persistence fails.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("failed to traverse {path}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {path}: {source}")]
    Extraction {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode graph as JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write graph to {path}: {source}")]
    GraphWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
