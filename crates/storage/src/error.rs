use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read fixture file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed fixture '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
