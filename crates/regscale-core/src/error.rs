use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegError>;

#[derive(Debug, Error)]
pub enum RegError {
    #[error("{op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("short read {}: expected {expected} bytes, got {actual}", path.display())]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("register dump must be {expected} bytes, got {actual}")]
    BadLength { expected: usize, actual: usize },

    #[error("record {index} out of range (dump holds {count} records)")]
    RecordOutOfRange { index: usize, count: usize },
}

impl RegError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RegError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}
