use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("unable to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: invalid integer token {token:?}")]
    InvalidToken {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: no tokens")]
    EmptyRecord { line: usize },

    #[error("dataset is empty, average and maximum are undefined")]
    EmptyDataset,

    #[error("sample standard deviation needs at least 2 records, got {records}")]
    InsufficientData { records: usize },
}
