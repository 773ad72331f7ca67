use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordRankError {
    #[error("cannot read '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{0}' contains no words after punctuation stripping")]
    EmptyDocument(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type WrResult<T> = Result<T, WordRankError>;
