pub mod api;
pub mod stdin;

pub use api::ApiResponse;
pub use stdin::{read_path_list, Delimiter};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read paths from stdin: {0}")]
    Stdin(#[from] io::Error),

    #[error("failed to read {}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("invalid path listing in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, InputError>;
