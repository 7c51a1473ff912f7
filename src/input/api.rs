use super::{InputError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Project listing as served by the backend: a name plus its file paths
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiResponse {
    pub name: String,
    #[serde(default)]
    pub filepaths: Vec<String>,
}

impl ApiResponse {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
