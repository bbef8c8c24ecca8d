use std::fs;
use std::path::Path;

use super::types::TrainingMetadata;

#[derive(Debug)]
pub enum BaselineError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl std::fmt::Display for BaselineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaselineError::Io(e) => write!(f, "IO Error: {}", e),
            BaselineError::Serialization(e) => write!(f, "Serialization Error: {}", e),
        }
    }
}

impl std::error::Error for BaselineError {}

impl From<std::io::Error> for BaselineError {
    fn from(err: std::io::Error) -> Self {
        BaselineError::Io(err)
    }
}

impl From<serde_json::Error> for BaselineError {
    fn from(err: serde_json::Error) -> Self {
        BaselineError::Serialization(err)
    }
}

/// Load and parse the training metadata document
pub fn load_metadata(path: &Path) -> Result<TrainingMetadata, BaselineError> {
    let data = fs::read(path)?;
    let metadata: TrainingMetadata = serde_json::from_slice(&data)?;
    Ok(metadata)
}
