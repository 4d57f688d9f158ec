use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Data | Category::Syntax | Category::Eof => {
                EngineError::Deserialization(err.to_string())
            }
            Category::Io => EngineError::Serialization(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
