use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to parse JSON Schema: {0}")]
    Parse(String),

    #[error("Unsupported target language: {0}")]
    UnsupportedTarget(String),

    #[error("Schema nesting exceeds {limit} levels at `{path}` (cyclic or runaway schema?)")]
    DepthExceeded { path: String, limit: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
