//! Error types for mcpdir-snippets

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown platform '{value}'. Valid: {valid}")]
    UnknownPlatform { value: String, valid: String },
}
