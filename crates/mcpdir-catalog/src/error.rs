//! Error types for mcpdir-catalog

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Duplicate tool id: {id}")]
    DuplicateId { id: String },

    #[error("Tool '{id}' declares an empty env map")]
    EmptyEnv { id: String },

    #[error("Tool at position {index} is missing a required field: {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("Unknown category '{value}'. Valid: all, {valid}")]
    UnknownCategory { value: String, valid: String },
}
