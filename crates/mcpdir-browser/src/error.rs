//! Error types for mcpdir-browser

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown tool '{id}'")]
    UnknownTool { id: String },
}
