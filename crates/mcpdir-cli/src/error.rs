//! Error types for mcpdir-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] mcpdir_catalog::Error),

    #[error(transparent)]
    Snippets(#[from] mcpdir_snippets::Error),

    #[error(transparent)]
    Browser(#[from] mcpdir_browser::Error),

    #[error(transparent)]
    Verify(#[from] mcpdir_verify::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// Config file exists but does not parse
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Error for an id the catalog does not contain.
    pub fn unknown_tool(id: &str) -> Self {
        Self::user(format!(
            "Unknown tool '{id}'. Run 'mcpdir list' to see available tools."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_display() {
        assert_eq!(CliError::user("test error").to_string(), "test error");
    }

    #[test]
    fn test_unknown_tool_mentions_id() {
        assert!(CliError::unknown_tool("nope").to_string().contains("'nope'"));
    }
}
