//! Detail view for a selected record.

use mcpdir_catalog::ToolRecord;
use mcpdir_snippets::{Platform, Snippet, generate};

/// Value shown next to every env variable name. The browser never accepts
/// or stores real secrets.
pub const ENV_PLACEHOLDER: &str = "YOUR_KEY_HERE";

pub const NO_ENV_MESSAGE: &str = "No API keys required for this tool.";

/// One row of the configuration-variables section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarRow<'a> {
    pub name: &'a str,
    pub placeholder: &'static str,
}

/// Metadata, snippet, and env rows for one record on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub record: &'a ToolRecord,
    pub platform: Platform,
    pub snippet: Snippet,
    pub env: Vec<EnvVarRow<'a>>,
}

impl<'a> DetailView<'a> {
    pub fn new(record: &'a ToolRecord, platform: Platform) -> Self {
        let env = record
            .env_keys()
            .into_iter()
            .map(|name| EnvVarRow {
                name,
                placeholder: ENV_PLACEHOLDER,
            })
            .collect();
        Self {
            record,
            platform,
            snippet: generate(record, platform),
            env,
        }
    }

    /// Banner line, e.g. "Installing for Cursor Editor".
    pub fn heading(&self) -> String {
        format!("Installing for {}", self.platform)
    }

    pub fn is_verified(&self) -> bool {
        self.record.vendor.is_official()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpdir_catalog::{Category, Vendor};

    #[test]
    fn test_env_rows_use_placeholder() {
        let rec = ToolRecord::new("x", "X", Category::Other, Vendor::Community)
            .with_command("npx", ["x"])
            .with_env([("API_KEY", "sk-real-looking")]);
        let view = DetailView::new(&rec, Platform::ClaudeDesktop);
        assert_eq!(
            view.env,
            vec![EnvVarRow {
                name: "API_KEY",
                placeholder: ENV_PLACEHOLDER
            }]
        );
    }

    #[test]
    fn test_heading() {
        let rec = ToolRecord::new("x", "X", Category::Other, Vendor::Official)
            .with_command("npx", ["x"]);
        let view = DetailView::new(&rec, Platform::Cursor);
        assert_eq!(view.heading(), "Installing for Cursor Editor");
        assert!(view.is_verified());
    }
}
