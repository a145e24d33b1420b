//! Verifier settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_DELAY_MS: u64 = 300;
pub const DEFAULT_LIMIT: usize = 50;
pub const DEFAULT_USER_AGENT: &str = "MCP-Verifier";
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_NPM_REGISTRY: &str = "https://registry.npmjs.org";

/// Settings for a verification run.
///
/// Every field has a default, so an empty `[verify]` table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Pause between records, in milliseconds.
    pub delay_ms: u64,
    /// Maximum number of records to check.
    pub limit: usize,
    pub user_agent: String,
    pub github_api: String,
    pub npm_registry: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            limit: DEFAULT_LIMIT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            github_api: DEFAULT_GITHUB_API.to_string(),
            npm_registry: DEFAULT_NPM_REGISTRY.to_string(),
        }
    }
}

impl VerifyConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Reject settings that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        for (field, url) in [
            ("github_api", &self.github_api),
            ("npm_registry", &self.npm_registry),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(Error::Config {
                    message: format!("{field} must be an http(s) URL, got '{url}'"),
                });
            }
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::Config {
                message: "user_agent must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Repository metadata endpoint for `owner/repo`.
    pub fn github_repo_url(&self, repo_path: &str) -> String {
        format!("{}/repos/{}", self.github_api.trim_end_matches('/'), repo_path)
    }

    /// Registry document endpoint for a package name.
    pub fn npm_package_url(&self, package: &str) -> String {
        format!("{}/{}", self.npm_registry.trim_end_matches('/'), package)
    }
}
