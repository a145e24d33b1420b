//! GitHub repository existence check.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::config::VerifyConfig;
use crate::probe::LinkProbe;

/// `owner/repo` immediately after the host; anything deeper (e.g.
/// `/tree/main/src/x`) is ignored.
static REPO_PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([^/?#]+/[^/?#]+)").unwrap());

/// Result of checking one homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GithubCheck {
    Valid {
        repo: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        full_name: Option<String>,
    },
    Invalid {
        error: String,
    },
}

impl GithubCheck {
    fn invalid(error: impl Into<String>) -> Self {
        GithubCheck::Invalid {
            error: error.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, GithubCheck::Valid { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GithubCheck::Valid { .. } => None,
            GithubCheck::Invalid { error } => Some(error),
        }
    }
}

/// Extract `owner/repo` from a GitHub URL.
pub fn repo_path(url: &str) -> Option<String> {
    REPO_PATH_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check that `homepage` names an existing GitHub repository.
pub async fn check<P: LinkProbe + ?Sized>(
    probe: &P,
    config: &VerifyConfig,
    homepage: Option<&str>,
) -> GithubCheck {
    let Some(url) = homepage.filter(|u| u.contains("github.com")) else {
        return GithubCheck::invalid("Not a GitHub URL");
    };
    let Some(repo) = repo_path(url) else {
        return GithubCheck::invalid("Invalid GitHub URL format");
    };

    match probe.get(&config.github_repo_url(&repo)).await {
        Ok(resp) if resp.status == 200 => {
            let full_name = serde_json::from_str::<serde_json::Value>(&resp.body)
                .ok()
                .and_then(|v| v.get("full_name")?.as_str().map(String::from));
            GithubCheck::Valid { repo, full_name }
        }
        Ok(resp) if resp.status == 404 => GithubCheck::invalid("Repository not found (404)"),
        Ok(resp) => GithubCheck::invalid(format!("HTTP {}", resp.status)),
        Err(e) => {
            tracing::warn!(repo = %repo, error = %e, "GitHub request failed");
            GithubCheck::invalid(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://github.com/modelcontextprotocol/servers/tree/main/src/git", Some("modelcontextprotocol/servers"))]
    #[case("https://github.com/stripe/mcp-server-stripe", Some("stripe/mcp-server-stripe"))]
    #[case("https://github.com/owner/repo?tab=readme", Some("owner/repo"))]
    #[case("https://github.com/owner", None)]
    #[case("https://gitlab.com/owner/repo", None)]
    fn test_repo_path(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(repo_path(url).as_deref(), expected);
    }
}
