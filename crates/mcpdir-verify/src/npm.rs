//! npm registry package check.

use serde::Serialize;

use crate::config::VerifyConfig;
use crate::probe::LinkProbe;

/// Result of checking one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NpmCheck {
    /// No scoped package to check, or the registry could not be reached.
    Skipped,
    Valid,
    Invalid { error: String },
}

impl NpmCheck {
    pub fn error(&self) -> Option<&str> {
        match self {
            NpmCheck::Invalid { error } => Some(error),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, NpmCheck::Invalid { .. })
    }
}

/// First scoped (`@scope/name`) package among the invocation arguments.
pub fn scoped_package(args: &[String]) -> Option<&str> {
    args.iter().map(String::as_str).find(|a| a.starts_with('@'))
}

/// Check that `package` exists on the registry.
pub async fn check<P: LinkProbe + ?Sized>(
    probe: &P,
    config: &VerifyConfig,
    package: &str,
) -> NpmCheck {
    if !package.starts_with('@') {
        return NpmCheck::Skipped;
    }
    match probe.get(&config.npm_package_url(package)).await {
        Ok(resp) if resp.status == 200 => NpmCheck::Valid,
        Ok(resp) if resp.status == 404 => NpmCheck::Invalid {
            error: "Package not found on npm".into(),
        },
        Ok(resp) => NpmCheck::Invalid {
            error: format!("HTTP {}", resp.status),
        },
        Err(e) => {
            tracing::debug!(package, error = %e, "npm request failed, skipping");
            NpmCheck::Skipped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_package_picks_first_scoped_arg() {
        let args: Vec<String> = ["-y", "@scope/a", "@scope/b"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(scoped_package(&args), Some("@scope/a"));
    }

    #[test]
    fn test_scoped_package_none() {
        let args: Vec<String> = vec!["-y".into(), "mcp-server-box".into()];
        assert_eq!(scoped_package(&args), None);
    }
}
