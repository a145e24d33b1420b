//! Host platforms a snippet can target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::formats::{self, SnippetFormat};

/// Supported host platforms, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    #[default]
    ClaudeDesktop,
    GeminiCli,
    CodexCli,
    Cursor,
    #[serde(rename = "vscode")]
    VsCode,
}

impl Platform {
    /// All platforms in tab order; a platform's position is its index.
    pub const ALL: [Platform; 5] = [
        Platform::ClaudeDesktop,
        Platform::GeminiCli,
        Platform::CodexCli,
        Platform::Cursor,
        Platform::VsCode,
    ];

    /// Tab index (0-based).
    pub fn index(self) -> usize {
        match self {
            Platform::ClaudeDesktop => 0,
            Platform::GeminiCli => 1,
            Platform::CodexCli => 2,
            Platform::Cursor => 3,
            Platform::VsCode => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Platform> {
        Self::ALL.get(index).copied()
    }

    /// Machine identifier used on the command line and in config files.
    pub fn slug(self) -> &'static str {
        match self {
            Platform::ClaudeDesktop => "claude-desktop",
            Platform::GeminiCli => "gemini-cli",
            Platform::CodexCli => "codex-cli",
            Platform::Cursor => "cursor",
            Platform::VsCode => "vscode",
        }
    }

    /// Tab label.
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::ClaudeDesktop => "Claude Desktop",
            Platform::GeminiCli => "Gemini CLI",
            Platform::CodexCli => "CodeX CLI",
            Platform::Cursor => "Cursor Editor",
            Platform::VsCode => "VSCode",
        }
    }

    /// How this platform wants its snippet rendered.
    pub fn format(self) -> SnippetFormat {
        formats::snippet_format(self)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = Error;

    /// Accepts a tab index, a slug, or a display name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>()
            && let Some(platform) = Platform::from_index(index)
        {
            return Ok(platform);
        }
        Platform::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(s) || p.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPlatform {
                value: s.to_string(),
                valid: Platform::ALL
                    .iter()
                    .map(|p| p.slug())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position() {
        for (i, p) in Platform::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(Platform::from_index(i), Some(*p));
        }
        assert_eq!(Platform::from_index(5), None);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("0".parse::<Platform>().unwrap(), Platform::ClaudeDesktop);
        assert_eq!("codex-cli".parse::<Platform>().unwrap(), Platform::CodexCli);
        assert_eq!("Cursor Editor".parse::<Platform>().unwrap(), Platform::Cursor);
        assert_eq!("VSCODE".parse::<Platform>().unwrap(), Platform::VsCode);
        assert!("9".parse::<Platform>().is_err());
        assert!("emacs".parse::<Platform>().is_err());
    }

    #[test]
    fn test_serde_uses_slug() {
        for p in Platform::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.slug()));
        }
    }
}
