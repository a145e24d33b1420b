//! Snippet format registry: maps each platform to the shape of its snippet.
//!
//! This is the single source of truth for what each host expects: wrapper
//! keys, file names, guidance steps, and notes.
//!
//! # Adding a platform
//!
//! 1. Add a variant to [`Platform`] (and to `Platform::ALL`).
//! 2. Add a `fn <slug>_format() -> SnippetFormat` function below.
//! 3. Add the variant to the `match` in [`snippet_format`].

use crate::platform::Platform;

/// How a platform wants a server definition presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetFormat {
    /// A JSON document: `{ <servers_key>: { <id>: { command, args, env } } }`.
    Json(JsonSpec),
    /// A `[<table_prefix>.<id>]` key/value block.
    KeyValueBlock(BlockSpec),
    /// Manual setup steps plus a single copyable command line.
    Instructions(InstructionSpec),
}

impl SnippetFormat {
    /// Destination file, if the platform reads one.
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            SnippetFormat::Json(spec) => Some(spec.file_name),
            SnippetFormat::KeyValueBlock(spec) => Some(spec.file_name),
            SnippetFormat::Instructions(_) => None,
        }
    }

    /// Short name of the format family.
    pub fn kind(&self) -> &'static str {
        match self {
            SnippetFormat::Json(_) => "JSON",
            SnippetFormat::KeyValueBlock(_) => "TOML",
            SnippetFormat::Instructions(_) => "Instructions",
        }
    }
}

/// Description of a JSON-family platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSpec {
    /// Top-level key wrapping the servers map.
    ///
    /// Most hosts use `"mcpServers"`; VSCode settings use `"mcp.servers"`.
    pub servers_key: &'static str,

    /// File the snippet belongs in.
    pub file_name: &'static str,

    /// Guidance shown before the document, if the platform is presented as a
    /// guided flow.
    pub steps: &'static [&'static str],
}

/// Description of a key/value block platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    /// Table namespace; the header is `[<table_prefix>.<id>]`.
    pub table_prefix: &'static str,

    pub file_name: &'static str,

    /// Where the block ultimately needs to be saved.
    pub note: Option<&'static str>,
}

/// Description of an instructions-only platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSpec {
    pub steps: &'static [&'static str],

    /// Transport type the user selects in the host's form.
    pub transport: &'static str,
}

/// Look up the snippet format for a platform.
pub fn snippet_format(platform: Platform) -> SnippetFormat {
    match platform {
        Platform::ClaudeDesktop => claude_desktop_format(),
        Platform::GeminiCli => gemini_cli_format(),
        Platform::CodexCli => codex_cli_format(),
        Platform::Cursor => cursor_format(),
        Platform::VsCode => vscode_format(),
    }
}

// ---------------------------------------------------------------------------
// 1. Claude Desktop
// ---------------------------------------------------------------------------

fn claude_desktop_format() -> SnippetFormat {
    SnippetFormat::Json(JsonSpec {
        servers_key: "mcpServers",
        file_name: "claude_desktop_config.json",
        steps: &[],
    })
}

// ---------------------------------------------------------------------------
// 2. Gemini CLI
// ---------------------------------------------------------------------------

// Kept as its own entry so the settings file name can diverge; the document
// shape is currently identical to Claude Desktop.
fn gemini_cli_format() -> SnippetFormat {
    SnippetFormat::Json(JsonSpec {
        servers_key: "mcpServers",
        file_name: "gemini_cli_settings.json",
        steps: &[],
    })
}

// ---------------------------------------------------------------------------
// 3. CodeX CLI
// ---------------------------------------------------------------------------

fn codex_cli_format() -> SnippetFormat {
    SnippetFormat::KeyValueBlock(BlockSpec {
        table_prefix: "mcp_servers",
        file_name: "codex_cli_config.toml",
        note: Some("CodeX CLI uses TOML format. Save this to ~/.codex/config.toml"),
    })
}

// ---------------------------------------------------------------------------
// 4. Cursor
// ---------------------------------------------------------------------------

fn cursor_format() -> SnippetFormat {
    SnippetFormat::Instructions(InstructionSpec {
        steps: &[
            "Open Settings: navigate to Cursor Settings > Features > MCP.",
            "Add New Server: click \"Add new MCP server\" and use these details:",
        ],
        transport: "stdio",
    })
}

// ---------------------------------------------------------------------------
// 5. VSCode
// ---------------------------------------------------------------------------

fn vscode_format() -> SnippetFormat {
    SnippetFormat::Json(JsonSpec {
        servers_key: "mcp.servers",
        file_name: "settings.json",
        steps: &[
            "Install MCP Extension: install the MCP extension from the VSCode marketplace.",
            "Add to Settings: add this configuration to your settings.json:",
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_platform_has_format() {
        for p in Platform::ALL {
            let _ = snippet_format(p);
        }
    }

    #[test]
    fn test_json_family_wrapper_keys() {
        let key = |p| match snippet_format(p) {
            SnippetFormat::Json(spec) => spec.servers_key,
            other => panic!("{p:?} is not JSON: {other:?}"),
        };
        assert_eq!(key(Platform::ClaudeDesktop), "mcpServers");
        assert_eq!(key(Platform::GeminiCli), "mcpServers");
        assert_eq!(key(Platform::VsCode), "mcp.servers");
    }

    #[test]
    fn test_file_names() {
        let names: Vec<_> = Platform::ALL
            .into_iter()
            .map(|p| snippet_format(p).file_name())
            .collect();
        assert_eq!(
            names,
            vec![
                Some("claude_desktop_config.json"),
                Some("gemini_cli_settings.json"),
                Some("codex_cli_config.toml"),
                None,
                Some("settings.json"),
            ]
        );
    }

    #[test]
    fn test_codex_is_block() {
        assert!(matches!(
            snippet_format(Platform::CodexCli),
            SnippetFormat::KeyValueBlock(BlockSpec {
                table_prefix: "mcp_servers",
                ..
            })
        ));
    }

    #[test]
    fn test_cursor_is_instructions() {
        assert!(matches!(
            snippet_format(Platform::Cursor),
            SnippetFormat::Instructions(_)
        ));
    }
}
