//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use mcpdir_catalog::CategoryFilter;
use mcpdir_snippets::Platform;
use std::path::PathBuf;

/// MCP Directory - Browse MCP servers and generate client configuration
#[derive(Parser, Debug)]
#[command(name = "mcpdir")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file
    #[arg(long, global = true, env = "MCPDIR_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List cataloged tools
    ///
    /// Examples:
    ///   mcpdir list                       # Every tool
    ///   mcpdir list --query postgres      # Name or description contains "postgres"
    ///   mcpdir list --category database   # Only the Database category
    List {
        /// Case-insensitive text to match against name and description
        #[arg(short, long)]
        query: Option<String>,

        /// Category to show ("all" or a category name)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show recommended starter tools
    Featured,

    /// List categories with tool counts
    Categories,

    /// List supported client platforms
    Platforms,

    /// Show a tool's details and install snippet
    ///
    /// Examples:
    ///   mcpdir show github
    ///   mcpdir show github --platform codex-cli
    Show {
        /// Tool id (see 'mcpdir list')
        id: String,

        /// Platform to generate the snippet for (index, slug or name)
        #[arg(short, long)]
        platform: Option<Platform>,
    },

    /// Print a tool's raw configuration snippet
    Snippet {
        /// Tool id (see 'mcpdir list')
        id: String,

        /// Platform to generate the snippet for (index, slug or name)
        #[arg(short, long)]
        platform: Option<Platform>,

        /// Also copy the snippet to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Browse the catalog interactively
    Browse {
        /// Platform tab to start on
        #[arg(short, long)]
        platform: Option<Platform>,
    },

    /// Check tool homepages and npm packages
    Verify {
        /// Maximum number of tools to check
        #[arg(long)]
        limit: Option<usize>,

        /// Pause between tools, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use mcpdir_catalog::Category;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["mcpdir"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_list_defaults() {
        let cli = Cli::parse_from(["mcpdir", "list"]);
        assert_eq!(
            cli.command,
            Some(Commands::List {
                query: None,
                category: CategoryFilter::All,
                json: false,
            })
        );
    }

    #[test]
    fn parse_list_with_filters() {
        let cli = Cli::parse_from(["mcpdir", "list", "-q", "git", "--category", "DevTools", "--json"]);
        assert_eq!(
            cli.command,
            Some(Commands::List {
                query: Some("git".into()),
                category: CategoryFilter::Only(Category::DevTools),
                json: true,
            })
        );
    }

    #[test]
    fn parse_list_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["mcpdir", "list", "--category", "games"]).is_err());
    }

    #[test]
    fn parse_show_with_platform_index() {
        let cli = Cli::parse_from(["mcpdir", "show", "github", "--platform", "2"]);
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                id: "github".into(),
                platform: Some(Platform::CodexCli),
            })
        );
    }

    #[test]
    fn parse_snippet_copy() {
        let cli = Cli::parse_from(["mcpdir", "snippet", "postgres", "-p", "vscode", "--copy"]);
        assert_eq!(
            cli.command,
            Some(Commands::Snippet {
                id: "postgres".into(),
                platform: Some(Platform::VsCode),
                copy: true,
            })
        );
    }

    #[test]
    fn parse_verify_overrides() {
        let cli = Cli::parse_from(["mcpdir", "verify", "--limit", "5", "--delay-ms", "0"]);
        assert_eq!(
            cli.command,
            Some(Commands::Verify {
                limit: Some(5),
                delay_ms: Some(0),
                json: false,
            })
        );
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mcpdir", "platforms", "-v", "--config", "/tmp/x.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["mcpdir", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}
