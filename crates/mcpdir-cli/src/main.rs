//! MCP Directory CLI
//!
//! Browse the MCP server catalog and generate configuration snippets for
//! client platforms.

mod cli;
mod commands;
mod config;
mod error;
mod interactive;
mod logging;

use clap::Parser;
use colored::Colorize;
use mcpdir_catalog::Catalog;

use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        println!("{} MCP Directory", "mcpdir".green().bold());
        println!();
        println!("Run {} for available commands.", "mcpdir --help".cyan());
        return Ok(());
    };

    // Completions must not depend on a readable config file.
    if let Commands::Completions { shell } = command {
        return commands::run_completions(shell);
    }

    let config = Config::load(cli.config.as_deref())?;
    execute_command(command, config)
}

fn execute_command(cmd: Commands, config: Config) -> Result<()> {
    let catalog = Catalog::with_builtins();
    match cmd {
        Commands::List {
            query,
            category,
            json,
        } => commands::run_list(&catalog, query.as_deref(), category, json),
        Commands::Featured => commands::run_featured(&catalog),
        Commands::Categories => commands::run_categories(&catalog),
        Commands::Platforms => commands::run_platforms(config.default_platform),
        Commands::Show { id, platform } => {
            commands::run_show(&catalog, &id, config.platform_or_default(platform))
        }
        Commands::Snippet { id, platform, copy } => {
            commands::run_snippet(catalog, &id, config.platform_or_default(platform), copy)
        }
        Commands::Browse { platform } => {
            interactive::run_browse(catalog, config.platform_or_default(platform))
        }
        Commands::Verify {
            limit,
            delay_ms,
            json,
        } => commands::run_verify(&catalog, config.verify, limit, delay_ms, json),
        Commands::Completions { shell } => commands::run_completions(shell),
    }
}
