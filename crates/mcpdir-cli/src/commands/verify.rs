//! Verify command

use colored::Colorize;
use mcpdir_catalog::Catalog;
use mcpdir_verify::{Verifier, VerifyConfig};

use crate::error::Result;

/// Run the verify command
///
/// Progress lines stream to stderr when `json` is set so that stdout holds
/// only the report.
pub fn run_verify(
    catalog: &Catalog,
    mut config: VerifyConfig,
    limit: Option<usize>,
    delay_ms: Option<u64>,
    json: bool,
) -> Result<()> {
    if let Some(limit) = limit {
        config.limit = limit;
    }
    if let Some(delay_ms) = delay_ms {
        config.delay_ms = delay_ms;
    }

    let verifier = Verifier::http(config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let targets = verifier.targets(catalog.records()).len();
    if !json {
        println!("{}", format!("Verifying {targets} tools...").bold());
        println!();
    }

    let report = runtime.block_on(verifier.run(catalog.records(), |line| {
        if json {
            eprintln!("{line}");
        } else {
            println!("{}", colorize(line));
        }
    }));

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        print!("{}", report.summary());
    }

    Ok(())
}

fn colorize(line: &str) -> String {
    let trimmed = line.trim_start();
    if trimmed.starts_with('✓') {
        line.green().to_string()
    } else if trimmed.starts_with('✗') {
        line.red().to_string()
    } else if trimmed.starts_with('⚠') {
        line.yellow().to_string()
    } else {
        line.to_string()
    }
}
