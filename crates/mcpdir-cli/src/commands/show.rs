//! Show and snippet commands

use colored::Colorize;
use mcpdir_browser::{
    COPIED_MESSAGE, DetailView, NO_ENV_MESSAGE, Session, SystemClipboard, ViewState,
};
use mcpdir_catalog::Catalog;
use mcpdir_snippets::{Platform, generate};
use std::time::Duration;

use crate::error::{CliError, Result};

/// How long `snippet --copy` keeps serving the clipboard on Linux.
pub const CLIPBOARD_HOLD: Duration = Duration::from_secs(10);

/// Run the show command
pub fn run_show(catalog: &Catalog, id: &str, platform: Platform) -> Result<()> {
    let record = catalog.get(id).ok_or_else(|| CliError::unknown_tool(id))?;
    print_detail(&DetailView::new(record, platform));
    Ok(())
}

/// Run the snippet command
///
/// The body goes to stdout on its own; the copy acknowledgment goes to
/// stderr so the output can be piped.
pub fn run_snippet(catalog: Catalog, id: &str, platform: Platform, copy: bool) -> Result<()> {
    if !copy {
        let record = catalog.get(id).ok_or_else(|| CliError::unknown_tool(id))?;
        print_body(&generate(record, platform).body);
        return Ok(());
    }

    let mut session = Session::new(
        catalog,
        ViewState::with_platform(platform),
        SystemClipboard::holding(CLIPBOARD_HOLD),
    );
    session.open(id).map_err(|_| CliError::unknown_tool(id))?;
    if let Some(view) = session.detail() {
        print_body(&view.snippet.body);
    }
    if session.copy_snippet() {
        eprintln!("{} {}", "✓".green(), COPIED_MESSAGE);
    }
    Ok(())
}

/// Write a snippet body exactly, adding a final newline only if it lacks one.
fn print_body(body: &str) {
    if body.ends_with('\n') {
        print!("{body}");
    } else {
        println!("{body}");
    }
}

/// Print metadata, the platform snippet and the env variables.
pub fn print_detail(view: &DetailView<'_>) {
    let record = view.record;

    let badge = if view.is_verified() {
        format!(" {}", "✓ verified".cyan())
    } else {
        String::new()
    };
    println!("{}{}", record.name.bold(), badge);
    println!(
        "{} {}  {} {}  {} {}",
        "id:".dimmed(),
        record.id.green(),
        "category:".dimmed(),
        record.category,
        "vendor:".dimmed(),
        record.vendor.label()
    );
    if !record.description.is_empty() {
        println!("{}", record.description);
    }
    println!();

    let snippet = &view.snippet;
    println!("{}", view.heading().bold());
    if let Some(file) = snippet.file_name {
        println!("{} {}", "File:".dimmed(), file);
    }
    for (i, step) in snippet.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
    print_body(&snippet.body);
    for detail in &snippet.details {
        println!("  {} {}", format!("{}:", detail.label).dimmed(), detail.value);
    }
    if let Some(note) = snippet.note {
        println!();
        println!("{} {}", "Note:".yellow(), note);
    }
    println!();

    println!("{}", "Configuration Variables".bold());
    if view.env.is_empty() {
        println!("  {}", NO_ENV_MESSAGE.dimmed());
    } else {
        for row in &view.env {
            println!("  {} = {}", row.name.cyan(), row.placeholder);
        }
    }

    if let Some(homepage) = &record.homepage {
        println!();
        println!("{} {}", "Homepage:".dimmed(), homepage);
    }
    println!();
    println!(
        "{} {}",
        snippet.copy_label().dimmed(),
        format!("mcpdir snippet {} --platform {} --copy", record.id, view.platform.slug()).cyan()
    );
}
