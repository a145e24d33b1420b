//! Interactive catalog browser
//!
//! Uses dialoguer for terminal-based selection. Every choice becomes an
//! [`Action`] dispatched to the session; the screen is redrawn from the
//! session state after each one.

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use mcpdir_browser::{Action, Clipboard, Listing, Session, SystemClipboard, ViewState};
use mcpdir_catalog::{Catalog, CategoryFilter, FilterResult};
use mcpdir_snippets::Platform;

use crate::commands::show::print_detail;
use crate::error::Result;

/// Top-level menu entries
const MAIN_MENU: &[&str] = &[
    "Open a tool",
    "Search",
    "Category",
    "Platform",
    "Clear filters",
    "Quit",
];

/// Run the browse command
pub fn run_browse(catalog: Catalog, platform: Platform) -> Result<()> {
    let mut session = Session::new(
        catalog,
        ViewState::with_platform(platform),
        SystemClipboard::new(),
    );
    browse_loop(&mut session)
}

fn browse_loop<C: Clipboard>(session: &mut Session<C>) -> Result<()> {
    loop {
        session.tick();
        println!();
        print_status(session.state(), session.catalog());

        let choice = Select::new()
            .with_prompt("What next?")
            .items(MAIN_MENU)
            .default(0)
            .interact()?;

        match MAIN_MENU[choice] {
            "Open a tool" => open_tool(session)?,
            "Search" => {
                let query: String = Input::new()
                    .with_prompt("Search")
                    .with_initial_text(session.state().filter.query.clone())
                    .allow_empty(true)
                    .interact_text()?;
                session.dispatch(Action::SetQuery(query));
            }
            "Category" => {
                let choices = CategoryFilter::choices();
                let current = choices
                    .iter()
                    .position(|c| *c == session.state().filter.category)
                    .unwrap_or(0);
                let idx = Select::new()
                    .with_prompt("Category")
                    .items(&category_items(session.catalog()))
                    .default(current)
                    .interact()?;
                session.dispatch(Action::SetCategory(choices[idx]));
            }
            "Platform" => {
                let platform = pick_platform(session.state().platform)?;
                session.dispatch(Action::SetPlatform(platform));
            }
            "Clear filters" => session.dispatch(Action::ClearFilters),
            _ => return Ok(()),
        }
    }
}

fn open_tool<C: Clipboard>(session: &mut Session<C>) -> Result<()> {
    let selected = match session.listing() {
        Listing::Empty { total } => {
            println!();
            println!("{}", "No tools found".bold());
            println!("Try adjusting your search or filters ({total} tools in the catalog).");
            None
        }
        Listing::Results(result) => {
            let idx = Select::new()
                .with_prompt(format!("Showing {} of {} tools", result.len(), result.total()))
                .items(&listing_items(&result))
                .default(0)
                .max_length(15)
                .interact_opt()?;
            idx.map(|i| result.ids()[i].to_string())
        }
    };

    match selected {
        Some(id) => {
            session.dispatch(Action::Select(id));
            detail_loop(session)
        }
        None => {
            if matches!(session.listing(), Listing::Empty { .. })
                && Confirm::new()
                    .with_prompt("Clear filters?")
                    .default(true)
                    .interact()?
            {
                session.dispatch(Action::ClearFilters);
            }
            Ok(())
        }
    }
}

fn detail_loop<C: Clipboard>(session: &mut Session<C>) -> Result<()> {
    loop {
        session.tick();
        let copy_label = {
            let Some(view) = session.detail() else {
                return Ok(());
            };
            println!();
            print_detail(&view);
            view.snippet.copy_label()
        };
        if let Some(toast) = &session.state().toast {
            println!("{} {}", "✓".green(), toast.message);
        }

        let actions = [copy_label, "Switch platform", "Back"];
        let choice = Select::new()
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                session.copy_snippet();
            }
            1 => {
                let platform = pick_platform(session.state().platform)?;
                session.dispatch(Action::SetPlatform(platform));
            }
            _ => {
                session.dispatch(Action::Dismiss);
                return Ok(());
            }
        }
    }
}

fn pick_platform(current: Platform) -> Result<Platform> {
    let names: Vec<&str> = Platform::ALL.iter().map(|p| p.display_name()).collect();
    let idx = Select::new()
        .with_prompt("Platform")
        .items(&names)
        .default(current.index())
        .interact()?;
    Ok(Platform::from_index(idx).unwrap_or(current))
}

fn print_status(state: &ViewState, catalog: &Catalog) {
    let query = if state.filter.query.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        format!("\"{}\"", state.filter.query).cyan().to_string()
    };
    println!(
        "{} {}  {} {}  {} {}  {}",
        "Search:".dimmed(),
        query,
        "Category:".dimmed(),
        state.filter.category.label().cyan(),
        "Platform:".dimmed(),
        state.platform.display_name().cyan(),
        format!("({} tools)", catalog.filter(&state.filter).len()).dimmed()
    );
}

/// Category chips with their record counts.
fn category_items(catalog: &Catalog) -> Vec<String> {
    CategoryFilter::choices()
        .into_iter()
        .map(|choice| {
            let count = match choice {
                CategoryFilter::All => catalog.len(),
                CategoryFilter::Only(category) => catalog.count_by_category(category),
            };
            format!("{} ({count})", choice.label())
        })
        .collect()
}

fn listing_items(result: &FilterResult<'_>) -> Vec<String> {
    result
        .iter()
        .map(|record| {
            let badge = if record.vendor.is_official() { " ✓" } else { "" };
            format!("{:<24} {}{}", record.id, record.name, badge)
        })
        .collect()
}
