//! List commands for tools, featured starters and categories

use colored::Colorize;
use mcpdir_catalog::{Catalog, Category, CategoryFilter, Filter, ToolRecord};

use crate::error::Result;

/// Run the list command
pub fn run_list(
    catalog: &Catalog,
    query: Option<&str>,
    category: CategoryFilter,
    json: bool,
) -> Result<()> {
    let filter = Filter::new(query.unwrap_or_default(), category);
    let result = catalog.filter(&filter);
    tracing::debug!(?filter, matches = result.len(), "Filtered catalog");

    if json {
        println!("{}", serde_json::to_string_pretty(&result.to_records())?);
        return Ok(());
    }

    if result.is_empty() {
        println!("{}", "No tools found".bold());
        println!("Try adjusting your search or filters.");
        println!("Run {} to clear filters.", "mcpdir list".cyan());
        return Ok(());
    }

    for record in result.iter() {
        print_row(record);
    }
    println!();
    println!(
        "{}",
        format!("Showing {} of {} tools", result.len(), result.total()).dimmed()
    );

    Ok(())
}

/// Run the featured command
pub fn run_featured(catalog: &Catalog) -> Result<()> {
    println!("{}", "Recommended Starters".bold());
    println!();
    for record in catalog.featured() {
        print_row(record);
    }
    println!();
    println!(
        "Use {} to see how to install one.",
        "mcpdir show <id>".cyan()
    );
    Ok(())
}

/// Run the categories command
pub fn run_categories(catalog: &Catalog) -> Result<()> {
    println!("{}", "Categories".bold());
    println!();
    println!("  {:<10} {}", "All".cyan(), catalog.len());
    for category in Category::ALL {
        println!(
            "  {:<10} {}",
            category.label().cyan(),
            catalog.count_by_category(category)
        );
    }
    println!();
    println!(
        "Filter with {}.",
        "mcpdir list --category <name>".cyan()
    );
    Ok(())
}

/// One listing line: id, name, category and the verified badge.
fn print_row(record: &ToolRecord) {
    let badge = if record.vendor.is_official() {
        format!(" {}", "✓".cyan())
    } else {
        String::new()
    };
    println!(
        "  {:<24} {}{} {}",
        record.id.green(),
        record.name,
        badge,
        format!("[{}]", record.category).dimmed()
    );
    if !record.description.is_empty() {
        println!("  {:<24} {}", "", record.description.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpdir_catalog::Category;

    #[test]
    fn test_list_runs() {
        let catalog = Catalog::with_builtins();
        assert!(run_list(&catalog, None, CategoryFilter::All, false).is_ok());
    }

    #[test]
    fn test_list_empty_state_runs() {
        let catalog = Catalog::with_builtins();
        assert!(run_list(&catalog, Some("zzzz-nothing"), CategoryFilter::All, false).is_ok());
    }

    #[test]
    fn test_list_json_runs() {
        let catalog = Catalog::with_builtins();
        let category = CategoryFilter::Only(Category::Database);
        assert!(run_list(&catalog, Some("sql"), category, true).is_ok());
    }

    #[test]
    fn test_featured_and_categories_run() {
        let catalog = Catalog::with_builtins();
        assert!(run_featured(&catalog).is_ok());
        assert!(run_categories(&catalog).is_ok());
    }
}
