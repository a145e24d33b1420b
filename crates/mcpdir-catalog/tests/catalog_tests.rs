//! Tests for the built-in catalog and filtering over it.

use mcpdir_catalog::{BUILTIN_COUNT, Catalog, Category, CategoryFilter, Filter, Vendor};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn builtin_catalog_has_all_records() {
    let catalog = Catalog::with_builtins();
    assert_eq!(catalog.len(), BUILTIN_COUNT);
    assert!(catalog.contains("filesystem"));
    assert!(!catalog.contains("does-not-exist"));
}

#[test]
fn builtin_catalog_passes_validation() {
    let records = Catalog::with_builtins().records().to_vec();
    let validated = Catalog::from_records(records).expect("built-in data must validate");
    assert_eq!(validated.len(), BUILTIN_COUNT);
}

#[test]
fn filesystem_record_matches_source_data() {
    let catalog = Catalog::with_builtins();
    let fs = catalog.get("filesystem").unwrap();
    assert_eq!(fs.name, "Filesystem");
    assert_eq!(fs.category, Category::Core);
    assert_eq!(fs.vendor, Vendor::Official);
    assert_eq!(fs.command, "npx");
    assert_eq!(
        fs.args,
        vec![
            "-y",
            "@modelcontextprotocol/server-filesystem",
            "/path/to/allowed/dir"
        ]
    );
    assert!(fs.env.is_none());
}

#[test]
fn github_record_declares_token_placeholder() {
    let catalog = Catalog::with_builtins();
    let gh = catalog.get("github").unwrap();
    assert_eq!(gh.env_keys(), vec!["GITHUB_PERSONAL_ACCESS_TOKEN"]);
}

#[test]
fn featured_starters_in_order() {
    let catalog = Catalog::with_builtins();
    let ids: Vec<_> = catalog.featured().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["filesystem", "github", "postgres", "brave-search"]);
}

#[test]
fn category_counts_sum_to_total() {
    let catalog = Catalog::with_builtins();
    let sum: usize = Category::ALL
        .iter()
        .map(|c| catalog.count_by_category(*c))
        .sum();
    assert_eq!(sum, catalog.len());
}

#[rstest]
#[case("", CategoryFilter::All, BUILTIN_COUNT)]
#[case("", CategoryFilter::Only(Category::Core), 5)]
#[case("", CategoryFilter::Only(Category::SaaS), 21)]
#[case("", CategoryFilter::Only(Category::Other), 2)]
fn filter_counts(#[case] query: &str, #[case] category: CategoryFilter, #[case] expected: usize) {
    let catalog = Catalog::with_builtins();
    let result = catalog.filter(&Filter::new(query, category));
    assert_eq!(result.len(), expected);
    assert_eq!(result.total(), BUILTIN_COUNT);
}

#[test]
fn filter_by_query_matches_name_or_description() {
    let catalog = Catalog::with_builtins();
    let result = catalog.filter(&Filter::new("POSTGRES", CategoryFilter::All));
    assert!(result.ids().contains(&"postgres"));
    for rec in result.iter() {
        let hay = format!("{} {}", rec.name, rec.description).to_lowercase();
        assert!(hay.contains("postgres"), "{} should not match", rec.id);
    }
}

#[test]
fn filter_preserves_catalog_order() {
    let catalog = Catalog::with_builtins();
    let result = catalog.filter(&Filter::new("", CategoryFilter::Only(Category::Core)));
    let expected: Vec<_> = catalog
        .iter()
        .filter(|r| r.category == Category::Core)
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(result.ids(), expected);
}

#[test]
fn empty_result_then_reset_restores_full_list() {
    let catalog = Catalog::with_builtins();
    let mut filter = Filter::new("no tool has this text xyzzy", CategoryFilter::Only(Category::Web3));
    assert!(catalog.filter(&filter).is_empty());

    filter.reset();
    let result = catalog.filter(&filter);
    assert_eq!(result.len(), catalog.len());
    assert_eq!(result.ids(), catalog.iter().map(|r| r.id.as_str()).collect::<Vec<_>>());
}

#[test]
fn records_serialize_with_display_labels() {
    let catalog = Catalog::with_builtins();
    let value = serde_json::to_value(catalog.get("brave-search").unwrap()).unwrap();
    assert_eq!(value["category"], "AI");
    assert_eq!(value["vendor"], "Community");
    assert!(value.get("env").is_some());

    let fs = serde_json::to_value(catalog.get("filesystem").unwrap()).unwrap();
    assert!(fs.get("env").is_none());
}
