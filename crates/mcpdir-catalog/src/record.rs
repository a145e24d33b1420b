//! Catalog record types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog category, in the order categories are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Core,
    DevTools,
    Database,
    Cloud,
    #[serde(rename = "AI")]
    Ai,
    SaaS,
    Social,
    Design,
    Web3,
    Science,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 11] = [
        Category::Core,
        Category::DevTools,
        Category::Database,
        Category::Cloud,
        Category::Ai,
        Category::SaaS,
        Category::Social,
        Category::Design,
        Category::Web3,
        Category::Science,
        Category::Other,
    ];

    /// Display label (e.g., "DevTools", "AI").
    pub fn label(self) -> &'static str {
        match self {
            Category::Core => "Core",
            Category::DevTools => "DevTools",
            Category::Database => "Database",
            Category::Cloud => "Cloud",
            Category::Ai => "AI",
            Category::SaaS => "SaaS",
            Category::Social => "Social",
            Category::Design => "Design",
            Category::Web3 => "Web3",
            Category::Science => "Science",
            Category::Other => "Other",
        }
    }

    /// Look up a category by label, ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trust tier of the maintainer behind a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vendor {
    Official,
    #[serde(rename = "Verified Partner")]
    VerifiedPartner,
    Community,
}

impl Vendor {
    pub fn label(self) -> &'static str {
        match self {
            Vendor::Official => "Official",
            Vendor::VerifiedPartner => "Verified Partner",
            Vendor::Community => "Community",
        }
    }

    /// Official implementations get the verified badge.
    pub fn is_official(self) -> bool {
        self == Vendor::Official
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cataloged MCP server.
///
/// `id` doubles as the server name emitted into generated configs, so it
/// must be unique within a [`Catalog`](crate::Catalog). `args` order is
/// preserved verbatim. `env`, when present, maps variable names to
/// placeholder values in authoring order and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub vendor: Vendor,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl ToolRecord {
    /// Create a record with no description, invocation, env or homepage.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        vendor: Vendor,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            vendor,
            command: String::new(),
            args: Vec::new(),
            env: None,
            homepage: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the invocation command and its ordered arguments.
    pub fn with_command<I, S>(mut self, command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command = command.into();
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set env placeholders. An empty iterator leaves `env` unset.
    pub fn with_env<I, K, V>(mut self, env: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: IndexMap<String, String> =
            env.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.env = (!map.is_empty()).then_some(map);
        self
    }

    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }

    /// Names of the declared env variables, in authoring order.
    pub fn env_keys(&self) -> Vec<&str> {
        self.env
            .as_ref()
            .map(|env| env.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has_env(&self) -> bool {
        self.env.as_ref().is_some_and(|env| !env.is_empty())
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_label(cat.label()), Some(cat));
        }
    }

    #[test]
    fn test_category_from_label_ignores_case() {
        assert_eq!(Category::from_label("devtools"), Some(Category::DevTools));
        assert_eq!(Category::from_label("ai"), Some(Category::Ai));
        assert_eq!(Category::from_label("  SAAS "), Some(Category::SaaS));
        assert_eq!(Category::from_label("all"), None);
    }

    #[test]
    fn test_with_env_empty_is_none() {
        let rec = ToolRecord::new("x", "X", Category::Other, Vendor::Community)
            .with_env(Vec::<(String, String)>::new());
        assert!(rec.env.is_none());
        assert!(!rec.has_env());
    }

    #[test]
    fn test_env_keeps_authoring_order() {
        let rec = ToolRecord::new("x", "X", Category::Other, Vendor::Community)
            .with_env([("ZED", "1"), ("ALPHA", "2")]);
        assert_eq!(rec.env_keys(), vec!["ZED", "ALPHA"]);
    }

    #[test]
    fn test_env_order_survives_serde() {
        let json = r#"{"id":"x","name":"X","category":"Other","description":"","vendor":"Community","command":"npx","env":{"ZED":"1","ALPHA":"2"}}"#;
        let rec: ToolRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.env_keys(), vec!["ZED", "ALPHA"]);

        let back = serde_json::to_string(&rec).unwrap();
        assert!(back.contains(r#""env":{"ZED":"1","ALPHA":"2"}"#));
    }

    #[test]
    fn test_with_command_preserves_order() {
        let rec = ToolRecord::new("x", "X", Category::Other, Vendor::Community)
            .with_command("docker", ["run", "-i", "--rm", "img"]);
        assert_eq!(rec.command, "docker");
        assert_eq!(rec.args, vec!["run", "-i", "--rm", "img"]);
    }

    #[test]
    fn test_vendor_labels() {
        assert_eq!(Vendor::VerifiedPartner.to_string(), "Verified Partner");
        assert!(Vendor::Official.is_official());
        assert!(!Vendor::Community.is_official());
    }
}
