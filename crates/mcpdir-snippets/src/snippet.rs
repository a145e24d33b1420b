//! Generated snippet and the top-level dispatch.

use mcpdir_catalog::ToolRecord;
use serde::Serialize;

use crate::formats::SnippetFormat;
use crate::platform::Platform;
use crate::{block, instructions, json};

/// A labelled value shown alongside instructions (e.g., `Name: github`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

/// Text a user copies into a host platform, plus how to present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub platform: Platform,

    /// Destination file. `None` for platforms configured through a form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<&'static str>,

    /// The copyable text.
    pub body: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<&'static str>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Detail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

impl Snippet {
    pub(crate) fn new(platform: Platform, body: String) -> Self {
        Self {
            platform,
            file_name: None,
            body,
            steps: Vec::new(),
            details: Vec::new(),
            note: None,
        }
    }

    /// Label for the copy action.
    pub fn copy_label(&self) -> &'static str {
        match self.platform.format() {
            SnippetFormat::Json(_) => "Copy JSON",
            SnippetFormat::KeyValueBlock(_) => "Copy TOML",
            SnippetFormat::Instructions(_) => "Copy command",
        }
    }
}

/// Generate the snippet for `record` on `platform`.
pub fn generate(record: &ToolRecord, platform: Platform) -> Snippet {
    tracing::debug!(tool = %record.id, platform = platform.slug(), "Generating snippet");
    match platform.format() {
        SnippetFormat::Json(spec) => json::render(record, platform, &spec),
        SnippetFormat::KeyValueBlock(spec) => block::render(record, platform, &spec),
        SnippetFormat::Instructions(spec) => instructions::render(record, platform, &spec),
    }
}
