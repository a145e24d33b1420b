//! Key/value block rendering.
//!
//! ```text
//! [mcp_servers.<id>]
//! command = "<command>"
//! args = ["<a1>", "<a2>"]
//! env = {
//!   KEY = "value"
//! }
//! ```
//!
//! Values are written verbatim between double quotes. The `env` block only
//! appears when the record declares variables; without it the body ends in a
//! newline after the `args` line. Env entries keep their authoring order.

use mcpdir_catalog::ToolRecord;

use crate::formats::BlockSpec;
use crate::platform::Platform;
use crate::snippet::Snippet;

/// Render the args list as `"a", "b", "c"`.
pub fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_block(record: &ToolRecord, spec: &BlockSpec) -> String {
    let mut lines = vec![
        format!("[{}.{}]", spec.table_prefix, record.id),
        format!("command = \"{}\"", record.command),
        format!("args = [{}]", quoted_list(&record.args)),
    ];

    match record.env.as_ref().filter(|env| !env.is_empty()) {
        Some(env) => {
            lines.push("env = {".to_string());
            lines.extend(env.iter().map(|(k, v)| format!("  {k} = \"{v}\"")));
            lines.push("}".to_string());
        }
        // The env slot stays as an empty final line.
        None => lines.push(String::new()),
    }

    lines.join("\n")
}

pub fn render(record: &ToolRecord, platform: Platform, spec: &BlockSpec) -> Snippet {
    Snippet {
        file_name: Some(spec.file_name),
        note: spec.note,
        ..Snippet::new(platform, render_block(record, spec))
    }
}
