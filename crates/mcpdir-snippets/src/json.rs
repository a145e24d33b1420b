//! JSON-family rendering.
//!
//! Builds `{ <servers_key>: { <id>: { "command", "args", "env"? } } }` with
//! keys in insertion order and two-space indentation.

use mcpdir_catalog::ToolRecord;
use serde_json::{Map, Value, json};

use crate::formats::JsonSpec;
use crate::platform::Platform;
use crate::snippet::Snippet;

/// Convert a record into the server entry object.
///
/// `env` is only emitted when the record declares variables; it is never
/// written as `null` or `{}`.
pub fn server_entry(record: &ToolRecord) -> Value {
    let mut obj = Map::new();
    obj.insert("command".into(), json!(record.command));
    obj.insert("args".into(), json!(record.args));
    if let Some(env) = &record.env
        && !env.is_empty()
    {
        obj.insert("env".into(), json!(env));
    }
    Value::Object(obj)
}

/// Wrap a record's server entry under the platform's top-level key.
pub fn to_document(record: &ToolRecord, spec: &JsonSpec) -> Value {
    let mut servers = Map::new();
    servers.insert(record.id.clone(), server_entry(record));

    let mut doc = Map::new();
    doc.insert(spec.servers_key.into(), Value::Object(servers));
    Value::Object(doc)
}

pub fn render(record: &ToolRecord, platform: Platform, spec: &JsonSpec) -> Snippet {
    // Alternate formatting of a `Value` is serde_json's pretty printer.
    let body = format!("{:#}", to_document(record, spec));
    Snippet {
        file_name: Some(spec.file_name),
        steps: spec.steps.to_vec(),
        ..Snippet::new(platform, body)
    }
}
