//! Instructions-only rendering for hosts configured through a settings form.

use mcpdir_catalog::ToolRecord;

use crate::formats::InstructionSpec;
use crate::platform::Platform;
use crate::snippet::{Detail, Snippet};

/// The command and its arguments joined by single spaces.
pub fn command_line(record: &ToolRecord) -> String {
    std::iter::once(record.command.as_str())
        .chain(record.args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render(record: &ToolRecord, platform: Platform, spec: &InstructionSpec) -> Snippet {
    Snippet {
        steps: spec.steps.to_vec(),
        details: vec![
            Detail {
                label: "Name",
                value: record.id.clone(),
            },
            Detail {
                label: "Type",
                value: spec.transport.to_string(),
            },
        ],
        ..Snippet::new(platform, command_line(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpdir_catalog::{Category, Vendor};

    #[test]
    fn test_command_line_without_args_has_no_trailing_space() {
        let rec = ToolRecord::new("x", "X", Category::Other, Vendor::Community)
            .with_command("uvx", Vec::<String>::new());
        assert_eq!(command_line(&rec), "uvx");
    }
}
