//! Platforms command

use colored::Colorize;
use mcpdir_snippets::Platform;

use crate::error::Result;

/// Run the platforms command
pub fn run_platforms(default_platform: Platform) -> Result<()> {
    println!("{}", "Supported Platforms".bold());
    println!();

    for platform in Platform::ALL {
        let format = platform.format();
        let marker = if platform == default_platform { "*" } else { " " };
        println!(
            "{} {}  {:<16} {:<16} {:<13} {}",
            marker,
            platform.index(),
            platform.slug().green(),
            platform.display_name(),
            format.kind(),
            format.file_name().unwrap_or("(settings form)").dimmed()
        );
    }

    println!();
    println!(
        "{} default. Select with {}.",
        "*".bold(),
        "--platform <index|slug|name>".cyan()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platforms_runs() {
        assert!(run_platforms(Platform::default()).is_ok());
    }
}
