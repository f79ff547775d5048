use crate::constants::CONFIG_FILENAME;

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Default configuration written by `storyfix init`
const DEFAULT_CONFIG: &str = r#"
[storyfix]
# Directory holding the story files, relative to this file
stories_dir = "apps/storybook/stories"

# Story files to rewrite, processed and reported in this order
files = [
    "Toast.stories.tsx",
    "Menu.stories.tsx",
    "Card.stories.tsx",
    "Badge.stories.tsx",
    "Accordion.stories.tsx",
    "Table.stories.tsx",
    "Timeline.stories.tsx",
    "Stat.stories.tsx",
    "Tooltip.stories.tsx",
]
"#;

/// Executes the init command in the current directory.
pub fn run_init<W: Write>(writer: &mut W) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    run_init_in(&current_dir, writer)
}

/// Executes the init command in a specific directory.
///
/// An existing configuration file is never overwritten.
pub fn run_init_in<W: Write>(root: &Path, writer: &mut W) -> Result<()> {
    let config_path = root.join(CONFIG_FILENAME);

    if config_path.exists() {
        writeln!(writer, "  • {CONFIG_FILENAME} already exists - skipping.")?;
        return Ok(());
    }

    let mut file = fs::File::create(&config_path)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    writeln!(file, "{}", DEFAULT_CONFIG.trim())?;
    writeln!(
        writer,
        "  • Created {CONFIG_FILENAME} with default configuration."
    )?;
    Ok(())
}
