//! Story fix command.

use crate::output::{print_dry_run_header, print_outcome, print_verbose};
use crate::rewriter::{FileOutcome, Rewriter};
use crate::utils::normalize_display_path;

use anyhow::Result;
use std::io::Write;

/// Options for the story fix command
#[derive(Debug, Default, Clone)]
pub struct FixOptions {
    /// Print a JSON array of outcomes instead of report lines
    pub json: bool,
    /// Verbose output
    pub verbose: bool,
}

/// Run the rewriter over every configured story file.
///
/// Report lines are written as each file completes, so a failure leaves the
/// lines for earlier files in place. With `json`, the array is written once
/// the run ends and holds the outcomes reached before any failure.
///
/// # Errors
///
/// Returns an error for the first file that cannot be resolved, read, or
/// written, or if writing the report fails.
pub fn run_fix<W: Write>(
    rewriter: &Rewriter,
    options: &FixOptions,
    mut writer: W,
) -> Result<Vec<FileOutcome>> {
    if options.verbose {
        print_verbose(&format!(
            "Stories directory: {}",
            normalize_display_path(rewriter.stories_dir())
        ));
        print_verbose(&format!("Target files: {}", rewriter.files().len()));
    }

    if rewriter.is_dry_run() && !options.json {
        print_dry_run_header(&mut writer)?;
    }

    let mut reached = Vec::with_capacity(rewriter.files().len());
    let result = rewriter.run_with(|outcome| -> Result<()> {
        if options.verbose {
            print_verbose(&format!(
                "{}: {} args block(s) removed",
                outcome.file, outcome.removed
            ));
        }
        if !options.json {
            print_outcome(&mut writer, outcome)?;
        }
        reached.push(outcome.clone());
        Ok(())
    });

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&reached)?)?;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const STORY: &str = "export const Default: Story = {\n  args: {},\n  render: () => <Foo />,\n};\n";

    fn setup(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_run_fix_report_lines() {
        let dir = setup(&[("Card.stories.tsx", STORY), ("Menu.stories.tsx", "// empty\n")]);
        let rewriter = Rewriter::new(
            dir.path(),
            vec!["Card.stories.tsx".to_owned(), "Menu.stories.tsx".to_owned()],
        );

        let mut buffer = Vec::new();
        let outcomes = run_fix(&rewriter, &FixOptions::default(), &mut buffer).unwrap();

        assert_eq!(outcomes.len(), 2);
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "Fixed Card.stories.tsx\nNo changes needed for Menu.stories.tsx\n"
        );
    }

    #[test]
    fn test_run_fix_dry_run() {
        let dir = setup(&[("Card.stories.tsx", STORY)]);
        let rewriter =
            Rewriter::new(dir.path(), vec!["Card.stories.tsx".to_owned()]).dry_run(true);

        let mut buffer = Vec::new();
        run_fix(&rewriter, &FixOptions::default(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("[DRY-RUN]"));
        assert!(output.ends_with("Would fix Card.stories.tsx\n"));
        let content = std::fs::read_to_string(dir.path().join("Card.stories.tsx")).unwrap();
        assert_eq!(content, STORY);
    }

    #[test]
    fn test_run_fix_json() {
        let dir = setup(&[("Card.stories.tsx", STORY)]);
        let rewriter = Rewriter::new(dir.path(), vec!["Card.stories.tsx".to_owned()]);
        let options = FixOptions {
            json: true,
            ..FixOptions::default()
        };

        let mut buffer = Vec::new();
        run_fix(&rewriter, &options, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["file"], "Card.stories.tsx");
        assert_eq!(value[0]["status"], "fixed");
        assert_eq!(value[0]["removed"], 1);
    }

    #[test]
    fn test_run_fix_keeps_lines_printed_before_failure() {
        let dir = setup(&[("A.stories.tsx", STORY)]);
        let rewriter = Rewriter::new(
            dir.path(),
            vec!["A.stories.tsx".to_owned(), "Missing.stories.tsx".to_owned()],
        );

        let mut buffer = Vec::new();
        let err = run_fix(&rewriter, &FixOptions::default(), &mut buffer).unwrap_err();

        assert!(format!("{err:#}").contains("Missing.stories.tsx"));
        assert_eq!(String::from_utf8(buffer).unwrap(), "Fixed A.stories.tsx\n");
    }

    #[test]
    fn test_run_fix_json_keeps_outcomes_before_failure() {
        let dir = setup(&[("A.stories.tsx", STORY)]);
        let rewriter = Rewriter::new(
            dir.path(),
            vec!["A.stories.tsx".to_owned(), "Missing.stories.tsx".to_owned()],
        );
        let options = FixOptions {
            json: true,
            ..FixOptions::default()
        };

        let mut buffer = Vec::new();
        assert!(run_fix(&rewriter, &options, &mut buffer).is_err());

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["file"], "A.stories.tsx");
        assert_eq!(entries[0]["status"], "fixed");
    }
}
