use crate::cli::{Cli, Commands};
use crate::commands::{run_fix, run_init, FixOptions};
use crate::config::Config;
use crate::constants::CONFIG_FILENAME;
use crate::error::StoryFixError;
use crate::output::{print_error, print_verbose};
use crate::rewriter::Rewriter;
use crate::utils::normalize_display_path;
use anyhow::Result;
use clap::Parser;

/// Runs storyfix with the given arguments, writing reports to stdout.
///
/// # Errors
///
/// Returns an error only if writing to stdout fails; rewrite failures are
/// reported on stderr and turned into exit code 1.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run storyfix with the given arguments, writing reports to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["storyfix".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    if let Some(Commands::Init) = cli_var.command {
        if let Err(e) = run_init(writer) {
            print_error(&format!("{e:#}"));
            return Ok(1);
        }
        return Ok(0);
    }

    let config = match load_config(&cli_var) {
        Ok(c) => c,
        Err(e) => {
            print_error(&e.to_string());
            return Ok(1);
        }
    };

    if cli_var.output.verbose {
        print_verbose(&format!("storyfix v{}", env!("CARGO_PKG_VERSION")));
        match &config.config_file_path {
            Some(path) => print_verbose(&format!("Config: {}", normalize_display_path(path))),
            None if !needs_config(&cli_var) => {
                print_verbose("Config: skipped, --dir and files given");
            }
            None => print_verbose("Config: none found, using defaults"),
        }
    }

    let files = if cli_var.files.is_empty() {
        config.files()
    } else {
        cli_var.files.clone()
    };
    let stories_dir = cli_var
        .dir
        .clone()
        .unwrap_or_else(|| config.stories_dir());
    let check = cli_var.write.check;
    let rewriter = Rewriter::new(stories_dir, files).dry_run(cli_var.write.dry_run || check);

    let options = FixOptions {
        json: cli_var.output.json,
        verbose: cli_var.output.verbose,
    };

    let result = run_fix(&rewriter, &options, &mut *writer);
    writer.flush()?;

    match result {
        Ok(outcomes) => {
            if check && outcomes.iter().any(|o| o.changed()) {
                return Ok(1);
            }
            Ok(0)
        }
        Err(e) => {
            print_error(&format!("{e:#}"));
            if e
                .downcast_ref::<StoryFixError>()
                .is_some_and(StoryFixError::is_not_found)
            {
                eprintln!("Hint: check --dir or `stories_dir` in {CONFIG_FILENAME}.");
            }
            Ok(1)
        }
    }
}

/// Discovery is skipped when the command line already names both the
/// directory and the files; an explicit `--config` is always loaded.
fn needs_config(cli_var: &Cli) -> bool {
    cli_var.config.is_some() || cli_var.dir.is_none() || cli_var.files.is_empty()
}

fn load_config(cli_var: &Cli) -> Result<Config, StoryFixError> {
    match &cli_var.config {
        Some(path) => Config::load_file(path),
        None if !needs_config(cli_var) => Ok(Config::default()),
        None => Config::load(),
    }
}
