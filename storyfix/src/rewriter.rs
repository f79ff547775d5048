//! The story rewriter: read each target, run the cleanup rules, write back
//! only what changed.

use crate::error::{FileOp, StoryFixError};
use crate::rules::{apply_rules, story_rules, SubstitutionRule};
use crate::utils::{join_within_root, normalize_newlines};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixStatus {
    /// Content changed and was written back.
    Fixed,
    /// Content changed but the run was a dry run; nothing written.
    WouldFix,
    /// Rules produced identical content; nothing written.
    Unchanged,
}

/// Per-file result, reported in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Target name as given in the file list.
    pub file: String,
    /// Outcome for this file.
    pub status: FixStatus,
    /// Number of `args` blocks removed (or that would be removed).
    pub removed: usize,
}

impl FileOutcome {
    /// Whether the file's content differs after the rules ran.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.status != FixStatus::Unchanged
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            FixStatus::Fixed => write!(f, "Fixed {}", self.file),
            FixStatus::WouldFix => write!(f, "Would fix {}", self.file),
            FixStatus::Unchanged => write!(f, "No changes needed for {}", self.file),
        }
    }
}

/// Applies the story cleanup rules to a fixed, ordered list of files under
/// one stories directory.
#[derive(Debug, Clone)]
pub struct Rewriter {
    stories_dir: PathBuf,
    files: Vec<String>,
    rules: Vec<SubstitutionRule>,
    dry_run: bool,
}

impl Rewriter {
    /// Create a rewriter for `files` under `stories_dir`.
    #[must_use]
    pub fn new(stories_dir: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            stories_dir: stories_dir.into(),
            files,
            rules: story_rules().to_vec(),
            dry_run: false,
        }
    }

    /// Compute outcomes without writing anything.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Directory the file names are resolved against.
    #[must_use]
    pub fn stories_dir(&self) -> &Path {
        &self.stories_dir
    }

    /// Target file names, in processing order.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Whether this rewriter leaves files untouched.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Rewrite a single target.
    ///
    /// # Errors
    ///
    /// Returns an error if the name escapes the stories directory or the file
    /// cannot be read or written.
    pub fn fix_file(&self, name: &str) -> Result<FileOutcome, StoryFixError> {
        let path = join_within_root(&self.stories_dir, name)?;
        let raw = fs::read_to_string(&path).map_err(|source| StoryFixError::FileAccess {
            op: FileOp::Read,
            path: path.clone(),
            source,
        })?;
        // Rules match `\n` only; a changed file is written back with `\n` endings.
        let content = normalize_newlines(raw);

        let substitution = apply_rules(&content, &self.rules);
        if !substitution.changed(&content) {
            return Ok(FileOutcome {
                file: name.to_owned(),
                status: FixStatus::Unchanged,
                removed: 0,
            });
        }

        let status = if self.dry_run {
            FixStatus::WouldFix
        } else {
            fs::write(&path, &substitution.content).map_err(|source| {
                StoryFixError::FileAccess {
                    op: FileOp::Write,
                    path: path.clone(),
                    source,
                }
            })?;
            FixStatus::Fixed
        };

        Ok(FileOutcome {
            file: name.to_owned(),
            status,
            removed: substitution.replaced,
        })
    }

    /// Rewrite every target in order, handing each outcome to `on_outcome`
    /// as soon as it is known.
    ///
    /// Stops at the first failing file; later files are not attempted.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Rewriter::fix_file`] or by
    /// `on_outcome`.
    pub fn run_with<F, E>(&self, mut on_outcome: F) -> Result<Vec<FileOutcome>, E>
    where
        F: FnMut(&FileOutcome) -> Result<(), E>,
        E: From<StoryFixError>,
    {
        let mut outcomes = Vec::with_capacity(self.files.len());
        for name in &self.files {
            let outcome = self.fix_file(name)?;
            on_outcome(&outcome)?;
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Rewrite every target in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Rewriter::fix_file`].
    pub fn run(&self) -> Result<Vec<FileOutcome>, StoryFixError> {
        self.run_with(|_| Ok(()))
    }
}
