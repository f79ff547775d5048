use crate::error::StoryFixError;
use std::path::{Component, Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use storyfix::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\stories\\Card.stories.tsx")), "stories/Card.stories.tsx");
/// assert_eq!(normalize_display_path(Path::new("./stories/Menu.stories.tsx")), "stories/Menu.stories.tsx");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
///
/// # Examples
/// ```
/// use storyfix::utils::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc\n".to_owned()), "a\nb\nc\n");
/// ```
#[must_use]
pub fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

/// Joins `name` onto `root`, refusing names that could escape it.
///
/// The check is lexical: absolute names, drive prefixes and `..` components
/// are rejected. Symlinks inside `root` are followed as-is.
///
/// # Errors
///
/// Returns [`StoryFixError::OutsideRoot`] if `name` is not a plain relative path.
pub fn join_within_root(root: &Path, name: &str) -> Result<PathBuf, StoryFixError> {
    let candidate = Path::new(name);
    let escapes = candidate.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });

    if escapes || name.is_empty() {
        return Err(StoryFixError::OutsideRoot {
            path: root.join(candidate),
            root: root.to_path_buf(),
        });
    }
    Ok(root.join(candidate))
}
