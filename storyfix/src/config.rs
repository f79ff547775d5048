use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, DEFAULT_STORIES_DIR, DEFAULT_STORY_FILES};
use crate::error::StoryFixError;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[storyfix]` section.
    pub storyfix: StoryFixConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` when running on defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields)]
/// Configuration options for the story rewriter.
pub struct StoryFixConfig {
    /// Directory holding the story files, relative to the configuration file.
    pub stories_dir: Option<PathBuf>,
    /// Story files to rewrite, in report order.
    pub files: Option<Vec<String>>,
}

impl Config {
    /// Loads configuration from the current directory or its ancestors.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be parsed.
    pub fn load() -> Result<Self, StoryFixError> {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// Falls back to [`Config::default`] when no `.storyfix.toml` exists in
    /// `path` or any of its ancestors.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, StoryFixError> {
        let mut current = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf());
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Self::load_file(&candidate);
            }
            if !current.pop() {
                break;
            }
        }

        Ok(Config::default())
    }

    /// Loads a specific configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn load_file(path: &Path) -> Result<Self, StoryFixError> {
        let content = fs::read_to_string(path).map_err(|e| StoryFixError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config = toml::from_str::<Config>(&content).map_err(|e| StoryFixError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.config_file_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Directory the story file names are joined onto.
    ///
    /// Relative `stories_dir` values resolve against the configuration file's
    /// directory; without a configuration file, against the working directory.
    #[must_use]
    pub fn stories_dir(&self) -> PathBuf {
        let dir = self
            .storyfix
            .stories_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORIES_DIR));
        if dir.is_absolute() {
            return dir;
        }
        match self.config_file_path.as_deref().and_then(Path::parent) {
            Some(parent) => parent.join(dir),
            None => dir,
        }
    }

    /// Story files to process, in order.
    #[must_use]
    pub fn files(&self) -> Vec<String> {
        self.storyfix.files.clone().unwrap_or_else(|| {
            DEFAULT_STORY_FILES
                .iter()
                .map(|&name| name.to_owned())
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config() {
        let config = Config::default();
        assert_eq!(config.stories_dir(), PathBuf::from(DEFAULT_STORIES_DIR));
        let files = config.files();
        assert_eq!(files.len(), 9);
        assert_eq!(files[0], "Toast.stories.tsx");
        assert_eq!(files[8], "Tooltip.stories.tsx");
    }

    #[test]
    fn test_load_from_path_no_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path()).unwrap();
        assert!(config.config_file_path.is_none());
        assert!(config.storyfix.files.is_none());
    }

    #[test]
    fn test_load_from_path_storyfix_toml() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(
            file,
            r#"[storyfix]
stories_dir = "src/stories"
files = ["Card.stories.tsx", "Menu.stories.tsx"]
"#
        )
        .unwrap();

        let config = Config::load_from_path(dir.path()).unwrap();
        assert_eq!(config.files(), vec!["Card.stories.tsx", "Menu.stories.tsx"]);
        assert_eq!(
            config.stories_dir(),
            dir.path()
                .canonicalize()
                .unwrap()
                .join("src/stories")
        );
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("apps").join("storybook");
        std::fs::create_dir_all(&nested).unwrap();

        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(
            file,
            r#"[storyfix]
files = ["Stat.stories.tsx"]
"#
        )
        .unwrap();

        let config = Config::load_from_path(&nested).unwrap();
        assert_eq!(config.files(), vec!["Stat.stories.tsx"]);
        // stories_dir falls back to the default, anchored at the config file
        assert!(config.stories_dir().ends_with(DEFAULT_STORIES_DIR));
        assert!(config.stories_dir().is_absolute());
    }

    #[test]
    fn test_absolute_stories_dir_kept() {
        let dir = TempDir::new().unwrap();
        let stories = dir.path().join("elsewhere");
        let content = format!(
            "[storyfix]\nstories_dir = {}\n",
            toml::Value::String(stories.to_string_lossy().into_owned())
        );
        let config_path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&config_path, content).unwrap();

        let config = Config::load_file(&config_path).unwrap();
        assert_eq!(config.stories_dir(), stories);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "[storyfix]\nfiles = 3\n").unwrap();

        let err = Config::load_from_path(dir.path()).unwrap_err();
        assert!(matches!(err, StoryFixError::Config { .. }));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[storyfix]\nstory_dir = \"x\"\n").unwrap();

        assert!(Config::load_file(&path).is_err());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.files().len(), 9);
        assert_eq!(config.stories_dir(), dir.path().join(DEFAULT_STORIES_DIR));
    }
}
