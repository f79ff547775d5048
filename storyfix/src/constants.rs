use regex::Regex;
use std::sync::OnceLock;

/// Name of the project-level configuration file.
pub const CONFIG_FILENAME: &str = ".storyfix.toml";

/// Stories directory used when the configuration does not name one,
/// resolved against the configuration file's directory.
pub const DEFAULT_STORIES_DIR: &str = "apps/storybook/stories";

/// Story files rewritten when neither the command line nor the configuration
/// supplies a list. Order is the report order.
pub const DEFAULT_STORY_FILES: &[&str] = &[
    "Toast.stories.tsx",
    "Menu.stories.tsx",
    "Card.stories.tsx",
    "Badge.stories.tsx",
    "Accordion.stories.tsx",
    "Table.stories.tsx",
    "Timeline.stories.tsx",
    "Stat.stories.tsx",
    "Tooltip.stories.tsx",
];

/// Regex for an empty `args` block sitting between a story's opening line
/// and its `render:` field.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_args_before_render_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"(export const \w+: Story = \{)\n  args: \{\},\n(\s+render:)")
            .expect("Invalid args-before-render regex pattern")
    })
}

/// Regex for an empty `args` block directly under a story's opening line,
/// whatever follows it.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_empty_args_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"(export const \w+: Story = \{)\n  args: \{\},")
            .expect("Invalid empty-args regex pattern")
    })
}
