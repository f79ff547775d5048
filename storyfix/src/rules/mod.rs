//! Substitution rules that strip empty `args` blocks from story objects.
//!
//! Two rules run in a fixed order over the whole file text:
//!
//! 1. [`ARGS_BEFORE_RENDER`] removes `  args: {},` when the next line starts a
//!    `render:` field.
//! 2. [`EMPTY_ARGS`] removes any `  args: {},` line still sitting directly
//!    under an `export const <Name>: Story = {` line.
//!
//! Matching is purely textual and whitespace-exact.

use crate::constants::{get_args_before_render_re, get_empty_args_re};
use regex::Regex;

/// Rule name for the `args`-before-`render` substitution.
pub const ARGS_BEFORE_RENDER: &str = "args-before-render";
/// Rule name for the bare empty-`args` substitution.
pub const EMPTY_ARGS: &str = "empty-args";

/// A regex paired with the replacement template applied to each match.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionRule {
    /// Short identifier for the rule.
    pub name: &'static str,
    /// Pattern located in the text.
    pub pattern: &'static Regex,
    /// Replacement template (`${n}` refers to capture group `n`).
    pub replacement: &'static str,
}

/// Text produced by running a set of rules over a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Rewritten text.
    pub content: String,
    /// Number of matches replaced, across all rules.
    pub replaced: usize,
}

impl Substitution {
    /// Whether the rewritten text differs from `original`.
    #[must_use]
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}

impl SubstitutionRule {
    /// Replace every non-overlapping match in `source`, returning the new
    /// text and match count.
    #[must_use]
    pub fn apply(&self, source: &str) -> Substitution {
        Substitution {
            content: self
                .pattern
                .replace_all(source, self.replacement)
                .into_owned(),
            replaced: self.pattern.find_iter(source).count(),
        }
    }
}

/// The story cleanup rules, in application order.
pub fn story_rules() -> [SubstitutionRule; 2] {
    [
        SubstitutionRule {
            name: ARGS_BEFORE_RENDER,
            pattern: get_args_before_render_re(),
            replacement: "${1}\n${2}",
        },
        SubstitutionRule {
            name: EMPTY_ARGS,
            pattern: get_empty_args_re(),
            replacement: "${1}",
        },
    ]
}

/// Run every rule in `rules` in order, each on the previous rule's output.
#[must_use]
pub fn apply_rules(source: &str, rules: &[SubstitutionRule]) -> Substitution {
    rules.iter().fold(
        Substitution {
            content: source.to_owned(),
            replaced: 0,
        },
        |current, rule| {
            let next = rule.apply(&current.content);
            Substitution {
                content: next.content,
                replaced: current.replaced + next.replaced,
            }
        },
    )
}

/// Run the story cleanup rules over `source`.
#[must_use]
pub fn fix_story_source(source: &str) -> Substitution {
    apply_rules(source, &story_rules())
}
