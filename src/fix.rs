//! Edit commands and the batch-apply contract of the fix engine.
//!
//! Checkers never mutate strings; they only compute [`EditCommand`]s. The
//! external fix engine owns the actual mutation; [`Fix::apply`] implements
//! its contract here so the crate's own tests can exercise it: apply an
//! ordered list of non-overlapping commands to one string in a single pass.
//!
//! All positions and lengths are codepoint counts into the untrimmed
//! original target string, never byte offsets.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One non-destructive edit: at codepoint offset `position`, remove
/// `delete_count` codepoints and insert `insert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCommand {
    pub position: usize,
    pub delete_count: usize,
    pub insert: String,
}

impl EditCommand {
    /// A command that replaces `delete_count` codepoints at `position`.
    pub fn replace(position: usize, delete_count: usize, insert: impl Into<String>) -> EditCommand {
        EditCommand {
            position,
            delete_count,
            insert: insert.into(),
        }
    }

    /// A pure insertion at `position`.
    pub fn insert(position: usize, insert: impl Into<String>) -> EditCommand {
        EditCommand {
            position,
            delete_count: 0,
            insert: insert.into(),
        }
    }

    /// A pure deletion of `delete_count` codepoints at `position`.
    pub fn delete(position: usize, delete_count: usize) -> EditCommand {
        EditCommand {
            position,
            delete_count,
            insert: String::new(),
        }
    }
}

/// An ordered, non-overlapping set of edits for one target string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub commands: Vec<EditCommand>,
}

impl Fix {
    /// Build a fix, validating that the commands are ordered by ascending
    /// position and do not overlap.
    pub fn new(commands: Vec<EditCommand>) -> Result<Fix, Error> {
        let mut end = 0usize;
        let mut first = true;
        for cmd in &commands {
            if !first && cmd.position < end {
                return Err(Error::InvalidFix(format!(
                    "command at position {} overlaps the previous edit ending at {}",
                    cmd.position, end
                )));
            }
            end = cmd.position + cmd.delete_count;
            first = false;
        }
        Ok(Fix { commands })
    }

    /// Build a fix from commands in any order, sorting them first.
    pub fn from_unordered(mut commands: Vec<EditCommand>) -> Result<Fix, Error> {
        commands.sort_by_key(|c| c.position);
        Fix::new(commands)
    }

    /// Apply all commands to `target` in a single pass and return the
    /// mutated string. Offsets refer to the original string; the pass
    /// accounts for the shifts earlier edits introduce.
    pub fn apply(&self, target: &str) -> String {
        let chars: Vec<char> = target.chars().collect();
        let mut out = String::with_capacity(target.len());
        let mut cursor = 0usize;
        for cmd in &self.commands {
            let start = cmd.position.min(chars.len());
            let stop = (cmd.position + cmd.delete_count).min(chars.len());
            out.extend(&chars[cursor.min(start)..start]);
            out.push_str(&cmd.insert);
            cursor = stop;
        }
        out.extend(&chars[cursor.min(chars.len())..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_single_replace() {
        let fix = Fix::new(vec![EditCommand::replace(6, 1, "。")]).unwrap();
        assert_eq!(fix.apply("これは文です."), "これは文です。");
    }

    #[test]
    fn test_apply_insert_only() {
        let fix = Fix::new(vec![EditCommand::insert(24, "\u{202F}")]).unwrap();
        assert_eq!(
            fix.apply("Bienvenue sur notre site!"),
            "Bienvenue sur notre site\u{202F}!"
        );
    }

    #[test]
    fn test_apply_delete_only() {
        let fix = Fix::new(vec![EditCommand::delete(5, 1)]).unwrap();
        assert_eq!(fix.apply("Hello."), "Hello");
    }

    #[test]
    fn test_apply_multiple_commands_single_pass() {
        // replace both straight quotes in one pass; offsets refer to the
        // original string
        let target = "Er sagte 'Hallo'.";
        let fix = Fix::new(vec![
            EditCommand::replace(9, 1, "„"),
            EditCommand::replace(15, 1, "“"),
        ])
        .unwrap();
        assert_eq!(fix.apply(target), "Er sagte „Hallo“.");
    }

    #[test]
    fn test_apply_with_length_changing_inserts() {
        let fix = Fix::new(vec![
            EditCommand::insert(0, ">>"),
            EditCommand::replace(4, 1, "!!"),
        ])
        .unwrap();
        assert_eq!(fix.apply("abcde"), ">>abcd!!e");
    }

    #[test]
    fn test_new_rejects_overlapping_commands() {
        let result = Fix::new(vec![
            EditCommand::replace(3, 2, "x"),
            EditCommand::replace(4, 1, "y"),
        ]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("overlaps"));
    }

    #[test]
    fn test_from_unordered_sorts() {
        let fix = Fix::from_unordered(vec![
            EditCommand::replace(15, 1, "“"),
            EditCommand::replace(9, 1, "„"),
        ])
        .unwrap();
        assert_eq!(fix.commands[0].position, 9);
    }

    #[test]
    fn test_apply_codepoint_offsets() {
        // positions count codepoints, not bytes
        let fix = Fix::new(vec![EditCommand::replace(2, 1, "？")]).unwrap();
        assert_eq!(fix.apply("何で?"), "何で？");
    }
}
