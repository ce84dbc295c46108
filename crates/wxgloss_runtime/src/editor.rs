//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`]; [`RustylineEditor`] is the terminal
//! implementation and tests substitute a scripted one.

use std::borrow::Cow;

use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};
use wxgloss_foundation::{Error, ErrorKind, Locale, Result};

use crate::repl::{COMMANDS, is_complete};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Read a continuation line of a multi-line document.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_continuation(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add an entry to history.
    fn add_history(&mut self, line: &str);
}

#[derive(Helper, Completer, Hinter, RLValidator)]
struct WxHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: DocumentValidator,
}

impl Highlighter for WxHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes REPL commands, locale tags after `:locale`, and file paths
/// elsewhere.
struct CommandCompleter {
    file_completer: FilenameCompleter,
}

impl CommandCompleter {
    fn candidates(line: &str, pos: usize) -> Option<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        if let Some(rest) = head.strip_prefix(":locale ") {
            let start = pos - rest.len();
            let pairs = Locale::ALL
                .iter()
                .map(|locale| locale.tag())
                .filter(|tag| tag.starts_with(rest.trim_start()))
                .map(pair)
                .collect();
            return Some((start, pairs));
        }
        if head.starts_with(':') && !head.contains(char::is_whitespace) {
            let pairs = COMMANDS
                .iter()
                .copied()
                .filter(|command| command.starts_with(head))
                .map(pair)
                .collect();
            return Some((0, pairs));
        }
        None
    }
}

fn pair(text: &str) -> Pair {
    Pair {
        display: text.to_string(),
        replacement: text.to_string(),
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        match Self::candidates(line, pos) {
            Some(found) => Ok(found),
            None => self.file_completer.complete(line, pos, ctx),
        }
    }
}

/// Keeps reading lines until the JSON document's brackets balance.
#[derive(Default)]
struct DocumentValidator;

impl Validator for DocumentValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if is_complete(ctx.input()) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<WxHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = WxHelper {
            completer: CommandCompleter {
                file_completer: FilenameCompleter::new(),
            },
            hinter: HistoryHinter::new(),
            validator: DocumentValidator,
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn read_continuation(&mut self, prompt: &str) -> Result<ReadResult> {
        self.read_line(prompt)
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(line: &str) -> Option<Vec<String>> {
        CommandCompleter::candidates(line, line.len())
            .map(|(_, pairs)| pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn completes_commands() {
        assert_eq!(replacements(":l"), Some(vec![":locale".to_string()]));
        assert_eq!(replacements(":").map(|c| c.len()), Some(COMMANDS.len()));
    }

    #[test]
    fn completes_locale_tags() {
        let (start, pairs) = CommandCompleter::candidates(":locale z", 9).unwrap();
        assert_eq!(start, 8);
        assert_eq!(pairs[0].replacement, "zh-CN");
    }

    #[test]
    fn documents_fall_through_to_files() {
        assert!(replacements("{\"raw\": \"").is_none());
    }
}
