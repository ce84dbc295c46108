//! The interactive REPL.
//!
//! Each input is either a `:command` or a JSON document holding one
//! message or an array of messages. Documents may span several lines and
//! are read until their brackets balance.

use std::io::{self, Write};
use std::path::Path;

use wxgloss_foundation::{Error, Result};

use crate::config::{OutputFormat, RuntimeConfig};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render::renderer_for;
use crate::session::Session;

/// Commands the REPL understands.
pub const COMMANDS: [&str; 6] = [":locale", ":stations", ":json", ":human", ":help", ":quit"];

const HELP: &str = "\
Paste a decoded message as JSON (one object or an array); multi-line input
is read until the brackets balance.

  :locale [TAG]   show or switch the display locale (en, zh-CN)
  :stations FILE  load station display names from a JSON file
  :json           render as JSON
  :human          render as text
  :help           show this help
  :quit           leave the REPL";

/// What evaluating one input produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print.
    Output(String),
    /// Leave the REPL.
    Quit,
}

/// Returns true when `input` has no unclosed bracket or string.
#[must_use]
pub fn is_complete(input: &str) -> bool {
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '[' | '{' if !in_string => depth += 1,
            ']' | '}' if !in_string => depth -= 1,
            _ => {}
        }
    }

    depth <= 0 && !in_string
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
    config: RuntimeConfig,
    prompt: String,
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::default(),
            config: RuntimeConfig::default(),
            prompt: "wx> ".to_string(),
            continuation_prompt: ".. ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Sets the rendering configuration.
    #[must_use]
    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.config.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            Self::print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => Self::print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };
        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Outcome::Output(text)) => {
                if !text.is_empty() {
                    println!("{}", text.trim_end());
                }
                Ok(true)
            }
            Ok(Outcome::Quit) => Ok(false),
            Err(e) => {
                Self::print_error(&e);
                Ok(true)
            }
        }
    }

    /// Reads a potentially multi-line input.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let read = if first_line {
                self.editor.read_line(&self.prompt)?
            } else {
                self.editor.read_continuation(&self.continuation_prompt)?
            };
            match read {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);
                    if is_complete(&input) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::message_format(
                        "unexpected end of input inside a JSON document",
                    ));
                }
            }
        }
    }

    /// Evaluates one input: a `:command` or a message document.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command, an unsupported locale or a
    /// malformed document.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        let trimmed = input.trim();
        if trimmed.starts_with(':') {
            return self.eval_command(trimmed);
        }

        let reports = self.session.reports_from_json(trimmed)?;
        let text = renderer_for(&self.config).render_many(&reports)?;
        Ok(Outcome::Output(text))
    }

    fn eval_command(&mut self, line: &str) -> Result<Outcome> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let argument = words.next();

        match (command, argument) {
            (":locale", None) => Ok(Outcome::Output(format!("locale: {}", self.session.locale()))),
            (":locale", Some(tag)) => {
                let locale = tag.parse()?;
                self.session.set_locale(locale)?;
                self.config.locale = locale;
                Ok(Outcome::Output(format!("locale set to {locale}")))
            }
            (":stations", Some(path)) => {
                let count = self.session.load_stations_file(Path::new(path))?;
                Ok(Outcome::Output(format!("loaded {count} station(s) from {path}")))
            }
            (":json", None) => {
                self.config.format = OutputFormat::Json;
                Ok(Outcome::Output("output: json".to_string()))
            }
            (":human", None) => {
                self.config.format = OutputFormat::Human;
                Ok(Outcome::Output("output: human".to_string()))
            }
            (":help", _) => Ok(Outcome::Output(HELP.to_string())),
            (":quit", _) => Ok(Outcome::Quit),
            _ => Err(Error::invalid_argument(format!(
                "unknown command '{line}' (try :help)"
            ))),
        }
    }

    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    fn print_banner() {
        println!("\x1b[1;36mwxgloss\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Paste a decoded message as JSON. Type :help for commands, Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}
