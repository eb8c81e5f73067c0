//! Line input for the REPL.
//!
//! [`LineEditor`] hides rustyline so the REPL can be driven by a script or a
//! mock in tests.

use std::borrow::Cow;

use lantern_foundation::{Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

/// Outcome of one read.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A line of input.
    Line(String),
    /// Ctrl+C.
    Interrupted,
    /// Ctrl+D or end of input.
    Eof,
}

/// Source of player input.
pub trait LineEditor {
    /// Reads one line after showing `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Records a line in history.
    fn add_history(&mut self, line: &str);

    /// Replaces the words offered for tab completion.
    fn set_completions(&mut self, words: Vec<String>);
}

#[derive(Helper, Completer, Hinter, Validator)]
struct LanternHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for LanternHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;33m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes the word under the cursor from a fixed list.
#[derive(Debug, Default)]
struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let prefix = line[start..pos].to_lowercase();

        let pairs = self
            .words
            .iter()
            .filter(|word| word.starts_with(&prefix))
            .map(|word| Pair {
                display: word.clone(),
                replacement: word.clone(),
            })
            .collect();
        (start, pairs)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Terminal editor with history, hints, and word completion.
pub struct RustylineEditor {
    editor: Editor<LanternHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates an editor attached to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline cannot be set up.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(500)
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(LanternHelper {
            completer: WordCompleter::default(),
            hinter: HistoryHinter::new(),
        }));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_completions(&mut self, mut words: Vec<String>) {
        words.sort_unstable();
        words.dedup();
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.words = words;
        }
    }
}
