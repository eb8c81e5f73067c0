//! The interactive loop.

use std::io::{self, BufRead, Stdout, Write};

use lantern_foundation::{EntityId, Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// What the REPL should do after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads commands, runs them for one actor, prints the results.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    editor: E,
    out: W,
    session: Session,
    actor: EntityId,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor, Stdout> {
    /// Creates a REPL on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialise.
    pub fn new(session: Session, actor: EntityId) -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?, session, actor))
    }
}

impl<E: LineEditor> Repl<E, Stdout> {
    /// Creates a REPL reading from `editor` and printing to stdout.
    pub fn with_editor(editor: E, session: Session, actor: EntityId) -> Self {
        Self {
            editor,
            out: io::stdout(),
            session,
            actor,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Sends output somewhere other than stdout.
    pub fn with_output<W2: Write>(self, out: W2) -> Repl<E, W2> {
        Repl {
            editor: self.editor,
            out,
            session: self.session,
            actor: self.actor,
            show_banner: self.show_banner,
            prompt: self.prompt,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The session, mutably.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// The output sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if input or output fails.
    pub fn run(&mut self) -> Result<()> {
        let words = self
            .session
            .dispatcher()
            .vocabulary()
            .words_under("")
            .map(str::to_string)
            .collect();
        self.editor.set_completions(words);

        if self.show_banner {
            self.print_banner()?;
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);
            if self.eval_print(&line)? == Flow::Quit {
                break;
            }
        }

        self.write_line("Goodbye!")
    }

    /// Runs every line of a script, echoing each after the prompt.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read or output fails.
    pub fn run_batch(&mut self, script: impl BufRead) -> Result<()> {
        for line in script.lines() {
            let line = line.map_err(|e| Error::internal(e.to_string()))?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let echo = format!("{}{trimmed}", self.prompt);
            self.write_line(&echo)?;
            if self.eval_print(trimmed)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Runs one line and returns what the player would see.
    pub fn eval(&mut self, line: &str) -> Vec<String> {
        match line.trim().to_lowercase().as_str() {
            "help" | "?" => self.help(),
            _ => self.session.submit(self.actor, line),
        }
    }

    fn eval_print(&mut self, line: &str) -> Result<Flow> {
        if matches!(line.trim().to_lowercase().as_str(), "quit" | "exit" | "q") {
            return Ok(Flow::Quit);
        }
        for text in self.eval(line) {
            self.write_line(&text)?;
        }
        Ok(Flow::Continue)
    }

    fn help(&self) -> Vec<String> {
        let mut lines = vec!["You can try:".to_string()];
        lines.extend(
            self.session
                .dispatcher()
                .actions()
                .iter()
                .map(|action| format!("  {}", action.signature())),
        );
        lines.push("  quit".to_string());
        lines
    }

    fn print_banner(&mut self) -> Result<()> {
        let version = env!("CARGO_PKG_VERSION");
        self.write_line(&format!("Lantern {version}"))?;
        self.write_line("Type \"help\" for a list of commands, \"quit\" to leave.")?;
        self.write_line("")?;
        for line in self.session.submit(self.actor, "look") {
            self.write_line(&line)?;
        }
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").map_err(|e| Error::internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use lantern_parser::stdlib;

    struct MockEditor {
        inputs: Vec<String>,
        index: usize,
        history: Vec<String>,
        completions: usize,
    }

    impl MockEditor {
        fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| (*s).to_string()).collect(),
                index: 0,
                history: Vec::new(),
                completions: 0,
            }
        }
    }

    impl LineEditor for MockEditor {
        fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
            let Some(line) = self.inputs.get(self.index) else {
                return Ok(ReadResult::Eof);
            };
            self.index += 1;
            if line == "^C" {
                return Ok(ReadResult::Interrupted);
            }
            Ok(ReadResult::Line(line.clone()))
        }

        fn add_history(&mut self, line: &str) {
            self.history.push(line.to_string());
        }

        fn set_completions(&mut self, words: Vec<String>) {
            self.completions = words.len();
        }
    }

    fn repl(inputs: &[&str]) -> Repl<MockEditor, Vec<u8>> {
        let demo = demo::build(0).unwrap();
        let session = Session::new(demo.world, stdlib::dispatcher().unwrap());
        Repl::with_editor(MockEditor::new(inputs), session, demo.player)
            .without_banner()
            .with_output(Vec::new())
    }

    fn transcript(repl: &Repl<MockEditor, Vec<u8>>) -> String {
        String::from_utf8_lossy(repl.output()).into_owned()
    }

    #[test]
    fn runs_until_eof() {
        let mut repl = repl(&["take lamp", "", "^C", "inventory"]);
        repl.run().unwrap();
        let text = transcript(&repl);
        assert!(text.contains("Taken."), "{text}");
        assert!(text.contains("lamp"), "{text}");
        assert!(text.ends_with("Goodbye!\n"));
        assert_eq!(repl.editor.history, ["take lamp", "inventory"]);
        assert!(repl.editor.completions > 0);
    }

    #[test]
    fn quit_stops_early() {
        let mut repl = repl(&["quit", "take lamp"]);
        repl.run().unwrap();
        assert!(!transcript(&repl).contains("Taken."));
    }

    #[test]
    fn help_lists_signatures() {
        let mut repl = repl(&[]);
        let lines = repl.eval("help");
        assert!(lines.iter().any(|l| l.contains("hit <creature> with <weapon>")));
    }

    #[test]
    fn batch_echoes_and_skips_comments() {
        let mut repl = repl(&[]).with_prompt("$ ");
        let script = "# setup\nopen box\n\ntake coin\n";
        repl.run_batch(script.as_bytes()).unwrap();
        let text = transcript(&repl);
        assert!(text.starts_with("$ open box\n"), "{text}");
        assert!(text.contains("$ take coin\n"));
        assert!(!text.contains("setup"));
    }

    #[test]
    fn banner_describes_the_room() {
        let demo = demo::build(0).unwrap();
        let session = Session::new(demo.world, stdlib::dispatcher().unwrap());
        let mut repl = Repl::with_editor(MockEditor::new(&[]), session, demo.player)
            .with_output(Vec::new());
        repl.run().unwrap();
        let text = transcript(&repl);
        assert!(text.starts_with("Lantern "));
        assert!(text.contains("cellar"), "{text}");
    }
}
