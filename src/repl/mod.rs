//! Line-oriented driver loop
//!
//! A [`Session`] owns the table and turns each input line into output;
//! a [`Repl`] feeds it lines from either a line editor (interactive
//! terminal) or a plain reader (piped input), until `.exit` or end of
//! input.

mod error;
mod format;
mod session;

pub use error::{ReplError, ReplResult};
pub use format::OutputFormat;
pub use session::{Flow, Session};

use crate::command::PrepareError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "db > ";

/// Where input lines come from
pub enum LineSource {
    /// rustyline editor; it draws the prompt itself
    Editor(DefaultEditor),
    /// Plain reader; the prompt is written to the session output
    Reader(Box<dyn BufRead>),
}

impl LineSource {
    pub fn editor() -> ReplResult<Self> {
        Ok(LineSource::Editor(DefaultEditor::new()?))
    }

    pub fn reader(reader: impl BufRead + 'static) -> Self {
        LineSource::Reader(Box::new(reader))
    }

    /// Read the next line; `None` at end of input
    fn read_line<W: Write>(&mut self, out: &mut W) -> ReplResult<Option<String>> {
        match self {
            LineSource::Editor(editor) => loop {
                match editor.readline(PROMPT) {
                    Ok(line) => {
                        if !line.trim().is_empty() {
                            editor.add_history_entry(line.as_str()).ok();
                        }
                        return Ok(Some(line));
                    }
                    Err(ReadlineError::Interrupted) => {
                        println!("^C");
                    }
                    Err(ReadlineError::Eof) => return Ok(None),
                    Err(err) => return Err(err.into()),
                }
            },
            LineSource::Reader(reader) => loop {
                write!(out, "{}", PROMPT)?;
                out.flush()?;

                let mut buf = Vec::new();
                if reader.read_until(b'\n', &mut buf)? == 0 {
                    writeln!(out)?;
                    return Ok(None);
                }
                match String::from_utf8(buf) {
                    Ok(line) => return Ok(Some(line)),
                    Err(err) => {
                        // Undecodable lines are reported like any other bad input
                        let line = String::from_utf8_lossy(err.as_bytes()).into_owned();
                        log::warn!("input line is not valid UTF-8: {}", line.trim_end());
                        writeln!(out, "{}", PrepareError::SyntaxError(line))?;
                    }
                }
            },
        }
    }
}

pub struct Repl<W: Write> {
    session: Session<W>,
    source: LineSource,
}

impl<W: Write> Repl<W> {
    pub fn new(session: Session<W>, source: LineSource) -> Self {
        Self { session, source }
    }

    /// Run until `.exit` or end of input
    pub fn run(&mut self) -> ReplResult<()> {
        while let Some(line) = self.source.read_line(self.session.output_mut())? {
            let flow = self.session.handle_line(&line)?;
            self.session.output_mut().flush()?;
            if flow == Flow::Exit {
                break;
            }
        }
        log::debug!("session ended");
        Ok(())
    }

    pub fn into_session(self) -> Session<W> {
        self.session
    }
}
