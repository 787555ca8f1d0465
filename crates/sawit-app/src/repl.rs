//! Interactive chat loop.

use std::io::{self, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sawit_ai::{AiClient, ChatSession, DisplayEntry, EntryKind, SendOutcome};

const HELP: &str = "commands: /reset /history /open /close /quit";
const PROMPT: &str = "you> ";

/// Where the chat loop reads its lines from.
pub trait LineSource {
    /// Next line without its newline, or `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Terminal input with line editing and in-session history.
pub struct Readline {
    editor: DefaultEditor,
}

impl Readline {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Readline {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        tracing::debug!("line history unavailable: {e}");
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e.to_string())),
        }
    }
}

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Reset,
    History,
    Open,
    Close,
    Quit,
    Unknown(&'a str),
    Message(&'a str),
}

pub fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') {
        return Input::Message(line);
    }
    match trimmed {
        "/reset" => Input::Reset,
        "/history" => Input::History,
        "/open" => Input::Open,
        "/close" => Input::Close,
        "/quit" | "/exit" => Input::Quit,
        other => Input::Unknown(other),
    }
}

pub fn write_entry<W: Write>(out: &mut W, entry: &DisplayEntry) -> io::Result<()> {
    let who = match entry.kind {
        EntryKind::User => "you",
        EntryKind::Bot => "sawit",
    };
    writeln!(out, "{who}> {}", entry.text)
}

pub fn write_display_log<W: Write>(out: &mut W, entries: &[DisplayEntry]) -> io::Result<()> {
    for entry in entries {
        write_entry(out, entry)?;
    }
    Ok(())
}

/// Run the chat loop until `/quit` or end of input.
///
/// Entering the loop opens the chat window; the user's own lines are
/// already echoed by the line source, so only bot lines are printed.
pub async fn run<L, W>(
    session: &ChatSession,
    client: &dyn AiClient,
    input: &mut L,
    out: &mut W,
) -> io::Result<()>
where
    L: LineSource,
    W: Write,
{
    session.set_open(true);
    write_display_log(out, &session.display_log())?;
    out.flush()?;

    while let Some(line) = input.read_line(PROMPT)? {
        match parse_input(&line) {
            Input::Quit => break,
            Input::Reset => {
                session.reset();
                write_display_log(out, &session.display_log())?;
            }
            Input::History => {
                for (i, turn) in session.history().iter().enumerate() {
                    let chars = turn.text.chars().count();
                    writeln!(out, "  {i:>2} {:?} ({chars} chars)", turn.role)?;
                }
            }
            Input::Open => session.set_open(true),
            Input::Close => session.set_open(false),
            Input::Unknown(cmd) => writeln!(out, "unknown command {cmd}; {HELP}")?,
            Input::Message(text) => {
                let outcome = session.send(client, text).await;
                if let SendOutcome::Failed { error, .. } = &outcome {
                    tracing::debug!("send failed: {error}");
                }
                if let Some(reply) = outcome.bot_text() {
                    write_entry(out, &DisplayEntry::bot(reply))?;
                }
            }
        }
        out.flush()?;
    }
    Ok(())
}
