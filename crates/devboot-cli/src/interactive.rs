//! Interactive confirmation
//!
//! Uses dialoguer when stdin is a terminal and plain line reading
//! otherwise, so piped answers work too.

use std::io::{self, BufRead, IsTerminal, Stdout, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use dialoguer::Input;

use crate::error::Result;

/// Question asked before anything is created.
pub const CONFIRM_PROMPT: &str = "This script will create a .venv directory in the git repo \
     root directory and install tools into it for development. Continue? [y/n]";

/// One answer from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Line(String),
    /// Ctrl-C at the prompt, or end of input.
    Interrupted,
}

/// Source of answers to prompts.
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<Reply>;
}

/// Map an answer to proceed (`true`) or abort (`false`).
///
/// Case and surrounding whitespace are ignored; an empty answer means yes.
/// Anything unrecognised returns `None` so the question is asked again.
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask [`CONFIRM_PROMPT`] until the answer is recognised.
///
/// An interrupt is a "no", never an error.
pub fn confirm(prompter: &mut dyn Prompter) -> Result<bool> {
    loop {
        match prompter.ask(CONFIRM_PROMPT)? {
            Reply::Interrupted => return Ok(false),
            Reply::Line(line) => {
                if let Some(proceed) = parse_answer(&line) {
                    return Ok(proceed);
                }
                tracing::debug!(answer = %line.trim(), "Unrecognised answer, asking again");
            }
        }
    }
}

type Answer = io::Result<Reply>;

/// Read one answer; end of input counts as [`Reply::Interrupted`].
fn read_reply<B: BufRead>(input: &mut B) -> Answer {
    let mut line = String::new();
    match input.read_line(&mut line)? {
        0 => Ok(Reply::Interrupted),
        _ => Ok(Reply::Line(line)),
    }
}

/// Ends the current wait of a [`LinePrompter`].
#[derive(Debug, Clone)]
pub struct Interrupter {
    answers: Sender<Answer>,
    waiting: Arc<AtomicBool>,
}

impl Interrupter {
    /// Answer the pending prompt with [`Reply::Interrupted`].
    ///
    /// Returns `false` when no prompt is waiting; nothing is queued then.
    pub fn interrupt(&self) -> bool {
        if !self.waiting.load(Ordering::SeqCst) {
            return false;
        }
        self.answers.send(Ok(Reply::Interrupted)).is_ok()
    }
}

/// Reads answers line by line on a helper thread.
///
/// Lines are only read when a prompt asks for one. The blocking read
/// happens off the calling thread so an [`Interrupter`] can end the wait.
pub struct LinePrompter<W> {
    output: W,
    requests: Sender<()>,
    answers: Receiver<Answer>,
    interrupter: Interrupter,
    finished: bool,
}

impl<W: Write> LinePrompter<W> {
    /// `open` runs on the reader thread and yields the input to read from.
    pub fn new<F, B>(open: F, output: W) -> Self
    where
        F: FnOnce() -> B + Send + 'static,
        B: BufRead,
    {
        let (requests, pending) = mpsc::channel::<()>();
        let (answers, replies) = mpsc::channel();
        let interrupter = Interrupter {
            answers: answers.clone(),
            waiting: Arc::new(AtomicBool::new(false)),
        };

        thread::spawn(move || {
            let mut input = open();
            while pending.recv().is_ok() {
                let answer = read_reply(&mut input);
                let done = !matches!(answer, Ok(Reply::Line(_)));
                if answers.send(answer).is_err() || done {
                    break;
                }
            }
        });

        Self {
            output,
            requests,
            answers: replies,
            interrupter,
            finished: false,
        }
    }

    pub fn interrupter(&self) -> Interrupter {
        self.interrupter.clone()
    }
}

impl<W: Write> Prompter for LinePrompter<W> {
    fn ask(&mut self, prompt: &str) -> Result<Reply> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;
        if self.finished {
            writeln!(self.output)?;
            return Ok(Reply::Interrupted);
        }

        self.interrupter.waiting.store(true, Ordering::SeqCst);
        let answer = match self.requests.send(()) {
            Ok(()) => self.answers.recv().unwrap_or(Ok(Reply::Interrupted)),
            Err(_) => Ok(Reply::Interrupted),
        };
        self.interrupter.waiting.store(false, Ordering::SeqCst);

        let reply = answer.inspect_err(|_| self.finished = true)?;
        if reply == Reply::Interrupted {
            self.finished = true;
            writeln!(self.output)?;
        }
        Ok(reply)
    }
}

/// Prompts on the real terminal.
///
/// With a TTY, dialoguer reads the answer and reports Ctrl-C itself. With
/// piped input, answers come from a [`LinePrompter`] on stdin and a Ctrl-C
/// handler ends the wait. Outside a prompt the handler exits with 130.
#[derive(Default)]
pub struct TerminalPrompter {
    piped: Option<LinePrompter<Stdout>>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    fn piped(&mut self) -> Result<&mut LinePrompter<Stdout>> {
        if let Some(lines) = self.piped.take() {
            return Ok(self.piped.insert(lines));
        }

        let lines = LinePrompter::new(|| io::stdin().lock(), io::stdout());
        let interrupter = lines.interrupter();
        ctrlc::set_handler(move || {
            if !interrupter.interrupt() {
                std::process::exit(130);
            }
        })?;
        tracing::debug!("Installed Ctrl-C handler for piped prompt");
        Ok(self.piped.insert(lines))
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<Reply> {
        if !io::stdin().is_terminal() {
            return self.piped()?.ask(prompt);
        }

        match Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Ok(Reply::Line(line)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                println!();
                Ok(Reply::Interrupted)
            }
            Err(e) => Err(e.into()),
        }
    }
}
