//! # Console Output
//!
//! Every provider in the sample crate reports what it "did" by writing one line to a
//! [`Console`]. The console is handed to providers at construction time, so the output
//! sink is injected exactly like any other dependency.
//!
//! ## Sinks
//!
//! | Sink | Constructor | Use Case |
//! |------|-------------|----------|
//! | **Stdout** | [`Console::stdout`] | The binary: one line per call; write errors are logged, not raised |
//! | **Recording** | [`Console::recording`] | Tests: lines are kept in a [`Transcript`] |
//!
//! ## Testing with a Transcript
//!
//! ```rust
//! use demo_framework::Console;
//!
//! let (console, transcript) = Console::recording();
//! console.line("Light turned on");
//! console.line(format!("Light brightness set to {}", 75));
//!
//! assert_eq!(
//!     transcript.lines(),
//!     vec!["Light turned on", "Light brightness set to 75"]
//! );
//! ```

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use tracing::{trace, warn};

#[derive(Clone)]
enum Sink {
    Stdout,
    Recording(Rc<RefCell<Vec<String>>>),
}

/// A cheap, cloneable handle to the output sink.
///
/// Clones share the same sink, so a test can hand one clone to a provider and keep
/// reading the lines through the [`Transcript`] returned alongside it.
#[derive(Clone)]
pub struct Console {
    sink: Sink,
}

impl Console {
    /// A console that prints every line to standard output.
    pub fn stdout() -> Self {
        Self { sink: Sink::Stdout }
    }

    /// A console that records lines in memory instead of printing them.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `Console` to inject into providers.
    /// 2. The `Transcript` used to read back what was written.
    pub fn recording() -> (Self, Transcript) {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let console = Self {
            sink: Sink::Recording(lines.clone()),
        };
        (console, Transcript { lines })
    }

    /// Writes one line.
    pub fn line(&self, text: impl Into<String>) {
        let text = text.into();
        trace!(line = %text, "Console");
        match &self.sink {
            Sink::Stdout => write_line(&mut io::stdout().lock(), &text),
            Sink::Recording(lines) => lines.borrow_mut().push(text),
        }
    }
}

// A closed stdout (`| head -1`) must not abort the run.
fn write_line(out: &mut impl Write, text: &str) {
    if let Err(e) = writeln!(out, "{text}") {
        warn!(error = %e, "Console write failed");
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

/// Read side of a recording [`Console`].
#[derive(Clone)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    /// Every line written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Returns `true` if any recorded line equals `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.lines.borrow().iter().any(|l| l == text)
    }

    /// Drops everything recorded so far and returns it.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_same_transcript() {
        let (console, transcript) = Console::recording();
        let other = console.clone();

        console.line("first");
        other.line("second");

        assert_eq!(transcript.lines(), vec!["first", "second"]);
        assert_eq!(transcript.len(), 2);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_write_line_survives_closed_pipe() {
        write_line(&mut ClosedPipe, "Car engine started");

        let mut buffer = Vec::new();
        write_line(&mut buffer, "Car engine started");
        assert_eq!(buffer, b"Car engine started\n");
    }

    #[test]
    fn test_take_empties_the_transcript() {
        let (console, transcript) = Console::recording();
        console.line("Sending SMS: hi");

        assert!(transcript.contains("Sending SMS: hi"));
        assert_eq!(transcript.take(), vec!["Sending SMS: hi"]);
        assert!(transcript.is_empty());
    }
}
