use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use terminal_size::terminal_size_of;

/// The output seam of the logger.
///
/// A sink receives whole lines and terminates each with a newline.
/// Sinks shared between loggers are responsible for their own serialization.
pub trait Sink {
    /// Write one line.
    fn write_line(&self, line: &str);

    /// Whether the lines end up on an interactive terminal.
    /// Decides the colors of [`ColorTable::detect_for`](crate::ColorTable::detect_for).
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Writes lines to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink {}

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) {
        // Write failures are ignored.
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }

    fn is_terminal(&self) -> bool {
        terminal_size_of(std::io::stdout()).is_some()
    }
}

/// Writes lines to stderr.
#[derive(Debug, Default)]
pub struct StderrSink {}

impl Sink for StderrSink {
    fn write_line(&self, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn is_terminal(&self) -> bool {
        terminal_size_of(std::io::stderr()).is_some()
    }
}

/// Collects lines in memory.
///
/// Clones share the same buffer, so one clone can be handed to a [`Logger`](crate::Logger) while another reads the output.
///
/// ### Example
/// ```
/// use flaglog_logger::{ColorTable, Logger, MemorySink};
///
/// let sink = MemorySink::default();
/// let logger = Logger::new()
///     .colors(ColorTable::plain())
///     .sink(Box::new(sink.clone()));
///
/// logger.result().append("sum = ").append(6);
///
/// assert_eq!(sink.lines(), vec!["RESULT: sum = 6"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    /// The lines written so far, without their newlines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// The lines written so far, each terminated with a newline.
    pub fn contents(&self) -> String {
        self.lines
            .borrow()
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }

    /// Take the lines written so far, leaving the buffer empty.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
