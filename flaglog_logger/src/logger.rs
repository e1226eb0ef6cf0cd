use thiserror::Error;

use crate::color::ColorTable;
use crate::model::Severity;
use crate::record::LogRecord;
use crate::sink::{Sink, StdoutSink};

/// The fatal signal of a failed assertion.
///
/// The failure has already been logged when this is returned.
/// Terminating the process is the caller's decision.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("assertion '{expression}' failed at {file}:{line}{}", quoted(.message))]
pub struct AssertionFailure {
    /// The text of the asserted expression.
    pub expression: String,
    /// The source file of the assertion.
    pub file: String,
    /// The source line of the assertion.
    pub line: u32,
    /// The optional message supplied with the assertion.
    pub message: Option<String>,
}

fn quoted(message: &Option<String>) -> String {
    match message {
        Some(message) => format!("\n\"{message}\""),
        None => String::default(),
    }
}

/// Produces [`LogRecord`]s and holds what they need to be written: the color table, the sink, and the assertion switch.
///
/// ### Example
/// ```
/// use flaglog_logger::{Color, ColorTable, Logger, MemorySink};
///
/// let mut colors = ColorTable::plain();
/// colors.insert(Color::Red, "<", ">");
/// let sink = MemorySink::default();
/// let logger = Logger::new()
///     .colors(colors)
///     .sink(Box::new(sink.clone()))
///     .assertions(false);
///
/// logger.error().append("disk full");
///
/// assert_eq!(sink.lines(), vec!["<ERROR: >disk full"]);
/// assert!(!logger.assertions_enabled());
/// ```
pub struct Logger {
    colors: ColorTable,
    // Set once colors are provided; a detected table follows the sink.
    explicit_colors: bool,
    sink: Box<dyn Sink>,
    assertions: bool,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("colors", &self.colors)
            .field("assertions", &self.assertions)
            .finish()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a logger writing to stdout, with colors detected from the terminal and assertions enabled.
    pub fn new() -> Self {
        Self {
            colors: ColorTable::detect(),
            explicit_colors: false,
            sink: Box::new(StdoutSink::default()),
            assertions: true,
        }
    }

    /// Use the provided color table, regardless of the sink.
    pub fn colors(mut self, colors: ColorTable) -> Self {
        self.colors = colors;
        self.explicit_colors = true;
        self
    }

    /// Write through the provided sink.
    /// Unless a color table was provided, colors are detected again for this sink (see [`ColorTable::detect_for`]).
    pub fn sink(mut self, sink: Box<dyn Sink>) -> Self {
        if !self.explicit_colors {
            self.colors = ColorTable::detect_for(&*sink);
        }

        self.sink = sink;
        self
    }

    /// Enable or disable the assertion helper.
    /// When disabled, assertions always pass without evaluating their condition.
    pub fn assertions(mut self, enabled: bool) -> Self {
        self.assertions = enabled;
        self
    }

    /// Whether the assertion helper is enabled.
    pub fn assertions_enabled(&self) -> bool {
        self.assertions
    }

    /// Start a record, tagged `info`.
    pub fn record(&self) -> LogRecord<'_> {
        LogRecord::new(self)
    }

    /// Start an `info` record.
    pub fn info(&self) -> LogRecord<'_> {
        self.tagged(Severity::Info)
    }

    /// Start a `warning` record.
    pub fn warning(&self) -> LogRecord<'_> {
        self.tagged(Severity::Warning)
    }

    /// Start an `error` record.
    pub fn error(&self) -> LogRecord<'_> {
        self.tagged(Severity::Error)
    }

    /// Start a `debug` record.
    pub fn debug(&self) -> LogRecord<'_> {
        self.tagged(Severity::Debug)
    }

    /// Start a `benchmark` record.
    pub fn benchmark(&self) -> LogRecord<'_> {
        self.tagged(Severity::Benchmark)
    }

    /// Start a `result` record.
    pub fn result(&self) -> LogRecord<'_> {
        self.tagged(Severity::Result)
    }

    /// Write a line as is: no label, no colors.
    pub fn write_plain(&self, line: &str) {
        self.sink.write_line(line);
    }

    /// Check an assertion.
    ///
    /// On failure, logs an `error` record naming the expression, its location, and the message, then returns the failure.
    /// Prefer the [`log_assert!`](crate::log_assert) macro, which fills in the expression and location.
    pub fn check(
        &self,
        condition: bool,
        expression: &str,
        file: &str,
        line: u32,
        message: Option<&str>,
    ) -> Result<(), AssertionFailure> {
        if !self.assertions || condition {
            return Ok(());
        }

        let failure = AssertionFailure {
            expression: expression.to_string(),
            file: file.to_string(),
            line,
            message: message.map(str::to_string),
        };
        self.error().append(failure.to_string()).end();
        Err(failure)
    }

    fn tagged(&self, severity: Severity) -> LogRecord<'_> {
        let mut record = LogRecord::new(self);
        record.tag(severity);
        record
    }

    pub(crate) fn emit(&self, severity: Severity, text: &str) {
        let (start, end) = self.colors.get(severity.color());
        self.sink
            .write_line(&format!("{start}{label}{end}{text}", label = severity.label()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use rstest::rstest;
    use serial_test::serial;

    fn logger(colors: ColorTable) -> (Logger, MemorySink) {
        let sink = MemorySink::default();
        let logger = Logger::new().colors(colors).sink(Box::new(sink.clone()));
        (logger, sink)
    }

    #[rstest]
    #[case(Severity::Info, "\x1b[1;36mINFO: \x1b[0mx")]
    #[case(Severity::Warning, "\x1b[1;34mWARNING: \x1b[0mx")]
    #[case(Severity::Error, "\x1b[1;31mERROR: \x1b[0mx")]
    #[case(Severity::Debug, "\x1b[1;30mDEBUG: \x1b[0mx")]
    #[case(Severity::Benchmark, "\x1b[1;35mBENCHMARK: \x1b[0mx")]
    #[case(Severity::Result, "\x1b[1;33mRESULT: \x1b[0mx")]
    fn emit_ansi(#[case] severity: Severity, #[case] expected: &str) {
        // Setup
        let (logger, sink) = logger(ColorTable::ansi());

        // Execute
        logger.record().tag(severity).append("x");

        // Verify
        assert_eq!(sink.contents(), format!("{expected}\n"));
    }

    struct TerminalSink {
        inner: MemorySink,
    }

    impl Sink for TerminalSink {
        fn write_line(&self, line: &str) {
            self.inner.write_line(line);
        }

        fn is_terminal(&self) -> bool {
            true
        }
    }

    #[test]
    fn sink_detects_colors() {
        // Setup
        let sink = MemorySink::default();
        let logger = Logger::new().sink(Box::new(sink.clone()));

        // Execute
        logger.error().append("x");

        // Verify
        assert_eq!(sink.lines(), vec!["ERROR: x"]);
    }

    #[test]
    #[serial]
    fn sink_detects_terminal_colors() {
        // Setup
        std::env::remove_var("NO_COLOR");
        let inner = MemorySink::default();
        let logger = Logger::new().sink(Box::new(TerminalSink {
            inner: inner.clone(),
        }));

        // Execute
        logger.error().append("x");

        // Verify
        assert_eq!(inner.lines(), vec!["\x1b[1;31mERROR: \x1b[0mx"]);
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn sink_keeps_provided_colors(#[case] colors_first: bool) {
        // Setup
        let sink = MemorySink::default();
        let logger = if colors_first {
            Logger::new()
                .colors(ColorTable::ansi())
                .sink(Box::new(sink.clone()))
        } else {
            Logger::new()
                .sink(Box::new(sink.clone()))
                .colors(ColorTable::ansi())
        };

        // Execute
        logger.warning().append("x");

        // Verify
        assert_eq!(sink.lines(), vec!["\x1b[1;34mWARNING: \x1b[0mx"]);
    }

    #[test]
    fn shorthands() {
        // Setup
        let (logger, sink) = logger(ColorTable::plain());

        // Execute
        logger.info().append(1);
        logger.warning().append(2);
        logger.error().append(3);
        logger.debug().append(4);
        logger.benchmark().append(5);
        logger.result().append(6);
        logger.write_plain("plain");

        // Verify
        assert_eq!(
            sink.lines(),
            vec![
                "INFO: 1",
                "WARNING: 2",
                "ERROR: 3",
                "DEBUG: 4",
                "BENCHMARK: 5",
                "RESULT: 6",
                "plain",
            ]
        );
    }

    #[test]
    fn check_passes() {
        // Setup
        let (logger, sink) = logger(ColorTable::plain());

        // Execute
        let result = logger.check(true, "1 < 2", "src/main.rs", 3, None);

        // Verify
        assert_eq!(result, Ok(()));
        assert!(sink.lines().is_empty());
    }

    #[rstest]
    #[case(None, "ERROR: assertion 'x > 0' failed at src/main.rs:12")]
    #[case(Some("x must be positive"), "ERROR: assertion 'x > 0' failed at src/main.rs:12\n\"x must be positive\"")]
    fn check_fails(#[case] message: Option<&str>, #[case] expected: &str) {
        // Setup
        let (logger, sink) = logger(ColorTable::plain());

        // Execute
        let failure = logger
            .check(false, "x > 0", "src/main.rs", 12, message)
            .unwrap_err();

        // Verify
        assert_eq!(failure.expression, "x > 0");
        assert_eq!(failure.line, 12);
        assert_eq!(failure.message.as_deref(), message);
        assert_eq!(sink.lines(), vec![expected]);
    }

    #[test]
    fn check_disabled() {
        // Setup
        let (logger, sink) = logger(ColorTable::plain());
        let logger = logger.assertions(false);

        // Execute
        let result = logger.check(false, "false", "src/main.rs", 1, None);

        // Verify
        assert_eq!(result, Ok(()));
        assert!(sink.lines().is_empty());
    }
}
