use crate::logger::Logger;
use crate::model::Severity;
use crate::value::Loggable;

/// One log line under construction.
///
/// Values are rendered as they are appended.
/// The line is written to the logger's sink exactly once: at the first [`LogRecord::end`], or when the record is dropped.
///
/// ### Example
/// ```
/// use flaglog_logger::{ColorTable, Logger, MemorySink, Severity};
///
/// let sink = MemorySink::default();
/// let logger = Logger::new()
///     .colors(ColorTable::plain())
///     .sink(Box::new(sink.clone()));
///
/// logger
///     .record()
///     .tag(Severity::Warning)
///     .append("disk at ")
///     .append(93)
///     .append("%")
///     .end();
///
/// {
///     let mut record = logger.debug();
///     record.append(vec![1, 2, 3]);
///     // Written here, when the record goes out of scope.
/// }
///
/// assert_eq!(sink.lines(), vec!["WARNING: disk at 93%", "DEBUG: [1, 2, 3]"]);
/// ```
pub struct LogRecord<'l> {
    logger: &'l Logger,
    severity: Severity,
    fragments: Vec<String>,
    finalized: bool,
}

impl<'l> std::fmt::Debug for LogRecord<'l> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogRecord")
            .field("severity", &self.severity)
            .field("fragments", &self.fragments)
            .field("finalized", &self.finalized)
            .finish()
    }
}

impl<'l> LogRecord<'l> {
    pub(crate) fn new(logger: &'l Logger) -> Self {
        Self {
            logger,
            severity: Severity::default(),
            fragments: Vec::default(),
            finalized: false,
        }
    }

    /// Set the severity, replacing any earlier one.
    /// Adds no text.
    pub fn tag(&mut self, severity: Severity) -> &mut Self {
        self.severity = severity;
        self
    }

    /// Render a value and append it to the line.
    pub fn append<T: Loggable>(&mut self, value: T) -> &mut Self {
        self.fragments.push(value.to_value().render());
        self
    }

    /// Write the line now.
    /// Only the first call has an effect; dropping the record afterwards does nothing.
    pub fn end(&mut self) {
        self.finalize();
    }

    /// The current severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The text appended so far (without label or colors).
    pub fn text(&self) -> String {
        self.fragments.concat()
    }

    /// Whether the line has been written.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn finalize(&mut self) {
        if self.finalized {
            return;
        }

        self.finalized = true;
        self.logger.emit(self.severity, &self.text());
    }
}

impl<'l> Drop for LogRecord<'l> {
    fn drop(&mut self) {
        self.finalize();
    }
}
