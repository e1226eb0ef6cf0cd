use crate::color::Color;

/// The category of a log record, controlling its label and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Severity {
    /// `INFO: `, in cyan.
    #[default]
    Info,
    /// `WARNING: `, in blue.
    Warning,
    /// `ERROR: `, in red.
    Error,
    /// `DEBUG: `, in dark gray.
    Debug,
    /// `BENCHMARK: `, in purple.
    Benchmark,
    /// `RESULT: `, in yellow.
    Result,
}

impl Severity {
    /// Every severity, in declaration order.
    pub const ALL: [Severity; 6] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Debug,
        Severity::Benchmark,
        Severity::Result,
    ];

    /// The label written at the start of the line.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO: ",
            Severity::Warning => "WARNING: ",
            Severity::Error => "ERROR: ",
            Severity::Debug => "DEBUG: ",
            Severity::Benchmark => "BENCHMARK: ",
            Severity::Result => "RESULT: ",
        }
    }

    /// The color the label is written in.
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => Color::Cyan,
            Severity::Warning => Color::Blue,
            Severity::Error => Color::Red,
            Severity::Debug => Color::DarkGray,
            Severity::Benchmark => Color::Purple,
            Severity::Result => Color::Yellow,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
