use std::collections::BTreeMap;
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::sink::{Sink, StdoutSink};

/// A symbolic terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Dark gray (`1;30`).
    DarkGray,
    /// Light blue (`1;34`).
    Blue,
    /// Light green (`1;32`).
    Green,
    /// Light cyan (`1;36`).
    Cyan,
    /// Light red (`1;31`).
    Red,
    /// Light purple (`1;35`).
    Purple,
    /// Yellow (`1;33`).
    Yellow,
    /// White (`1;37`).
    White,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 8] = [
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Purple,
        Color::Yellow,
        Color::White,
    ];

    /// The symbolic name (ex: `darkgray`).
    pub fn name(&self) -> &'static str {
        match self {
            Color::DarkGray => "darkgray",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }

    fn ansi_start(&self) -> &'static str {
        match self {
            Color::DarkGray => "\x1b[1;30m",
            Color::Blue => "\x1b[1;34m",
            Color::Green => "\x1b[1;32m",
            Color::Cyan => "\x1b[1;36m",
            Color::Red => "\x1b[1;31m",
            Color::Purple => "\x1b[1;35m",
            Color::Yellow => "\x1b[1;33m",
            Color::White => "\x1b[1;37m",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A color name outside the supported set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown color '{0}'.")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.name() == value)
            .ok_or_else(|| UnknownColor(value.to_string()))
    }
}

const ANSI_END: &str = "\x1b[0m";

/// Maps each [`Color`] to its (start, end) escape sequences.
///
/// A color without an entry renders with empty sequences.
///
/// ### Example
/// ```
/// use flaglog_logger::{Color, ColorTable};
///
/// let mut colors = ColorTable::plain();
/// colors.insert(Color::Red, "<red>", "</red>");
///
/// assert_eq!(colors.get(Color::Red), ("<red>", "</red>"));
/// assert_eq!(colors.get(Color::Blue), ("", ""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    entries: BTreeMap<Color, (String, String)>,
}

impl ColorTable {
    /// Bold ANSI escape sequences for every color.
    pub fn ansi() -> Self {
        Self {
            entries: Color::ALL
                .into_iter()
                .map(|color| {
                    (
                        color,
                        (color.ansi_start().to_string(), ANSI_END.to_string()),
                    )
                })
                .collect(),
        }
    }

    /// No escape sequences at all.
    pub fn plain() -> Self {
        Self::default()
    }

    /// [`ColorTable::ansi`] when stdout is an interactive terminal and `NO_COLOR` is unset, [`ColorTable::plain`] otherwise.
    pub fn detect() -> Self {
        Self::detect_for(&StdoutSink::default())
    }

    /// [`ColorTable::ansi`] when the sink writes to an interactive terminal and `NO_COLOR` is unset, [`ColorTable::plain`] otherwise.
    pub fn detect_for(sink: &(impl Sink + ?Sized)) -> Self {
        if env::var_os("NO_COLOR").is_none() && sink.is_terminal() {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    /// Set (or replace) the escape sequences of a color.
    pub fn insert(&mut self, color: Color, start: impl Into<String>, end: impl Into<String>) {
        self.entries.insert(color, (start.into(), end.into()));
    }

    /// The (start, end) escape sequences of a color.
    pub fn get(&self, color: Color) -> (&str, &str) {
        match self.entries.get(&color) {
            Some((start, end)) => (start.as_str(), end.as_str()),
            None => ("", ""),
        }
    }
}
