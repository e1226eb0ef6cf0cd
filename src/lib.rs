//! `flaglog` is a small flag parser paired with a tagged, colorized console logger, meant to be embedded in command line tools.
//!
//! The two halves are independent:
//! * [`OptionParser`]: declare flags, then scan an argument vector once into a validated [`OptionTable`].
//! * [`Logger`] / [`LogRecord`]: build one tagged, colorized line from heterogeneous values and write it exactly once.
//!
//! They meet in [`LoggedInterface`], which reports parse failures through the logger.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo.rs")]
//! ```
//!
//! ```console
//! $ demo -h
//! USAGE:
//!	demo [-h] -i [-s] [-v]
//!
//! OPTIONS:
//!	-h: Show this help message and exit.
//!	-i: The items to sum
//!	-s: Scale applied to the sum. (1)
//!	-v: Log each item
//!
//! $ demo -i 1 2 3 -s 0.5
//! RESULT: sum: 3
//!
//! $ demo -x
//! USAGE:
//! ...
//! ERROR: Unrecognized option: -x
//! ```
//!
//! # Flags
//! Every token starting with `-` is a flag token; every other token is a value for the most recent flag.
//! * A flag may take any number of values, stored space-joined (`-f a b c` stores `"a b c"`).
//! Repeating a flag keeps accumulating (`-f a -f b` stores `"a b"`).
//! * A flag passed without values stores its default, or `""` if it has none.
//! * Flags that were not passed take their default after the scan; flags without a default stay absent.
//! * Parsing stops at the first failure: an undeclared flag, a value before any flag, or a missing required flag.
//! The usage listing is printed before the failure is reported.
//! * `-h` always prints the usage listing and results in [`ParseError::HelpRequested`], even when combined with other valid flags.
//!
//! Nothing in `flaglog` exits the process.
//! Use [`ParseError::exit_code`] to pick the exit code for your tool.
//!
//! The accessors on [`OptionTable`] never fail on absent flags: they return an empty string, an empty list, or `T::default()`.
//! [`OptionTable::value`] reads the *last* whitespace separated token of the stored value, and falls back to `T::default()` when that token does not convert in full.
//! Use [`OptionTable::try_value`] to see the conversion failure instead.
//!
//! # Logging
//! A [`LogRecord`] starts as `info`, takes a [`Severity`] tag and any number of [`Loggable`] values, and is written when [`LogRecord::end`] is called or when it is dropped, whichever comes first.
//!
//! Values render by kind:
//!
//! ```text
//! Kind                        | Example           | Rendering
//! ---------------------------------------------------------------------
//! scalar (numbers, strings)   | 2.5, "abc"        | 2.5, abc
//! bool                        | true              | true
//! Vec, slice, array, VecDeque | vec![1, 2, 3]     | [1, 2, 3]
//! BTreeSet, HashSet           | {1, 2}            | [1, 2]
//! BTreeMap, HashMap           | {"a": 1, "b": 2}  | {a -> 1, b -> 2}
//! pair                        | (1, 2)            | [ 1,<TAB>2 ]
//! ```
//!
//! Each line is `<color-start><LABEL><color-end><values>`, with the colors looked up in an injectable [`ColorTable`].
//! [`ColorTable::detect`] disables colors when stdout is not a terminal, or when `NO_COLOR` is set.
//!
//! # Assertions
//! [`log_assert!`] logs a failed condition with its source location and returns an [`AssertionFailure`] for the caller to act on.
//! Assertions are switched off at runtime via [`Logger::assertions`].
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events from the flag parser state machine.
mod interface;

pub use flaglog_logger::*;
pub use flaglog_parser::*;
pub use interface::LoggedInterface;

/// Create an [`OptionParser`] that reports through a default [`Logger`].
pub fn option_parser() -> OptionParser {
    OptionParser::with_interface(Box::new(LoggedInterface::default()))
}

/// Create an [`OptionParser`] that reports through the provided [`Logger`].
pub fn option_parser_with(logger: Logger) -> OptionParser {
    OptionParser::with_interface(Box::new(LoggedInterface::new(logger)))
}
