use std::collections::BTreeMap;
use thiserror::Error;

use crate::constant::*;
use crate::model::Schema;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The reasons a parse stops early.
///
/// Every variant short-circuits the parse; the usage listing is always printed before the error is reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A flag token that was never declared.
    #[error("Unrecognized option: {0}")]
    UnrecognizedOption(String),

    /// A value token appeared before any flag.
    #[error("argument '{0}' given before initial flag.")]
    ArgumentBeforeFlag(String),

    /// A required flag was omitted.
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    /// The help flag was passed.
    /// Not a true error, but it follows the same path.
    #[error("help requested.")]
    HelpRequested,
}

impl ParseError {
    /// The conventional exit code for this outcome: `0` for help, `1` otherwise.
    ///
    /// Exiting is left to the caller.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::HelpRequested => 0,
            _ => 1,
        }
    }
}

pub(crate) type RawTable = BTreeMap<String, String>;

pub(crate) struct Parser<'s> {
    schema: &'s Schema,
}

impl<'s> std::fmt::Debug for Parser<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'s> Parser<'s> {
    pub(crate) fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Scan the tokens (not including the program name) left to right, once.
    pub(crate) fn consume(&self, tokens: &[&str]) -> Result<RawTable, ParseError> {
        let mut table = RawTable::default();
        let mut current: Option<&str> = None;

        for token in tokens.iter().copied() {
            if token.starts_with(FLAG_PREFIX) {
                if let Some(flag) = current.take() {
                    self.close(&mut table, flag);
                }

                if token != HELP_FLAG && !self.schema.contains_key(token) {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Flag '{token}' is not declared.");
                    }

                    return Err(ParseError::UnrecognizedOption(token.to_string()));
                }

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Opening flag '{token}'.");
                }

                current.replace(token);
            } else {
                let flag = current
                    .ok_or_else(|| ParseError::ArgumentBeforeFlag(token.to_string()))?;
                let entry = table.entry(flag.to_string()).or_default();

                if entry.is_empty() {
                    entry.push_str(token);
                } else {
                    entry.push(' ');
                    entry.push_str(token);
                }
            }
        }

        if let Some(flag) = current {
            self.close(&mut table, flag);
        }

        if table.contains_key(HELP_FLAG) {
            return Err(ParseError::HelpRequested);
        }

        for (name, option) in self.schema {
            if table.contains_key(name) {
                continue;
            }

            if option.is_required() {
                return Err(ParseError::MissingRequiredArgument(name.clone()));
            }

            if let Some(default) = option.default_value() {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Installing default '{default}' for '{name}'.");
                }

                table.insert(name.clone(), default.to_string());
            }
        }

        Ok(table)
    }

    // A flag that collected no values takes its default (the empty string when there is none).
    fn close(&self, table: &mut RawTable, flag: &str) {
        let entry = table.entry(flag.to_string()).or_default();

        if entry.is_empty() {
            if let Some(option) = self.schema.get(flag) {
                entry.push_str(option.raw_default());
            }
        }
    }
}
