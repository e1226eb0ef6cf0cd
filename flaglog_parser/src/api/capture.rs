use std::str::FromStr;
use thiserror::Error;

/// Failure of a strict typed read from the option table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The option has no entry in the table.
    #[error("option '{name}' was not passed.")]
    Absent {
        /// The option name.
        name: String,
    },

    /// The value token does not convert to the requested type.
    #[error("cannot convert '{token}' of option '{name}' to {type_name}.")]
    InvalidConversion {
        /// The option name.
        name: String,
        /// The token that failed to convert.
        token: String,
        /// The requested type.
        type_name: &'static str,
    },
}

/// Convert the last whitespace separated token of `value` into a `T`.
///
/// A multi-value entry `"3 4 5"` therefore reads as `5`.
/// The token must convert in full: `"3abc"` is rejected.
pub(crate) fn convert<T: FromStr>(name: &str, value: &str) -> Result<T, ConversionError> {
    let token = value.split_whitespace().last().unwrap_or_default();

    T::from_str(token).map_err(|_| ConversionError::InvalidConversion {
        name: name.to_string(),
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}
