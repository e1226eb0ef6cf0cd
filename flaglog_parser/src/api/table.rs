use std::collections::BTreeMap;
use std::str::FromStr;

use crate::api::capture::{convert, ConversionError};

/// The validated result of a successful parse: flag name to accumulated raw value.
///
/// Multiple values for one flag are stored space-joined.
/// Every accessor degrades to an empty/zero value for flags that are absent.
///
/// ### Example
/// ```
/// # use flaglog_parser as flaglog;
/// use flaglog::OptionParser;
///
/// let parser = OptionParser::new()
///     .declare("-f", "Files to read.", true)
///     .declare_with_default("-n", "Line count.", 10);
///
/// let options = parser.parse(&["program", "-f", "a.txt", "b.txt"]).unwrap();
///
/// assert_eq!(options.as_string("-f"), "a.txt b.txt");
/// assert_eq!(options.as_list("-f"), vec!["a.txt", "b.txt"]);
/// assert_eq!(options.value::<u32>("-n"), 10);
/// assert!(!options.was_passed("-q"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionTable {
    program: String,
    values: BTreeMap<String, String>,
}

impl OptionTable {
    pub(crate) fn new(program: impl Into<String>, values: BTreeMap<String, String>) -> Self {
        Self {
            program: program.into(),
            values,
        }
    }

    /// The program name (element 0 of the parsed argument vector).
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether `name` has an entry, including entries filled in from a default.
    pub fn was_passed(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The raw stored value, or `""` if absent.
    pub fn as_string(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    /// The stored value split on whitespace, or an empty list if absent.
    pub fn as_list(&self, name: &str) -> Vec<String> {
        self.as_string(name)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Lenient typed read.
    ///
    /// Reads the last whitespace separated token of the stored value (so `"3 4 5"` reads as `5`).
    /// Falls back to `T::default()` when the flag is absent or the token does not convert in full (ex: `"3abc"`).
    pub fn value<T>(&self, name: &str) -> T
    where
        T: FromStr + Default,
    {
        self.try_value(name).unwrap_or_default()
    }

    /// Strict typed read, with the same token rule as [`OptionTable::value`].
    pub fn try_value<T: FromStr>(&self, name: &str) -> Result<T, ConversionError> {
        match self.values.get(name) {
            Some(value) => convert(name, value),
            None => Err(ConversionError::Absent {
                name: name.to_string(),
            }),
        }
    }

    /// Iterate the entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table(entries: Vec<(&str, &str)>) -> OptionTable {
        OptionTable::new(
            "program",
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn table_absent() {
        let options = table(vec![]);
        assert!(!options.was_passed("-f"));
        assert_eq!(options.as_string("-f"), "");
        assert_eq!(options.as_list("-f"), Vec::<String>::default());
        assert_eq!(options.value::<u32>("-f"), 0);
        assert_eq!(options.value::<f64>("-f"), 0.0);
        assert_matches!(
            options.try_value::<u32>("-f"),
            Err(ConversionError::Absent { .. })
        );
    }

    #[test]
    fn table_empty_value() {
        let options = table(vec![("-f", "")]);
        assert!(options.was_passed("-f"));
        assert_eq!(options.as_string("-f"), "");
        assert_eq!(options.as_list("-f"), Vec::<String>::default());
        assert_eq!(options.value::<u32>("-f"), 0);
    }

    #[rstest]
    #[case("a", vec!["a"])]
    #[case("a b c", vec!["a", "b", "c"])]
    #[case("a  b", vec!["a", "b"])]
    fn table_as_list(#[case] value: &str, #[case] expected: Vec<&str>) {
        let options = table(vec![("-f", value)]);
        assert_eq!(options.as_list("-f"), expected);
        assert_eq!(options.as_string("-f"), value);
    }

    #[rstest]
    #[case("12", 12)]
    #[case("1 2", 2)]
    #[case("3abc", 0)]
    #[case("-4", -4)]
    fn table_value(#[case] value: &str, #[case] expected: i64) {
        let options = table(vec![("-n", value)]);
        assert_eq!(options.value::<i64>("-n"), expected);
    }

    #[test]
    fn table_try_value() {
        let options = table(vec![("-n", "3abc")]);
        assert_matches!(
            options.try_value::<i64>("-n"),
            Err(ConversionError::InvalidConversion { token, .. }) if token == "3abc"
        );
    }

    #[test]
    fn table_iter() {
        let options = table(vec![("-b", "2"), ("-a", "1")]);
        assert_eq!(options.program(), "program");
        assert_eq!(
            options.iter().collect::<Vec<_>>(),
            vec![("-a", "1"), ("-b", "2")]
        );
    }
}
