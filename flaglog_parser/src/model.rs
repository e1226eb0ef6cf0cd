use std::collections::BTreeMap;

/// A declared flag: its name, help description, default value, and whether it must be passed.
///
/// The default is kept in its textual form.
/// An empty default means "no default".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSchema {
    name: String,
    description: String,
    default: String,
    required: bool,
}

impl OptionSchema {
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default: default.into(),
            required,
        }
    }

    /// The flag name, exactly as matched on the Cli (ex: `-n`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The help description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The default value, if one was declared.
    pub fn default_value(&self) -> Option<&str> {
        if self.default.is_empty() {
            None
        } else {
            Some(&self.default)
        }
    }

    /// Whether parsing fails when this flag is omitted.
    pub fn is_required(&self) -> bool {
        self.required
    }

    // Empty when there is no default.
    pub(crate) fn raw_default(&self) -> &str {
        &self.default
    }
}

// Keyed by flag name; iteration order is the documented (lexicographic) order of the usage listing.
pub(crate) type Schema = BTreeMap<String, OptionSchema>;
