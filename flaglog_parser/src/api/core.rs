use std::env;
use std::fmt::Display;

use crate::api::OptionTable;
use crate::model::{OptionSchema, Schema};
use crate::parser::{ConsoleInterface, ParseError, ParseUnit, Printer, UserInterface};

/// The flag parser.
///
/// Declare the flags, then `parse` an argument vector (program name first).
/// A failed parse prints the usage listing and reports the error through the [`UserInterface`].
///
/// ### Example
/// ```
/// # use flaglog_parser as flaglog;
/// use flaglog::{OptionParser, ParseError};
///
/// let parser = OptionParser::new()
///     .declare("-i", "Input file.", true)
///     .declare_with_default("-s", "Scale factor.", 1.5);
///
/// let options = parser.parse(&["program", "-i", "data.csv"]).unwrap();
/// assert_eq!(options.as_string("-i"), "data.csv");
/// assert_eq!(options.value::<f64>("-s"), 1.5);
///
/// let error = parser.parse(&["program", "-s", "2"]).unwrap_err();
/// assert_eq!(error, ParseError::MissingRequiredArgument("-i".to_string()));
/// ```
pub struct OptionParser {
    schema: Schema,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for OptionParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionParser")
            .field("schema", &self.schema)
            .finish()
    }
}

impl Default for OptionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionParser {
    /// Create a flag parser that writes to the console.
    pub fn new() -> Self {
        Self::with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Create a flag parser that writes through the provided interface.
    pub fn with_interface(user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            schema: Schema::default(),
            user_interface,
        }
    }

    /// Declare a flag without a default.
    /// If repeated for the same name, the final declaration applies.
    ///
    /// ### Example
    /// ```
    /// # use flaglog_parser as flaglog;
    /// use flaglog::OptionParser;
    ///
    /// let parser = OptionParser::new()
    ///     .declare("-v", "--this will get discarded--", true)
    ///     .declare("-v", "Verbose output.", false);
    ///
    /// let options = parser.parse(&["program"]).unwrap();
    /// assert!(!options.was_passed("-v"));
    /// ```
    pub fn declare(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        let name = name.into();
        self.schema.insert(
            name.clone(),
            OptionSchema::new(name, description, "", required),
        );
        self
    }

    /// Declare an optional flag with a default value.
    /// The default is converted to text once, here.
    /// If repeated for the same name, the final declaration applies.
    ///
    /// ### Example
    /// ```
    /// # use flaglog_parser as flaglog;
    /// use flaglog::OptionParser;
    ///
    /// let parser = OptionParser::new()
    ///     .declare_with_default("-n", "Iterations.", 100);
    ///
    /// let options = parser.parse(&["program"]).unwrap();
    /// assert_eq!(options.as_string("-n"), "100");
    /// ```
    pub fn declare_with_default(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Display,
    ) -> Self {
        let name = name.into();
        self.schema.insert(
            name.clone(),
            OptionSchema::new(name, description, default.to_string(), false),
        );
        self
    }

    /// The declared flags, in name order.
    pub fn schema(&self) -> impl Iterator<Item = &OptionSchema> {
        self.schema.values()
    }

    /// The usage listing lines for `program`, without printing them.
    pub fn usage(&self, program: &str) -> Vec<String> {
        Printer::new(&self.schema).usage(program)
    }

    /// Print the usage listing for `program` through the interface.
    pub fn print_help(&self, program: &str) {
        Printer::new(&self.schema).print_help(program, &*self.user_interface);
    }

    /// Run the flag parser against an argument vector.
    /// Element 0 is the program name; the remaining elements are scanned once, left to right.
    ///
    /// Parsing stops at the first failure, which is returned after the usage listing is printed.
    /// The help flag `-h` always results in [`ParseError::HelpRequested`], even when combined with other valid flags.
    /// Exiting the process is left to the caller (see [`ParseError::exit_code`]).
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<OptionTable, ParseError> {
        let (program, tokens) = match args.split_first() {
            Some((program, tokens)) => (
                program.as_ref(),
                tokens.iter().map(AsRef::as_ref).collect::<Vec<&str>>(),
            ),
            None => ("", Vec::default()),
        };
        let values = ParseUnit::new(&self.schema).invoke(
            tokens.as_slice(),
            program,
            &*self.user_interface,
        )?;

        Ok(OptionTable::new(program, values))
    }

    /// Run the flag parser against the Cli [`env::args`].
    ///
    /// See [`OptionParser::parse`].
    pub fn parse_env(&self) -> Result<OptionTable, ParseError> {
        let args: Vec<String> = env::args().collect();
        self.parse(args.as_slice())
    }
}
