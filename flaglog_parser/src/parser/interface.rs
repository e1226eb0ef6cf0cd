use crate::parser::ParseError;

/// The output seam of the parser.
///
/// Usage lines go through `print`, failures through `print_error`.
/// Implement this to redirect parser output (ex: into a logger).
pub trait UserInterface {
    /// Print one line of the usage listing.
    fn print(&self, message: String);

    /// Report a parse failure.
    /// Called after the usage listing has been printed, and never for [`ParseError::HelpRequested`].
    fn print_error(&self, error: &ParseError);
}

/// Prints usage to stdout and failures to stderr.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &ParseError) {
        eprintln!("Parse error: {error}");
    }
}
