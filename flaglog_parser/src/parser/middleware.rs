use crate::model::Schema;
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

/// Pairs the scanning state machine with the usage printer over one schema.
pub(crate) struct ParseUnit<'s> {
    parser: Parser<'s>,
    printer: Printer<'s>,
}

impl<'s> ParseUnit<'s> {
    pub(crate) fn new(schema: &'s Schema) -> Self {
        Self {
            parser: Parser::new(schema),
            printer: Printer::new(schema),
        }
    }

    /// Run the scan.
    /// Any failure prints the usage listing first, then reports the error (help is not reported).
    pub(crate) fn invoke(
        &self,
        tokens: &[&str],
        program: &str,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<RawTable, ParseError> {
        let ParseUnit { parser, printer } = self;

        match parser.consume(tokens) {
            Ok(table) => Ok(table),
            Err(error) => {
                printer.print_help(program, user_interface);

                if error != ParseError::HelpRequested {
                    user_interface.print_error(&error);
                }

                Err(error)
            }
        }
    }
}
