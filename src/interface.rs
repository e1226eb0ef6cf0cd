use flaglog_logger::Logger;
use flaglog_parser::{ParseError, UserInterface};

/// Routes parser output through a [`Logger`].
///
/// The usage listing is written as plain lines; failures become `error` records.
#[derive(Debug, Default)]
pub struct LoggedInterface {
    logger: Logger,
}

impl LoggedInterface {
    /// Report through the provided logger.
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl UserInterface for LoggedInterface {
    fn print(&self, message: String) {
        self.logger.write_plain(&message);
    }

    fn print_error(&self, error: &ParseError) {
        self.logger.error().append(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flaglog_logger::{ColorTable, MemorySink};
    use rstest::rstest;

    #[rstest]
    #[case(ParseError::UnrecognizedOption("-x".to_string()), "ERROR: Unrecognized option: -x")]
    #[case(ParseError::ArgumentBeforeFlag("a".to_string()), "ERROR: argument 'a' given before initial flag.")]
    #[case(ParseError::MissingRequiredArgument("-n".to_string()), "ERROR: Missing required argument: -n")]
    fn print_error(#[case] error: ParseError, #[case] expected: &str) {
        // Setup
        let sink = MemorySink::default();
        let interface = LoggedInterface::new(
            Logger::new()
                .colors(ColorTable::plain())
                .sink(Box::new(sink.clone())),
        );

        // Execute
        interface.print("USAGE:".to_string());
        interface.print_error(&error);

        // Verify
        assert_eq!(sink.lines(), vec!["USAGE:", expected]);
    }
}
