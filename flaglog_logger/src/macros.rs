/// Log `<expression> = <value>` as a `debug` record.
///
/// ### Example
/// ```
/// use flaglog_logger::{log_var, ColorTable, Logger, MemorySink};
///
/// let sink = MemorySink::default();
/// let logger = Logger::new()
///     .colors(ColorTable::plain())
///     .sink(Box::new(sink.clone()));
/// let sizes = vec![3, 5];
///
/// log_var!(logger, sizes);
///
/// assert_eq!(sink.lines(), vec!["DEBUG: sizes = [3, 5]"]);
/// ```
#[macro_export]
macro_rules! log_var {
    ($logger:expr, $value:expr $(,)?) => {
        $logger
            .debug()
            .append(::core::concat!(::core::stringify!($value), " = "))
            .append(&$value)
            .end()
    };
}

/// Assert a condition through a [`Logger`](crate::Logger).
///
/// Evaluates to `Result<(), AssertionFailure>`.
/// On failure the expression text and source location (and the message, if any) are logged as an `error` record before the failure is returned.
/// When the logger's assertions are disabled, the condition is not evaluated and the result is `Ok(())`.
///
/// ### Example
/// ```
/// use flaglog_logger::{log_assert, ColorTable, Logger, MemorySink};
///
/// let sink = MemorySink::default();
/// let logger = Logger::new()
///     .colors(ColorTable::plain())
///     .sink(Box::new(sink.clone()));
/// let count = 0;
///
/// assert!(log_assert!(logger, count == 0).is_ok());
///
/// let failure = log_assert!(logger, count > 0, "count must be positive").unwrap_err();
/// assert_eq!(failure.expression, "count > 0");
/// assert_eq!(sink.lines().len(), 1);
/// assert!(sink.lines()[0].ends_with("\n\"count must be positive\""));
/// ```
#[macro_export]
macro_rules! log_assert {
    ($logger:expr, $condition:expr $(,)?) => {{
        let logger: &$crate::Logger = &$logger;

        if logger.assertions_enabled() {
            logger.check(
                $condition,
                ::core::stringify!($condition),
                ::core::file!(),
                ::core::line!(),
                ::core::option::Option::None,
            )
        } else {
            ::core::result::Result::<(), $crate::AssertionFailure>::Ok(())
        }
    }};
    ($logger:expr, $condition:expr, $message:expr $(,)?) => {{
        let logger: &$crate::Logger = &$logger;

        if logger.assertions_enabled() {
            let condition: bool = $condition;

            if condition {
                ::core::result::Result::<(), $crate::AssertionFailure>::Ok(())
            } else {
                logger.check(
                    false,
                    ::core::stringify!($condition),
                    ::core::file!(),
                    ::core::line!(),
                    ::core::option::Option::Some(::std::format!("{}", $message).as_str()),
                )
            }
        } else {
            ::core::result::Result::<(), $crate::AssertionFailure>::Ok(())
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::{AssertionFailure, ColorTable, Logger, MemorySink};
    use std::cell::Cell;

    fn logger() -> (Logger, MemorySink) {
        let sink = MemorySink::default();
        let logger = Logger::new()
            .colors(ColorTable::plain())
            .sink(Box::new(sink.clone()));
        (logger, sink)
    }

    #[test]
    fn log_var() {
        // Setup
        let (logger, sink) = logger();
        let flag = true;
        let pair = (1, "a");

        // Execute
        log_var!(logger, flag);
        log_var!(logger, pair);
        log_var!(logger, 2 + 3);

        // Verify
        assert_eq!(
            sink.lines(),
            vec![
                "DEBUG: flag = true",
                "DEBUG: pair = [ 1,\ta ]",
                "DEBUG: 2 + 3 = 5",
            ]
        );
    }

    #[test]
    fn log_assert_location() {
        // Setup
        let (logger, sink) = logger();

        // Execute
        let line = line!() + 1;
        let failure = log_assert!(logger, 1 > 2).unwrap_err();

        // Verify
        assert_eq!(
            failure,
            AssertionFailure {
                expression: "1 > 2".to_string(),
                file: file!().to_string(),
                line,
                message: None,
            }
        );
        assert_eq!(
            sink.lines(),
            vec![format!("ERROR: assertion '1 > 2' failed at {}:{line}", file!())]
        );
    }

    #[test]
    fn log_assert_message() {
        // Setup
        let (logger, _sink) = logger();
        let limit = 4;

        // Execute
        let failure = log_assert!(logger, limit < 3, format!("limit was {limit}")).unwrap_err();

        // Verify
        assert_eq!(failure.message.as_deref(), Some("limit was 4"));
    }

    #[test]
    fn log_assert_message_skipped_when_holds() {
        // Setup
        let (logger, sink) = logger();
        let formatted = Cell::new(0);
        let message = || {
            formatted.set(formatted.get() + 1);
            "order broken".to_string()
        };

        // Execute
        let result = log_assert!(logger, 1 < 2, message());

        // Verify
        assert_eq!(result, Ok(()));
        assert_eq!(formatted.get(), 0);
        assert!(sink.lines().is_empty());

        // Execute
        let failure = log_assert!(logger, 2 < 1, message()).unwrap_err();

        // Verify
        assert_eq!(failure.message.as_deref(), Some("order broken"));
        assert_eq!(formatted.get(), 1);
    }

    #[test]
    fn log_assert_disabled() {
        // Setup
        let (logger, sink) = logger();
        let logger = logger.assertions(false);
        let evaluated = Cell::new(false);
        let condition = || {
            evaluated.set(true);
            false
        };

        // Execute
        let result = log_assert!(logger, condition(), "unreachable");

        // Verify
        assert_eq!(result, Ok(()));
        assert!(!evaluated.get());
        assert!(sink.lines().is_empty());
    }
}
