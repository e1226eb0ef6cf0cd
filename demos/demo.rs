use flaglog::{log_assert, log_var, option_parser, Logger};

fn main() {
    let parser = option_parser()
        .declare("-i", "The items to sum", true)
        .declare_with_default("-s", "Scale applied to the sum", 1.0)
        .declare("-v", "Log each item", false);

    let options = match parser.parse_env() {
        Ok(options) => options,
        Err(error) => std::process::exit(error.exit_code()),
    };

    let logger = Logger::new();
    let items: Vec<i64> = options
        .as_list("-i")
        .iter()
        .filter_map(|item| item.parse().ok())
        .collect();

    if options.was_passed("-v") {
        log_var!(logger, items);
    }

    if log_assert!(logger, !items.is_empty(), "no numeric items").is_err() {
        std::process::exit(1);
    }

    let scale: f64 = options.value("-s");
    let sum: i64 = items.iter().sum();
    logger.result().append("sum: ").append(sum as f64 * scale);
}
