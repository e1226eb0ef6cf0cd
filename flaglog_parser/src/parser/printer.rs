use crate::constant::*;
use crate::model::Schema;
use crate::parser::interface::UserInterface;

/// Renders the usage listing of a schema.
pub(crate) struct Printer<'s> {
    schema: &'s Schema,
}

impl<'s> Printer<'s> {
    pub(crate) fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    pub(crate) fn usage(&self, program: &str) -> Vec<String> {
        // A program may declare its own -h, in which case we don't list the built-in one.
        let builtin_help = !self.schema.contains_key(HELP_FLAG);
        let mut summary = Vec::default();

        if builtin_help {
            summary.push(format!("[{HELP_FLAG}]"));
        }

        for (name, option) in self.schema {
            if option.is_required() {
                summary.push(name.clone());
            } else {
                summary.push(format!("[{name}]"));
            }
        }

        let mut lines = vec![
            "USAGE:".to_string(),
            format!("\t{program} {}", summary.join(" ")),
            "".to_string(),
            "OPTIONS:".to_string(),
        ];

        if builtin_help {
            lines.push(format!("\t{HELP_FLAG}: {HELP_DESCRIPTION}"));
        }

        for (name, option) in self.schema {
            match option.default_value() {
                Some(default) => lines.push(format!(
                    "\t{name}: {description}. ({default})",
                    description = option.description()
                )),
                None => lines.push(format!(
                    "\t{name}: {description}",
                    description = option.description()
                )),
            }
        }

        lines
    }

    pub(crate) fn print_help(
        &self,
        program: &str,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.usage(program) {
            user_interface.print(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionSchema;
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn schema(options: Vec<OptionSchema>) -> Schema {
        options
            .into_iter()
            .map(|option| (option.name().to_string(), option))
            .collect()
    }

    #[test]
    fn usage_empty() {
        // Setup
        let schema = Schema::default();
        let printer = Printer::new(&schema);

        // Execute
        let lines = printer.usage("program");

        // Verify
        assert_eq!(
            lines,
            vec![
                "USAGE:",
                "\tprogram [-h]",
                "",
                "OPTIONS:",
                "\t-h: Show this help message and exit.",
            ]
        );
    }

    #[test]
    fn usage_ordered() {
        // Setup
        let schema = schema(vec![
            OptionSchema::new("-z", "Last one", "", false),
            OptionSchema::new("-a", "Required one", "", true),
            OptionSchema::new("-m", "Middle one", "3", false),
        ]);
        let printer = Printer::new(&schema);

        // Execute
        let lines = printer.usage("program");

        // Verify
        assert_eq!(
            lines,
            vec![
                "USAGE:",
                "\tprogram [-h] -a [-m] [-z]",
                "",
                "OPTIONS:",
                "\t-h: Show this help message and exit.",
                "\t-a: Required one",
                "\t-m: Middle one. (3)",
                "\t-z: Last one",
            ]
        );
    }

    #[rstest]
    #[case(true, "\tprogram -h")]
    #[case(false, "\tprogram [-h]")]
    fn usage_declared_help(#[case] required: bool, #[case] expected: &str) {
        // Setup
        let schema = schema(vec![OptionSchema::new("-h", "Custom help", "", required)]);
        let printer = Printer::new(&schema);

        // Execute
        let lines = printer.usage("program");

        // Verify
        assert_eq!(lines[1], expected);
        assert_eq!(lines[4], "\t-h: Custom help");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn print_help() {
        // Setup
        let schema = schema(vec![OptionSchema::new("-n", "Count", "10", false)]);
        let printer = Printer::new(&schema);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help("summer", &interface);

        // Verify
        let message = interface.consume_message();
        assert_contains!(message, "USAGE:\n\tsummer [-h] [-n]\n");
        assert_contains!(message, "\t-n: Count. (10)");
    }
}
