// The help flag is always recognized, whether or not the program declares it.
pub(crate) const HELP_FLAG: &str = "-h";
pub(crate) const HELP_DESCRIPTION: &str = "Show this help message and exit.";
pub(crate) const FLAG_PREFIX: char = '-';
