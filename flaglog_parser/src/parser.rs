mod base;
mod interface;
mod middleware;
mod printer;

pub use base::ParseError;
pub use interface::{ConsoleInterface, UserInterface};
pub(crate) use middleware::*;
pub(crate) use printer::*;

#[cfg(test)]
pub(crate) use interface::util;
