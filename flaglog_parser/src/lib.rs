//! Flag parsing module for `flaglog`.
//! See [documentation root](https://docs.rs/flaglog/latest/flaglog/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{ConsoleInterface, ParseError, UserInterface};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
