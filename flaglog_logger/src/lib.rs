//! Logging module for `flaglog`.
//! See [documentation root](https://docs.rs/flaglog/latest/flaglog/index.html) for full details.
#![deny(missing_docs)]
mod color;
mod logger;
mod macros;
mod model;
mod record;
mod sink;
mod value;

pub use color::*;
pub use logger::*;
pub use model::*;
pub use record::*;
pub use sink::*;
pub use value::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
