mod capture;
mod core;
mod table;

pub use self::core::*;
pub use capture::ConversionError;
pub use table::*;
