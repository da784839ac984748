mod display;
mod error;
mod value;

pub use display::format;
pub use error::LispError;
pub use value::Value;
