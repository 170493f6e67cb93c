#[macro_use]
extern crate lazy_static;

pub mod properties;

mod unicode;

pub use unicode::parse;
pub use unicode::BMP_END;
pub use unicode::UNICODE;
