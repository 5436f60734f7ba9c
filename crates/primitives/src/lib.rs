//! Collection of generic internal data types that are used widely.

#[macro_use]
mod macros;

pub mod address;
pub mod buf;
pub mod errors;
pub mod hash;
pub mod prelude;

pub use address::Address;
pub use buf::{Buf32, Buf64};
pub use errors::ParseError;
