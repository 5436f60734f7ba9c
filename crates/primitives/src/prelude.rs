pub use crate::{
    address::Address,
    buf::{Buf32, Buf64},
    errors::ParseError,
    hash,
};
