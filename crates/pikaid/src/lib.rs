#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(any(feature = "native-bigint", feature = "long-division")))]
compile_error!(
    "pikaid needs a numeric backend: enable at least one of 'native-bigint' or 'long-division'."
);

mod base36;
mod codec;
mod error;
mod rand;
#[cfg(feature = "serde")]
pub mod serde;
mod time;

pub use crate::base36::*;
pub use crate::codec::*;
pub use crate::error::*;
pub use crate::rand::*;
pub use crate::time::*;
