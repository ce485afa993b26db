use crate::{RANDOMNESS_BYTES, Result};
use core::fmt;

/// Fixed-size big-endian block converted by a [`Base36Backend`].
pub type RandomBlock = [u8; RANDOMNESS_BYTES];

/// Identifies one of the interchangeable base36 conversion strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Backend {
    /// Arbitrary-precision integers from `num-bigint`.
    NativeBigInt,
    /// Self-contained long division over digit vectors.
    LongDivision,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeBigInt => f.write_str("native-bigint"),
            Self::LongDivision => f.write_str("long-division"),
        }
    }
}

/// A strategy converting a 96-bit big-endian block to and from base36.
///
/// Every implementation must agree with every other on every input: the
/// digits produced for a block, and the block recovered from a digit string,
/// are part of the identifier format.
///
/// # Example
///
/// ```
/// use pikaid::{Base36Backend, Engine};
///
/// let engine = Engine::get().unwrap();
/// let mut block = [0_u8; 12];
/// block[11] = 36;
/// assert_eq!(engine.bytes_to_digits(&block), "10");
/// assert_eq!(engine.digits_to_bytes("10").unwrap(), block);
/// ```
pub trait Base36Backend: Send + Sync {
    /// Which strategy this is.
    fn kind(&self) -> Backend;

    /// Converts `bytes` to lowercase base36 without padding. An all-zero
    /// block yields `"0"`.
    fn bytes_to_digits(&self, bytes: &RandomBlock) -> String;

    /// Converts a base36 digit string back to exactly 12 big-endian bytes.
    ///
    /// Leading zero digits are ignored. Values wider than 96 bits keep their
    /// 12 least significant bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDigit`] if `digits` contains a byte
    /// outside `[0-9a-z]`.
    fn digits_to_bytes(&self, digits: &str) -> Result<RandomBlock>;
}
