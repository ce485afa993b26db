/// A result type defaulting to the crate [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors `pikaid` can produce.
///
/// Encoding and generation only fail on precondition violations (a timestamp
/// outside the 7-digit base36 range) or when the process was built without a
/// numeric backend. Parsing fails loudly on anything that is not a
/// syntactically valid identifier; no partial decode is ever returned.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input is not 26 characters drawn from `[0-9a-z]`.
    #[error("invalid pikaid format: expected 26 characters in [0-9a-z], got {len} bytes")]
    InvalidFormat {
        /// Byte length of the rejected input.
        len: usize,
    },

    /// A byte outside the lowercase base36 alphabet was handed to the
    /// conversion engine.
    #[error("invalid base36 digit {byte:#04x} at index {index}")]
    InvalidDigit { byte: u8, index: usize },

    /// Neither conversion strategy is available in this build, or the
    /// requested one was not compiled in.
    #[error("no numeric backend available: enable the 'native-bigint' or 'long-division' feature")]
    MissingNumericBackend,

    /// The seconds value does not fit the 7-character timestamp segment, or
    /// cannot be represented as a calendar time.
    #[error("timestamp {seconds}s is outside the representable range 0..=78364164095")]
    TimestampOutOfRange { seconds: u64 },
}
