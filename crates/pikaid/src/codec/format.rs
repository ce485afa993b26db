use crate::{
    BASE, Engine, Error, ParsedPikaid, RandomBlock, Result, decode_u64, encode_u64_padded,
    is_digit,
};
use chrono::{DateTime, Utc};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Total length of an identifier.
pub const LENGTH: usize = 26;

/// Width of the leading timestamp segment.
pub const TIMESTAMP_LENGTH: usize = 7;

/// Width of the trailing randomness segment.
pub const RANDOMNESS_LENGTH: usize = 19;

/// Number of random bytes carried by the randomness segment.
pub const RANDOMNESS_BYTES: usize = 12;

/// Largest Unix second count the timestamp segment can hold (`zzzzzzz`),
/// roughly the year 4453.
pub const MAX_TIMESTAMP: u64 = BASE.pow(TIMESTAMP_LENGTH as u32) - 1;

const _: () = assert!(TIMESTAMP_LENGTH + RANDOMNESS_LENGTH == LENGTH);

/// Returns `true` if `candidate` is 26 characters of `[0-9a-z]`.
///
/// This is purely syntactic: a timestamp segment decoding to a far-future
/// date is still valid.
///
/// # Example
///
/// ```
/// assert!(pikaid::is_valid("00000000000000000000000000"));
/// assert!(!pikaid::is_valid("0000000000000000000000000Z"));
/// assert!(!pikaid::is_valid("000000000000000000000000"));
/// ```
#[must_use]
pub fn is_valid(candidate: &str) -> bool {
    candidate.len() == LENGTH && candidate.bytes().all(is_digit)
}

/// Builds an identifier from its components using `engine` for the
/// randomness segment.
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] if `seconds > MAX_TIMESTAMP`.
pub fn encode_with(engine: &Engine, seconds: u64, random: &RandomBlock) -> Result<String> {
    if seconds > MAX_TIMESTAMP {
        return Err(Error::TimestampOutOfRange { seconds });
    }
    let mut ts = [0_u8; TIMESTAMP_LENGTH];
    encode_u64_padded(seconds, &mut ts);

    let digits = engine.bytes_to_digits(random);
    debug_assert!(digits.len() <= RANDOMNESS_LENGTH);

    let mut id = String::with_capacity(LENGTH);
    id.extend(ts.iter().map(|&b| char::from(b)));
    id.extend(core::iter::repeat_n('0', RANDOMNESS_LENGTH.saturating_sub(digits.len())));
    id.push_str(&digits);
    Ok(id)
}

/// [`encode_with`] using the process-wide [`Engine::get`].
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] if `seconds > MAX_TIMESTAMP`, or
/// [`Error::MissingNumericBackend`] if no backend is available.
///
/// # Example
///
/// ```
/// let id = pikaid::encode(0, &[0; 12]).unwrap();
/// assert_eq!(id, "00000000000000000000000000");
/// ```
pub fn encode(seconds: u64, random: &RandomBlock) -> Result<String> {
    encode_with(&Engine::get()?, seconds, random)
}

/// Parses an identifier using `engine` for the randomness segment.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if `candidate` fails [`is_valid`]; no
/// decoding is attempted in that case.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(engine)))]
pub fn parse_with(engine: &Engine, candidate: &str) -> Result<ParsedPikaid> {
    if !is_valid(candidate) {
        return Err(Error::InvalidFormat {
            len: candidate.len(),
        });
    }
    let (ts, rand) = candidate.split_at(TIMESTAMP_LENGTH);

    let seconds = decode_u64(ts.as_bytes())?;
    let timestamp = i64::try_from(seconds)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .ok_or(Error::TimestampOutOfRange { seconds })?;
    let bytes = engine.digits_to_bytes(rand)?;

    Ok(ParsedPikaid::new(timestamp, seconds, bytes))
}

/// [`parse_with`] using the process-wide [`Engine::get`].
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if `candidate` fails [`is_valid`], or
/// [`Error::MissingNumericBackend`] if no backend is available.
///
/// # Example
///
/// ```
/// let parsed = pikaid::parse("0s44we80000000000000000010").unwrap();
/// assert_eq!(parsed.seconds(), 1_700_000_000);
/// assert_eq!(parsed.randomness(), "000000000000000000000024");
///
/// assert!(pikaid::parse("not-a-pikaid").is_err());
/// ```
pub fn parse(candidate: &str) -> Result<ParsedPikaid> {
    if !is_valid(candidate) {
        return Err(Error::InvalidFormat {
            len: candidate.len(),
        });
    }
    parse_with(&Engine::get()?, candidate)
}
