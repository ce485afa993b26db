use crate::RandomBlock;
use chrono::{DateTime, Utc};
use core::fmt;

/// The decoded components of an identifier.
///
/// Only produced by [`crate::parse`] and [`crate::parse_with`]; immutable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParsedPikaid {
    timestamp: DateTime<Utc>,
    seconds: u64,
    bytes: RandomBlock,
    randomness: String,
}

impl ParsedPikaid {
    pub(crate) fn new(timestamp: DateTime<Utc>, seconds: u64, bytes: RandomBlock) -> Self {
        Self {
            timestamp,
            seconds,
            bytes,
            randomness: hex::encode(bytes),
        }
    }

    /// Creation time, to the second, in UTC.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Creation time as whole seconds since the Unix epoch.
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// The 96 random bits as 24 lowercase hex characters.
    #[must_use]
    pub fn randomness(&self) -> &str {
        &self.randomness
    }

    /// The 96 random bits as big-endian bytes.
    #[must_use]
    pub const fn random_bytes(&self) -> &RandomBlock {
        &self.bytes
    }
}

impl fmt::Display for ParsedPikaid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
            self.randomness
        )
    }
}
