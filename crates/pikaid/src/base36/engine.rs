use crate::{Backend, Base36Backend, Capabilities, Error, RandomBlock, Result};
use core::fmt;

/// The base conversion engine: one [`Base36Backend`] chosen up front and used
/// for every conversion afterwards.
///
/// `Engine` is a cheap `Copy` handle over a `'static` strategy object, so it
/// can be stored in generators or passed around freely.
///
/// # Example
///
/// ```
/// use pikaid::{Backend, Engine};
///
/// let fallback = Engine::with_backend(Backend::LongDivision).unwrap();
/// let digits = fallback.bytes_to_digits(&[0xff; 12]);
/// assert_eq!(digits, "7oiylpimjg5u2ca1ypr");
/// assert_eq!(fallback.digits_to_bytes(&digits).unwrap(), [0xff; 12]);
/// ```
#[derive(Clone, Copy)]
pub struct Engine {
    backend: &'static dyn Base36Backend,
}

impl Engine {
    /// Returns the engine for this process, built from the cached
    /// [`Capabilities::detect`] flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNumericBackend`] if no backend is available.
    pub fn get() -> Result<Self> {
        Self::from_capabilities(Capabilities::detect())
    }

    /// Builds an engine from explicit capabilities, preferring the native
    /// backend.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNumericBackend`] if `caps` names no backend, or
    /// names one that this build does not include.
    pub fn from_capabilities(caps: Capabilities) -> Result<Self> {
        let backend = caps.preferred().ok_or(Error::MissingNumericBackend)?;
        Self::with_backend(backend)
    }

    /// Builds an engine pinned to `backend`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNumericBackend`] if `backend` was not compiled
    /// in.
    pub fn with_backend(backend: Backend) -> Result<Self> {
        match backend {
            #[cfg(feature = "native-bigint")]
            Backend::NativeBigInt => Ok(Self {
                backend: &crate::NativeBigInt,
            }),
            #[cfg(feature = "long-division")]
            Backend::LongDivision => Ok(Self {
                backend: &crate::LongDivision,
            }),
            #[allow(unreachable_patterns)]
            _ => Err(Error::MissingNumericBackend),
        }
    }

    /// The strategy this engine dispatches to.
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend.kind()
    }

    /// Converts a 12-byte big-endian block to unpadded lowercase base36.
    #[must_use]
    pub fn bytes_to_digits(&self, bytes: &RandomBlock) -> String {
        self.backend.bytes_to_digits(bytes)
    }

    /// Converts base36 digits back to a 12-byte big-endian block.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigit`] if `digits` is not lowercase base36.
    pub fn digits_to_bytes(&self, digits: &str) -> Result<RandomBlock> {
        self.backend.digits_to_bytes(digits)
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("backend", &self.backend())
            .finish()
    }
}

impl PartialEq for Engine {
    fn eq(&self, other: &Self) -> bool {
        self.backend() == other.backend()
    }
}

impl Eq for Engine {}
