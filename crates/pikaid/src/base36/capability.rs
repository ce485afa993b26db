use crate::Backend;
use portable_atomic::{AtomicU8, Ordering};
#[cfg(feature = "tracing")]
use tracing::debug;

const NATIVE_BIGINT: u8 = 0b0000_0001;
const LONG_DIVISION: u8 = 0b0000_0010;
const DETECTED: u8 = 0b1000_0000;

/// Process-wide capability cache. Zero means "not yet detected".
static CAPABILITIES: AtomicU8 = AtomicU8::new(0);

/// Which numeric backends this process can use.
///
/// [`Capabilities::detect`] computes the flags once and caches them in a
/// single atomic byte. Threads racing on first use may each probe, but they
/// all store the same immutable value.
///
/// A `Capabilities` value can also be built by hand and handed to
/// [`crate::Engine::from_capabilities`], which is how tests pin a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Arbitrary-precision integers (`num-bigint`) are available.
    pub native_bigint: bool,
    /// The self-contained long-division fallback is available.
    pub long_division: bool,
}

impl Capabilities {
    /// No backend at all.
    pub const NONE: Self = Self {
        native_bigint: false,
        long_division: false,
    };

    /// Returns the cached process-wide capabilities, probing on first use.
    pub fn detect() -> Self {
        let cached = CAPABILITIES.load(Ordering::Acquire);
        if cached & DETECTED != 0 {
            return Self::from_bits(cached);
        }

        let caps = Self::probe();
        CAPABILITIES.store(caps.to_bits() | DETECTED, Ordering::Release);
        #[cfg(feature = "tracing")]
        debug!(
            native_bigint = caps.native_bigint,
            long_division = caps.long_division,
            preferred = ?caps.preferred(),
            "detected numeric backends"
        );
        caps
    }

    /// Computes the capabilities of this build without touching the cache.
    #[must_use]
    pub const fn probe() -> Self {
        Self {
            native_bigint: cfg!(feature = "native-bigint"),
            long_division: cfg!(feature = "long-division"),
        }
    }

    /// The backend an engine built from these capabilities uses: the native
    /// one when present, otherwise the fallback.
    #[must_use]
    pub const fn preferred(&self) -> Option<Backend> {
        if self.native_bigint {
            Some(Backend::NativeBigInt)
        } else if self.long_division {
            Some(Backend::LongDivision)
        } else {
            None
        }
    }

    /// Returns `true` if `backend` is available.
    #[must_use]
    pub const fn supports(&self, backend: Backend) -> bool {
        match backend {
            Backend::NativeBigInt => self.native_bigint,
            Backend::LongDivision => self.long_division,
        }
    }

    const fn to_bits(self) -> u8 {
        let mut bits = 0;
        if self.native_bigint {
            bits |= NATIVE_BIGINT;
        }
        if self.long_division {
            bits |= LONG_DIVISION;
        }
        bits
    }

    const fn from_bits(bits: u8) -> Self {
        Self {
            native_bigint: bits & NATIVE_BIGINT != 0,
            long_division: bits & LONG_DIVISION != 0,
        }
    }
}
