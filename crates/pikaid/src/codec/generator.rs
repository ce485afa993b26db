use crate::{Engine, RandSource, RandomBlock, Result, TimeSource, encode_with};
#[cfg(feature = "std")]
use crate::{SystemClock, ThreadRandom};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Generates identifiers from a clock, a random source and a conversion
/// engine.
///
/// Each call reads the clock once and draws one fresh 12-byte block. There is
/// no shared mutable state: every identifier is an independent value, and
/// uniqueness within the same second rests on the 96 random bits.
///
/// # Example
///
/// ```
/// use pikaid::{Engine, PikaidGenerator, RandSource, TimeSource};
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_secs(&self) -> u64 {
///         1_700_000_000
///     }
/// }
///
/// struct FixedRand;
/// impl RandSource<[u8; 12]> for FixedRand {
///     fn rand(&self) -> [u8; 12] {
///         [0xff; 12]
///     }
/// }
///
/// let generator = PikaidGenerator::with_engine(FixedTime, FixedRand, Engine::get().unwrap());
/// assert_eq!(generator.next_id().unwrap(), "0s44we87oiylpimjg5u2ca1ypr");
/// ```
#[derive(Clone, Debug)]
pub struct PikaidGenerator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<RandomBlock>,
{
    clock: T,
    rng: R,
    engine: Engine,
}

#[cfg(feature = "std")]
impl PikaidGenerator<SystemClock, ThreadRandom> {
    /// A generator over the system clock, the thread-local CSPRNG and the
    /// process-wide engine.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingNumericBackend`] if no backend is
    /// available.
    pub fn new() -> Result<Self> {
        Self::from_components(SystemClock, ThreadRandom)
    }
}

impl<T, R> PikaidGenerator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<RandomBlock>,
{
    /// A generator over custom sources and the process-wide engine.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingNumericBackend`] if no backend is
    /// available.
    pub fn from_components(clock: T, rng: R) -> Result<Self> {
        Ok(Self::with_engine(clock, rng, Engine::get()?))
    }

    /// A generator over custom sources and an explicit engine.
    pub const fn with_engine(clock: T, rng: R, engine: Engine) -> Self {
        Self { clock, rng, engine }
    }

    /// The engine used for the randomness segment.
    pub const fn engine(&self) -> Engine {
        self.engine
    }

    /// Generates the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TimestampOutOfRange`] if the clock reports a
    /// time past `zzzzzzz` (year ~4453).
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> Result<String> {
        let seconds = self.clock.current_secs();
        let random = self.rng.rand();
        encode_with(&self.engine, seconds, &random)
    }
}

/// Generates an identifier from the system clock and the thread-local
/// CSPRNG.
///
/// # Errors
///
/// Returns [`crate::Error::MissingNumericBackend`] if no backend is available,
/// or [`crate::Error::TimestampOutOfRange`] if the system clock is past year
/// ~4453.
///
/// # Example
///
/// ```
/// let id = pikaid::generate().unwrap();
/// assert_eq!(id.len(), 26);
/// assert!(pikaid::is_valid(&id));
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub fn generate() -> Result<String> {
    PikaidGenerator::new()?.next_id()
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::{Backend, Error, MAX_TIMESTAMP, parse_with};
    use std::cell::Cell;

    struct MockTime {
        secs: u64,
    }

    impl TimeSource<u64> for MockTime {
        fn current_secs(&self) -> u64 {
            self.secs
        }
    }

    /// Counts up from zero, one block per call.
    struct CountingRand {
        next: Cell<u128>,
    }

    impl RandSource<RandomBlock> for CountingRand {
        fn rand(&self) -> RandomBlock {
            let n = self.next.get();
            self.next.set(n + 1);
            n.to_be_bytes()[4..].try_into().unwrap()
        }
    }

    fn backends() -> Vec<Backend> {
        let mut out = Vec::new();
        #[cfg(feature = "native-bigint")]
        out.push(Backend::NativeBigInt);
        #[cfg(feature = "long-division")]
        out.push(Backend::LongDivision);
        out
    }

    #[test]
    fn deterministic_sources_yield_known_ids() {
        for backend in backends() {
            let generator = PikaidGenerator::with_engine(
                MockTime { secs: 1_700_000_000 },
                CountingRand { next: Cell::new(35) },
                Engine::with_backend(backend).unwrap(),
            );
            assert_eq!(generator.next_id().unwrap(), "0s44we8000000000000000000z");
            assert_eq!(generator.next_id().unwrap(), "0s44we80000000000000000010");
        }
    }

    #[test]
    fn generated_ids_roundtrip_through_parse() {
        for backend in backends() {
            let engine = Engine::with_backend(backend).unwrap();
            let generator = PikaidGenerator::with_engine(
                MockTime { secs: 1_234_567_890 },
                ThreadRandom,
                engine,
            );
            for _ in 0..100 {
                let id = generator.next_id().unwrap();
                let parsed = parse_with(&engine, &id).unwrap();
                assert_eq!(parsed.seconds(), 1_234_567_890);
                // re-encoding the parsed parts gives the same string back
                assert_eq!(
                    encode_with(&engine, parsed.seconds(), parsed.random_bytes()).unwrap(),
                    id
                );
            }
        }
    }

    #[test]
    fn clock_past_segment_range_is_an_error() {
        let generator = PikaidGenerator::from_components(
            MockTime {
                secs: MAX_TIMESTAMP + 1,
            },
            ThreadRandom,
        )
        .unwrap();
        assert!(matches!(
            generator.next_id(),
            Err(Error::TimestampOutOfRange { .. })
        ));
    }

    #[test]
    fn generate_is_valid_and_current() {
        let start = SystemClock.current_secs();
        let id = generate().unwrap();
        let end = SystemClock.current_secs();

        assert_eq!(id.len(), 26);
        assert!(crate::is_valid(&id));
        let parsed = crate::parse(&id).unwrap();
        assert!(start <= parsed.seconds() && parsed.seconds() <= end);
    }
}
