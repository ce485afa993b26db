/// A trait for sources of random values.
///
/// This abstraction allows you to plug in the platform CSPRNG or a fixed
/// source in tests. Identifier generation asks for a `[u8; 12]` per call.
///
/// # Example
/// ```
/// use pikaid::RandSource;
///
/// struct FixedRand;
/// impl RandSource<[u8; 12]> for FixedRand {
///     fn rand(&self) -> [u8; 12] {
///         [7; 12]
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), [7; 12]);
/// ```
pub trait RandSource<T> {
    /// Returns a fresh random value, independent of previous calls.
    fn rand(&self) -> T;
}
