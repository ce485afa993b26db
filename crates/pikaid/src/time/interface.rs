/// A trait for time sources that return a wall-clock timestamp.
///
/// The unit is **whole seconds** since the Unix epoch. Sub-second precision,
/// skew and monotonicity are the source's concern, not the codec's.
///
/// # Example
///
/// ```
/// use pikaid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_secs(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_secs(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in seconds since 1970-01-01 UTC.
    fn current_secs(&self) -> T;
}
