use crate::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// A `TimeSource` reading `SystemTime::now()` on every call.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource<u64> for SystemClock {
    /// # Panics
    ///
    /// Panics if the system clock is set before the Unix epoch.
    fn current_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System clock before UNIX_EPOCH")
            .as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_current_wall_clock() {
        let before = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        let now = SystemClock.current_secs();
        let after = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        assert!(before <= now && now <= after);
    }
}
