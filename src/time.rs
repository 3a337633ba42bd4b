//! Time abstraction for platform-agnostic polling.

/// Monotonic tick count, commonly milliseconds.
///
/// The counter wraps silently on overflow; elapsed-time checks must go
/// through [`elapsed_since`] so wraparound cannot stall an animation.
pub type Ticks = u32;

/// Trait for abstracting monotonic clock sources.
///
/// Implement this for your timing system (a hardware timer, a tick counter
/// incremented from an interrupt, `std::time::Instant` on hosted targets).
/// The returned count only ever increases, apart from wrapping.
pub trait Clock {
    /// Returns the current tick count.
    fn now(&self) -> Ticks;
}

/// Ticks elapsed between `earlier` and `now`, safe across counter wraparound.
#[inline]
pub fn elapsed_since(now: Ticks, earlier: Ticks) -> Ticks {
    now.wrapping_sub(earlier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_counts_forward() {
        assert_eq!(elapsed_since(150, 100), 50);
        assert_eq!(elapsed_since(100, 100), 0);
    }

    #[test]
    fn elapsed_survives_wraparound() {
        let before = Ticks::MAX - 10;
        let after = before.wrapping_add(25);
        assert_eq!(elapsed_since(after, before), 25);
    }
}
