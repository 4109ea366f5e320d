//! Wall-Clock Timing
//!
//! Monotonic timing for a single sort run, backed by `std::time::Instant`.
//! Resolution is platform dependent but at least microsecond-level on every
//! tier-1 target, reported in nanoseconds.

/// Timer for measuring one sort invocation.
///
/// The timed region must contain the sort only: callers start the timer
/// immediately before the algorithm and stop it immediately after, before
/// any verification runs.
pub struct Timer {
    start: std::time::Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    /// Stop the timer and return elapsed nanoseconds
    #[inline(always)]
    pub fn stop(&self) -> u64 {
        self.start.elapsed().as_nanos() as u64
    }
}

/// Set CPU affinity to pin the current thread to a specific core
///
/// Benchmark timing wants uncontended CPU access; pinning avoids core
/// migrations between trials.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), std::io::Error> {
    use std::mem::MaybeUninit;

    unsafe {
        let mut set = MaybeUninit::<libc::cpu_set_t>::zeroed();
        let set_ref = set.assume_init_mut();

        libc::CPU_ZERO(set_ref);
        libc::CPU_SET(cpu, set_ref);

        let result = libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set_ref);

        if result == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }
}

/// CPU pinning is a no-op on platforms without `sched_setaffinity`.
#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), std::io::Error> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timer_measures_sleep() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let nanos = timer.stop();

        // At least 5ms, under 100ms (accounting for scheduling)
        assert!(nanos >= 5_000_000);
        assert!(nanos < 100_000_000);
    }

    #[test]
    fn test_timer_monotonic() {
        let timer = Timer::start();
        let a = timer.stop();
        let b = timer.stop();
        assert!(b >= a);
    }
}
