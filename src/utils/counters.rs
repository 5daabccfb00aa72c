//! Global counter for [`init_fib`](crate::fib::init_fib) executions.
//!
//! Only incremented when the `call-counts` feature is enabled; otherwise it
//! stays at zero and the helper has no side effects.
use std::sync::atomic::{AtomicUsize, Ordering};

/// Count of `init_fib()` executions.
pub static INIT_FIB_COUNT: AtomicUsize = AtomicUsize::new(0);

#[inline(always)]
pub fn increment_init_fib_count() {
    INIT_FIB_COUNT.fetch_add(1, Ordering::Relaxed);
}

/// Reset the `init_fib` count.
pub fn reset_init_fib_count() {
    INIT_FIB_COUNT.store(0, Ordering::Relaxed);
}

/// Read the `init_fib` count.
pub fn get_init_fib_count() -> usize {
    INIT_FIB_COUNT.load(Ordering::Relaxed)
}

#[cfg(all(test, feature = "call-counts"))]
mod tests {
    use super::*;
    use crate::fib::{call_count, fib, fib2, init_fib};
    use serial_test::serial;

    #[test]
    #[serial]
    fn fib2_calls_helper_once_per_node() {
        for n in [-4, 0, 1, 2, 5, 10, 18] {
            reset_init_fib_count();
            fib2(n);
            assert_eq!(Some(get_init_fib_count() as u128), call_count(n), "n = {n}");
        }
    }

    #[test]
    #[serial]
    fn fib_never_calls_helper() {
        reset_init_fib_count();
        fib(18);
        assert_eq!(get_init_fib_count(), 0);
    }

    #[test]
    #[serial]
    fn direct_helper_calls_are_counted() {
        reset_init_fib_count();
        for _ in 0..7 {
            init_fib();
        }
        assert_eq!(get_init_fib_count(), 7);
    }
}
