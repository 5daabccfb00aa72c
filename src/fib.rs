//! Naive double-recursive Fibonacci in two flavours.
//!
//! [`fib`] is the textbook definition. [`fib2`] has the same recursion tree but
//! calls [`init_fib`] at every node, so it does strictly more work per call while
//! returning the same value. Neither variant validates its input: anything below
//! 2, negatives included, is a base case and comes back unchanged.

use std::hint::black_box;

#[cfg(feature = "call-counts")]
use crate::utils::counters;

/// Largest index whose term still fits in an `i64`.
pub const MAX_I64_INDEX: i64 = 92;

/// Returns `3 + 3`.
///
/// The operands go through [`black_box`] so the sum is recomputed on every call
/// instead of being folded into the caller.
#[inline(never)]
pub fn init_fib() -> i64 {
    #[cfg(feature = "call-counts")]
    counters::increment_init_fib_count();

    black_box(3) + black_box(3)
}

/// Computes the `n`-th Fibonacci number by plain double recursion.
pub fn fib(n: i64) -> i64 {
    if n < 2 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

/// Same as [`fib`], but every invocation (base cases included) first runs
/// [`init_fib`] and throws the result away.
pub fn fib2(n: i64) -> i64 {
    black_box(init_fib());

    if n < 2 {
        return n;
    }
    fib2(n - 1) + fib2(n - 2)
}

/// Number of nodes in the recursion tree of `fib(n)`, i.e. how many times
/// `fib2(n)` calls [`init_fib`].
///
/// For `n >= 0` this is `2 * fib(n + 1) - 1`. Returns `None` once the count no
/// longer fits in a `u128` (from `n = 184` on); every `n <= MAX_I64_INDEX` fits.
pub fn call_count(n: i64) -> Option<u128> {
    if n < 2 {
        return Some(1);
    }
    let (mut prev, mut curr) = (1u128, 1u128);
    for _ in 2..=n {
        let next = curr.checked_add(prev)?.checked_add(1)?;
        (prev, curr) = (curr, next);
    }
    Some(curr)
}
