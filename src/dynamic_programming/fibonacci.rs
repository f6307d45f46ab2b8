//! [Fibonacci Sequence]: `F(0) = 0`, `F(1) = 1` and
//! `F(n) = F(n - 1) + F(n - 2)`, computed with four strategies that trade time
//! for space.
//!
//! All four return the same value for every `n`. `F(93)` is the largest term
//! that fits in a [`u64`]; past it the addition overflows (a panic in debug
//! builds), which is not guarded against.
//!
//! [Fibonacci Sequence]: https://en.wikipedia.org/wiki/Fibonacci_sequence

use std::collections::HashMap;

/// Returns `F(n)` by direct recursion on the definition.
///
/// The same sub-problems are solved over and over, which is exactly what the
/// memoized and tabulated versions avoid.
///
/// # Time Complexity
///
/// Takes *O*(*φ^n*) time and *O*(*n*) stack space.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// assert_eq!(fib_recursive(10), 55);
/// ```
pub fn fib_recursive(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }

    fib_recursive(n - 1) + fib_recursive(n - 2)
}

/// Returns `F(n)` top-down, caching every computed term.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time, *O*(*n*) space for the memo and *O*(*n*) stack space.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// assert_eq!(fib_memo(50), 12_586_269_025);
/// ```
pub fn fib_memo(n: u32) -> u64 {
    let mut memo = HashMap::new();
    fib_memo_inner(n, &mut memo)
}

fn fib_memo_inner(n: u32, memo: &mut HashMap<u32, u64>) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    if let Some(&v) = memo.get(&n) {
        return v;
    }

    let val = fib_memo_inner(n - 1, memo) + fib_memo_inner(n - 2, memo);
    memo.insert(n, val);
    val
}

/// Returns `F(n)` bottom-up, filling a table of `F(0..=n)`.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time and *O*(*n*) space.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// assert_eq!(fib_tabulation(40), 102_334_155);
/// ```
pub fn fib_tabulation(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }

    let n = n as usize;
    let mut dp = vec![0u64; n + 1];
    dp[1] = 1;

    for i in 2..=n {
        dp[i] = dp[i - 1] + dp[i - 2];
    }

    dp[n]
}

/// Returns `F(n)` bottom-up, keeping only the last two terms.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time and *O*(*1*) space.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// assert_eq!(fib_optimized(10), 55);
/// assert_eq!(fib_optimized(93), 12_200_160_415_121_876_738);
/// ```
pub fn fib_optimized(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }

    let (mut prev, mut curr) = (0u64, 1u64);

    for _ in 2..=n {
        (prev, curr) = (curr, prev + curr);
    }

    curr
}
