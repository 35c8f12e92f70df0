// Copyright 2021 - 2025 Martin Pool

//! The factorial function.

/// Return `n!` as an `i64`.
///
/// Any `n` below 2 gives 1, including negative numbers, which are not
/// rejected. Results past `20!` wrap around silently rather than panicking.
pub fn factorial(n: i32) -> i64 {
    match n {
        0 | 1 => 1,
        n => {
            let mut result: i64 = 1;
            for i in 2..=n {
                result = result.wrapping_mul(i64::from(i));
                // Every further product of zero is zero.
                if result == 0 {
                    break;
                }
            }
            result
        }
    }
}
