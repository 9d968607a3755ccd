use crate::factorial::factorial_result::{FactorialError, Result};
use crate::factorial::integer::{FixedWidth, OverflowPolicy};

/// Loop-based factorial with two's complement wraparound.
///
/// The accumulator starts at `x` and is multiplied by `x - 1, x - 2, ..., 1`.
/// Nothing guards the non-positive inputs: `0` yields `0` and a negative `x`
/// is returned unchanged, since the counter never starts above zero.
pub fn iterative_fact<T: FixedWidth>(x: T) -> T {
    let mut acc = x;
    let mut counter = x.saturating_dec();
    while counter > T::ZERO {
        acc = acc.wrapping_mul(counter);
        counter = counter - T::ONE;
    }
    acc
}

/// Same loop as `iterative_fact`, with every multiplication resolved by `policy`
pub fn iterative_fact_with<T: FixedWidth>(x: T, policy: OverflowPolicy) -> Result<T> {
    let mut acc = x;
    let mut counter = x.saturating_dec();
    while counter > T::ZERO {
        acc = match acc.mul_under(counter, policy) {
            Some(product) => product,
            None => {
                debug!("Iterative factorial of {} overflowed at counter {}", x, counter);
                return Err(FactorialError::Overflow {
                    input: x.to_i128(),
                    bits: T::BITS,
                }
                .into());
            }
        };
        counter = counter - T::ONE;
    }
    Ok(acc)
}
