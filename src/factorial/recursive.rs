use crate::factorial::factorial_result::{FactorialError, Result};
use crate::factorial::integer::{FixedWidth, OverflowPolicy};

/// Self-referential factorial with two's complement wraparound.
///
/// Every `x <= 0` hits the base case and yields `1`. A positive `x` recurses
/// `x` frames deep; running out of stack aborts the process.
pub fn recursive_fact<T: FixedWidth>(x: T) -> T {
    if x <= T::ZERO {
        return T::ONE;
    }
    x.wrapping_mul(recursive_fact(x - T::ONE))
}

/// Same recursion as `recursive_fact`, with every multiplication resolved by `policy`.
///
/// Under `OverflowPolicy::Checked` an input above `T::MAX_EXACT_INPUT` is
/// rejected before the first call, so no input can recurse deeper than that.
pub fn recursive_fact_with<T: FixedWidth>(x: T, policy: OverflowPolicy) -> Result<T> {
    if policy == OverflowPolicy::Checked && x > T::MAX_EXACT_INPUT {
        debug!(
            "Recursive factorial of {} rejected, the largest exact input is {}",
            x,
            T::MAX_EXACT_INPUT
        );
        return Err(overflow(x));
    }
    descend(x, x, policy)
}

fn descend<T: FixedWidth>(input: T, x: T, policy: OverflowPolicy) -> Result<T> {
    if x <= T::ZERO {
        return Ok(T::ONE);
    }
    let rest = descend(input, x - T::ONE, policy)?;
    x.mul_under(rest, policy).ok_or_else(|| overflow(input))
}

fn overflow<T: FixedWidth>(input: T) -> failure::Error {
    FactorialError::Overflow {
        input: input.to_i128(),
        bits: T::BITS,
    }
    .into()
}
