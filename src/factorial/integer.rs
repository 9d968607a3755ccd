use az::{CheckedAs, SaturatingAs, WrappingAs};
use std::fmt;
use std::ops::Sub;

/// How a multiplication whose product does not fit the integer width is resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Two's complement wraparound, the behavior of a C `int`
    Wrapping,
    /// Clamp to the minimum or maximum of the type
    Saturating,
    /// Report the overflow as an error
    Checked,
}

impl Default for OverflowPolicy {
    fn default() -> Self {
        OverflowPolicy::Wrapping
    }
}

/// The integer type both algorithms are instantiated with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegerWidth {
    W8,
    W16,
    W32,
    W64,
    W128,
}

impl Default for IntegerWidth {
    fn default() -> Self {
        IntegerWidth::W32
    }
}

impl IntegerWidth {
    pub fn bits(self) -> u32 {
        match self {
            IntegerWidth::W8 => 8,
            IntegerWidth::W16 => 16,
            IntegerWidth::W32 => 32,
            IntegerWidth::W64 => 64,
            IntegerWidth::W128 => 128,
        }
    }

    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(IntegerWidth::W8),
            16 => Some(IntegerWidth::W16),
            32 => Some(IntegerWidth::W32),
            64 => Some(IntegerWidth::W64),
            128 => Some(IntegerWidth::W128),
            _ => None,
        }
    }
}

/// Signed fixed-width integers the factorial algorithms operate on.
///
/// Every method is total: the policy decides what a multiplication that does
/// not fit produces, and `None` is only ever returned under
/// `OverflowPolicy::Checked`.
pub trait FixedWidth: Copy + Ord + Sub<Output = Self> + fmt::Debug + fmt::Display {
    const ZERO: Self;
    const ONE: Self;
    const BITS: u32;
    /// Largest `n` such that `n!` is representable
    const MAX_EXACT_INPUT: Self;

    fn wrapping_mul(self, rhs: Self) -> Self;
    fn saturating_mul(self, rhs: Self) -> Self;
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// `self - 1`, staying at the minimum instead of wrapping to the maximum
    fn saturating_dec(self) -> Self;

    fn to_i128(self) -> i128;

    /// Convert an `i128` to this width under `policy`
    fn narrow(value: i128, policy: OverflowPolicy) -> Option<Self>;

    fn mul_under(self, rhs: Self, policy: OverflowPolicy) -> Option<Self> {
        match policy {
            OverflowPolicy::Wrapping => Some(self.wrapping_mul(rhs)),
            OverflowPolicy::Saturating => Some(self.saturating_mul(rhs)),
            OverflowPolicy::Checked => self.checked_mul(rhs),
        }
    }
}

macro_rules! impl_fixed_width {
    ($($t:ident => $max_exact:expr),* $(,)?) => {
        $(
            impl FixedWidth for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const BITS: u32 = (std::mem::size_of::<$t>() * 8) as u32;
                const MAX_EXACT_INPUT: Self = $max_exact;

                fn wrapping_mul(self, rhs: Self) -> Self {
                    $t::wrapping_mul(self, rhs)
                }

                fn saturating_mul(self, rhs: Self) -> Self {
                    $t::saturating_mul(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    $t::checked_mul(self, rhs)
                }

                fn saturating_dec(self) -> Self {
                    $t::saturating_sub(self, 1)
                }

                fn to_i128(self) -> i128 {
                    i128::from(self)
                }

                fn narrow(value: i128, policy: OverflowPolicy) -> Option<Self> {
                    match policy {
                        OverflowPolicy::Wrapping => Some(value.wrapping_as::<$t>()),
                        OverflowPolicy::Saturating => Some(value.saturating_as::<$t>()),
                        OverflowPolicy::Checked => value.checked_as::<$t>(),
                    }
                }
            }
        )*
    };
}

impl_fixed_width!(i8 => 5, i16 => 7, i32 => 12, i64 => 20, i128 => 33);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_under_policies() {
        assert_eq!(
            100i8.mul_under(2, OverflowPolicy::Wrapping),
            Some(100i8.wrapping_mul(2))
        );
        assert_eq!(100i8.mul_under(2, OverflowPolicy::Saturating), Some(i8::MAX));
        assert_eq!(100i8.mul_under(2, OverflowPolicy::Checked), None);
        assert_eq!(60i8.mul_under(2, OverflowPolicy::Checked), Some(120));
    }

    #[test]
    fn test_saturating_dec_at_minimum() {
        assert_eq!(i32::MIN.saturating_dec(), i32::MIN);
        assert_eq!(0i32.saturating_dec(), -1);
        assert_eq!(5i64.saturating_dec(), 4);
    }

    #[test]
    fn test_narrow() {
        assert_eq!(i8::narrow(300, OverflowPolicy::Wrapping), Some(44));
        assert_eq!(i8::narrow(300, OverflowPolicy::Saturating), Some(i8::MAX));
        assert_eq!(i8::narrow(-300, OverflowPolicy::Saturating), Some(i8::MIN));
        assert_eq!(i8::narrow(300, OverflowPolicy::Checked), None);
        assert_eq!(i32::narrow(-7, OverflowPolicy::Checked), Some(-7));
        assert_eq!(i128::narrow(i128::MAX, OverflowPolicy::Checked), Some(i128::MAX));
    }

    #[test]
    fn test_max_exact_input_is_the_overflow_threshold() {
        fn check<T: FixedWidth>() {
            let mut acc = T::ONE;
            let mut n = T::ONE;
            while n <= T::MAX_EXACT_INPUT {
                acc = acc.checked_mul(n).expect("n! should fit below the threshold");
                n = T::narrow(n.to_i128() + 1, OverflowPolicy::Checked).unwrap();
            }
            assert_eq!(acc.checked_mul(n), None, "{}-bit threshold", T::BITS);
        }
        check::<i8>();
        check::<i16>();
        check::<i32>();
        check::<i64>();
        check::<i128>();
    }

    #[test]
    fn test_width_bits_round_trip() {
        for width in &[
            IntegerWidth::W8,
            IntegerWidth::W16,
            IntegerWidth::W32,
            IntegerWidth::W64,
            IntegerWidth::W128,
        ] {
            assert_eq!(IntegerWidth::from_bits(width.bits()), Some(*width));
        }
        assert_eq!(IntegerWidth::from_bits(24), None);
    }
}
