use std::convert::TryFrom;

/// Largest `n` whose factorial fits in an `i128`
pub const MAX_EXACT_I128: i128 = 33;

lazy_static! {
    static ref EXACT_FACTORIALS: Vec<i128> = {
        let mut table = vec![1i128];
        for n in 1..=MAX_EXACT_I128 {
            let prev = table[table.len() - 1];
            table.push(prev * n);
        }
        table
    };
}

/// The mathematical factorial of `n`, if `n` is non-negative and `n!` fits in an `i128`
pub fn exact_factorial(n: i128) -> Option<i128> {
    usize::try_from(n)
        .ok()
        .and_then(|index| EXACT_FACTORIALS.get(index))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        assert_eq!(exact_factorial(0), Some(1));
        assert_eq!(exact_factorial(1), Some(1));
        assert_eq!(exact_factorial(5), Some(120));
        assert_eq!(exact_factorial(13), Some(6_227_020_800));
        assert_eq!(
            exact_factorial(MAX_EXACT_I128),
            Some(8_683_317_618_811_886_495_518_194_401_280_000_000)
        );
    }

    #[test]
    fn test_outside_the_table() {
        assert_eq!(exact_factorial(-1), None);
        assert_eq!(exact_factorial(MAX_EXACT_I128 + 1), None);
        assert_eq!(exact_factorial(i128::MAX), None);
    }
}
