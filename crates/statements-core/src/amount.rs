//! Overflow-checked decimal arithmetic for ledger totals.
//!
//! Stored amounts can sit anywhere in the `Decimal` range, so sums over them
//! can leave it. Statements report that as an error instead of aborting.

use rust_decimal::Decimal;

use crate::error::{Result, StatementsError};

fn overflow(op: &str, a: Decimal, b: Decimal) -> StatementsError {
    StatementsError::InvalidInput(format!(
        "Amounts out of range: {} {} {} overflows",
        a, op, b
    ))
}

pub(crate) fn add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow("+", a, b))
}

pub(crate) fn sub(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow("-", a, b))
}

pub(crate) fn sum<I>(values: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sum_is_exact() {
        assert_eq!(sum([dec!(0.1), dec!(0.2)]).unwrap(), dec!(0.3));
        assert_eq!(sum(Vec::new()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = add(Decimal::MAX, dec!(1)).unwrap_err();
        assert!(matches!(err, StatementsError::InvalidInput(_)));
        assert!(sub(Decimal::MIN, dec!(1)).is_err());
        assert!(sum([dec!(5e28), dec!(5e28)]).is_err());
    }
}
