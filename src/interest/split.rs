use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::interest::period_interest;
use crate::types::{CompoundingFrequency, InterestType};

/// division of one payment into interest and principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaymentSplit {
    pub principal_paid: Money,
    pub interest_paid: Money,
}

impl PaymentSplit {
    pub fn total(&self) -> Money {
        self.principal_paid + self.interest_paid
    }
}

/// split `payment_amount` against the interest accrued on `current_balance`
/// since the last payment
///
/// Interest is taken first and capped at the payment, so principal is never
/// negative. Both parts are rounded on their own and may miss the payment by
/// a cent.
pub fn payment_split(
    payment_amount: Money,
    current_balance: Money,
    annual_rate: Rate,
    interest_type: InterestType,
    compounding_frequency: Option<CompoundingFrequency>,
    days_since_last_payment: u32,
) -> PaymentSplit {
    let accrued = period_interest(
        current_balance,
        annual_rate,
        interest_type,
        compounding_frequency,
        days_since_last_payment,
    );

    let interest_paid = accrued.min(payment_amount);
    let principal_paid = (payment_amount - interest_paid).max(Money::ZERO);

    PaymentSplit {
        principal_paid,
        interest_paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_split_covers_interest_first() {
        let split = payment_split(
            Money::from_major(500),
            Money::from_major(10_000),
            Rate::from_percentage(dec!(10)),
            InterestType::Simple,
            None,
            30,
        );

        assert_eq!(split.interest_paid, Money::from_str_exact("82.19").unwrap());
        assert_eq!(split.principal_paid, Money::from_str_exact("417.81").unwrap());
        assert_eq!(split.total(), Money::from_major(500));
    }

    #[test]
    fn test_small_payment_is_all_interest() {
        let split = payment_split(
            Money::from_major(50),
            Money::from_major(10_000),
            Rate::from_percentage(dec!(10)),
            InterestType::Simple,
            None,
            30,
        );

        assert_eq!(split.interest_paid, Money::from_major(50));
        assert_eq!(split.principal_paid, Money::ZERO);
    }

    #[test]
    fn test_same_day_payment_is_all_principal() {
        let split = payment_split(
            Money::from_major(250),
            Money::from_major(4_000),
            Rate::from_percentage(dec!(22.9)),
            InterestType::Compound,
            Some(CompoundingFrequency::Daily),
            0,
        );

        assert_eq!(split.interest_paid, Money::ZERO);
        assert_eq!(split.principal_paid, Money::from_major(250));
    }

    #[test]
    fn test_split_is_repeatable() {
        let args = (
            Money::from_str_exact("321.45").unwrap(),
            Money::from_str_exact("7654.32").unwrap(),
            Rate::from_percentage(dec!(17.5)),
        );
        let first = payment_split(args.0, args.1, args.2, InterestType::Compound, None, 45);
        let second = payment_split(args.0, args.1, args.2, InterestType::Compound, None, 45);
        assert_eq!(first, second);
    }

    fn interest_type() -> impl Strategy<Value = InterestType> {
        prop_oneof![
            Just(InterestType::Simple),
            Just(InterestType::Compound),
            Just(InterestType::Fixed),
            Just(InterestType::Variable),
        ]
    }

    proptest! {
        #[test]
        fn prop_split_conserves_payment(
            payment_cents in 1i64..10_000_000,
            balance_cents in 0i64..100_000_000,
            rate_bps in 0u32..10_000,
            days in 0u32..400,
            interest_type in interest_type(),
        ) {
            let payment = Money::from_minor(payment_cents);
            let balance = Money::from_minor(balance_cents);
            let rate = Rate::from_decimal(Decimal::new(rate_bps as i64, 4));

            let split = payment_split(payment, balance, rate, interest_type, None, days);
            let accrued = period_interest(balance, rate, interest_type, None, days);

            prop_assert!(split.principal_paid >= Money::ZERO);
            prop_assert!(split.interest_paid >= Money::ZERO);
            prop_assert!(split.interest_paid <= payment);
            prop_assert!((split.total() - payment).abs() <= Money::CENT);
            if accrued >= payment {
                prop_assert_eq!(split.principal_paid, Money::ZERO);
            }
            prop_assert_eq!(split.principal_paid.as_decimal().round_dp(2), split.principal_paid.as_decimal());
            prop_assert_eq!(split.interest_paid.as_decimal().round_dp(2), split.interest_paid.as_decimal());
        }
    }
}
