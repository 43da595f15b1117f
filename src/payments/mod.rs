use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::decimal::Money;
use crate::interest::{payment_split, PaymentSplit};
use crate::types::DebtId;

/// a payment recorded against a debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayment {
    pub debt_id: DebtId,
    pub amount: Money,
    pub payment_date: DateTime<Utc>,
    pub principal_paid: Money,
    pub interest_paid: Money,
}

impl DebtPayment {
    /// override the computed split with user-entered figures
    pub fn with_split(mut self, principal_paid: Money, interest_paid: Money) -> Self {
        self.principal_paid = principal_paid;
        self.interest_paid = interest_paid;
        self
    }

    pub fn split(&self) -> PaymentSplit {
        PaymentSplit {
            principal_paid: self.principal_paid,
            interest_paid: self.interest_paid,
        }
    }
}

/// whole days of interest accrual preceding `payment_date`
///
/// Accrual runs from the previous payment, or from the debt's start when
/// nothing has been paid yet. A payment dated before that anchor accrues nothing.
pub fn days_since_last_payment(
    payment_date: DateTime<Utc>,
    last_payment_date: Option<DateTime<Utc>>,
    debt_start_date: DateTime<Utc>,
) -> u32 {
    let anchor = last_payment_date.unwrap_or(debt_start_date);
    let days = (payment_date.date_naive() - anchor.date_naive()).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// preview the split of a payment against a debt's current balance
pub fn record_payment(
    debt: &Debt,
    amount: Money,
    payment_date: DateTime<Utc>,
    last_payment_date: Option<DateTime<Utc>>,
    debt_start_date: DateTime<Utc>,
) -> DebtPayment {
    let days = days_since_last_payment(payment_date, last_payment_date, debt_start_date);
    let split = payment_split(
        amount,
        debt.current_balance,
        debt.interest_rate,
        debt.interest_type,
        debt.compounding_frequency,
        days,
    );

    DebtPayment {
        debt_id: debt.id,
        amount,
        payment_date,
        principal_paid: split.principal_paid,
        interest_paid: split.interest_paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_days_from_previous_payment() {
        let days = days_since_last_payment(date(2024, 3, 1), Some(date(2024, 2, 1)), date(2023, 6, 1));
        assert_eq!(days, 29);
    }

    #[test]
    fn test_days_from_start_when_no_previous_payment() {
        let days = days_since_last_payment(date(2024, 2, 1), None, date(2024, 1, 1));
        assert_eq!(days, 31);
    }

    #[test]
    fn test_backdated_payment_accrues_nothing() {
        let days = days_since_last_payment(date(2024, 1, 1), Some(date(2024, 2, 1)), date(2023, 1, 1));
        assert_eq!(days, 0);
    }

    #[test]
    fn test_record_and_apply_payment() {
        let mut debt = Debt::new("Student loan", Money::from_major(10_000), Rate::from_percentage(dec!(10)));

        let payment = record_payment(
            &debt,
            Money::from_major(500),
            date(2024, 1, 31),
            None,
            date(2024, 1, 1),
        );

        assert_eq!(payment.debt_id, debt.id);
        assert_eq!(payment.interest_paid, Money::from_str_exact("82.19").unwrap());
        assert_eq!(payment.principal_paid, Money::from_str_exact("417.81").unwrap());

        debt.apply_payment(&payment);
        assert_eq!(debt.current_balance, Money::from_str_exact("9582.19").unwrap());
    }

    #[test]
    fn test_user_entered_split_overrides_preview() {
        let debt = Debt::new("Card", Money::from_major(2_000), Rate::from_percentage(dec!(24)));
        let payment = record_payment(&debt, Money::from_major(100), date(2024, 5, 1), None, date(2024, 4, 1))
            .with_split(Money::from_major(90), Money::from_major(10));

        assert_eq!(payment.split().principal_paid, Money::from_major(90));
        assert_eq!(payment.split().total(), Money::from_major(100));
    }
}
