use chrono::{DateTime, Duration, Months, Utc};
use hourglass_rs::SafeTimeProvider;
use log::warn;

use crate::debt::Debt;
use crate::decimal::Money;
use crate::interest::period_interest;

use super::PayoffSimulator;

impl PayoffSimulator {
    /// date the debt clears if `monthly_payment` is paid every month from now
    ///
    /// Each month accrues interest for its actual calendar length. Returns `None`
    /// when the balance would not clear within the projection horizon, meaning the
    /// payment is too small to pay the debt off at all.
    pub fn projected_payoff_date(
        &self,
        debt: &Debt,
        monthly_payment: Money,
        time_provider: &SafeTimeProvider,
    ) -> Option<DateTime<Utc>> {
        let config = self.config();
        let start = time_provider.now();
        let horizon = start + Duration::days(i64::from(config.projection_horizon_days));

        let mut balance = debt.current_balance;
        let mut date = start;
        let mut months = 0;

        while balance > config.payoff_tolerance {
            months += 1;
            // step from the start date so month-end dates do not drift
            let next = start.checked_add_months(Months::new(months))?;
            if next > horizon {
                warn!(
                    "debt {} does not pay off within {} days at {} per month",
                    debt.name, config.projection_horizon_days, monthly_payment
                );
                return None;
            }

            let days = u32::try_from((next - date).num_days()).unwrap_or(0);
            let interest = period_interest(
                balance,
                debt.interest_rate,
                debt.interest_type,
                debt.compounding_frequency,
                days,
            );
            let principal = (monthly_payment - interest).max(Money::ZERO).min(balance);

            balance -= principal;
            date = next;
        }

        Some(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use chrono::TimeZone;
    use hourglass_rs::TimeSource;
    use rust_decimal_macros::dec;

    fn fixed_time(y: i32, m: u32, d: u32) -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()))
    }

    #[test]
    fn test_interest_free_payoff_date() {
        let time = fixed_time(2024, 1, 31);
        let debt = Debt::new("Phone", Money::from_major(1_200), Rate::ZERO);

        let date = PayoffSimulator::default()
            .projected_payoff_date(&debt, Money::from_major(100), &time)
            .unwrap();

        assert_eq!(date, Utc.with_ymd_and_hms(2025, 1, 31, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_interest_extends_payoff() {
        let time = fixed_time(2024, 3, 1);
        let interest_free = Debt::new("Loan", Money::from_major(5_000), Rate::ZERO);
        let charged = Debt::new("Loan", Money::from_major(5_000), Rate::from_percentage(dec!(15)));
        let simulator = PayoffSimulator::default();

        let without = simulator
            .projected_payoff_date(&interest_free, Money::from_major(250), &time)
            .unwrap();
        let with = simulator
            .projected_payoff_date(&charged, Money::from_major(250), &time)
            .unwrap();

        assert_eq!(without, Utc.with_ymd_and_hms(2025, 11, 1, 9, 0, 0).unwrap());
        assert!(with > without);
    }

    #[test]
    fn test_payment_below_interest_never_pays_off() {
        let time = fixed_time(2024, 1, 1);
        let debt = Debt::new("Card", Money::from_major(20_000), Rate::from_percentage(dec!(24)));

        let date = PayoffSimulator::default().projected_payoff_date(&debt, Money::from_major(300), &time);
        assert!(date.is_none());
    }

    #[test]
    fn test_zero_payment_never_pays_off() {
        let time = fixed_time(2024, 1, 1);
        let debt = Debt::new("Loan", Money::from_major(100), Rate::ZERO);
        assert!(projected(&debt, Money::ZERO, &time).is_none());
    }

    #[test]
    fn test_already_paid_off_is_now() {
        let time = fixed_time(2024, 6, 15);
        let debt = Debt::new("Done", Money::ZERO, Rate::from_percentage(dec!(9)));
        assert_eq!(projected(&debt, Money::from_major(50), &time), Some(time.now()));
    }

    #[test]
    fn test_projection_is_anchored_to_provider_time() {
        let time = fixed_time(2024, 1, 1);
        let control = time.test_control().unwrap();
        let debt = Debt::new("Loan", Money::from_major(300), Rate::ZERO);

        let first = projected(&debt, Money::from_major(100), &time);
        assert_eq!(first, projected(&debt, Money::from_major(100), &time));

        control.advance(Duration::days(31));
        let later = projected(&debt, Money::from_major(100), &time);
        assert_eq!(later, Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()));
        assert!(later > first);
    }

    fn projected(debt: &Debt, payment: Money, time: &SafeTimeProvider) -> Option<DateTime<Utc>> {
        crate::payoff::projected_payoff_date(debt, payment, time)
    }
}
