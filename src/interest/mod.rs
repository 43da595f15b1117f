pub mod breakdown;
pub mod compound;
pub mod simple;
pub mod split;

use log::warn;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::types::{CompoundingFrequency, InterestType};

pub use breakdown::{interest_breakdown, InterestBreakdown, PeriodInterest, DEFAULT_PERIOD_DAYS};
pub use compound::{checked_compound_interest, compound_interest};
pub use simple::{checked_simple_interest, simple_interest};
pub use split::{payment_split, PaymentSplit};

/// days in the year used to convert day counts to years
pub const DAYS_PER_YEAR: u32 = 365;

/// convert a day count to a fraction of a year
pub fn years_from_days(days: u32) -> Decimal {
    Decimal::from(days) / Decimal::from(DAYS_PER_YEAR)
}

/// interest accrued on `principal` over one period of `period_days`
///
/// This is the only place interest types are dispatched; everything else
/// (splits, breakdowns, payoff simulation) goes through here. A compound debt
/// with no frequency compounds monthly. Saturates like `compound_interest`.
pub fn period_interest(
    principal: Money,
    annual_rate: Rate,
    interest_type: InterestType,
    compounding_frequency: Option<CompoundingFrequency>,
    period_days: u32,
) -> Money {
    checked_period_interest(principal, annual_rate, interest_type, compounding_frequency, period_days)
        .unwrap_or_else(|| {
            warn!(
                "{} interest on {} at {} over {} days overflows, saturating",
                interest_type, principal, annual_rate, period_days
            );
            saturated_interest(principal, annual_rate)
        })
}

/// `period_interest`, or `None` when the result is not representable
pub fn checked_period_interest(
    principal: Money,
    annual_rate: Rate,
    interest_type: InterestType,
    compounding_frequency: Option<CompoundingFrequency>,
    period_days: u32,
) -> Option<Money> {
    let time_years = years_from_days(period_days);

    match interest_type {
        InterestType::Simple | InterestType::Fixed => {
            checked_simple_interest(principal, annual_rate, time_years)
        }
        InterestType::Compound => checked_compound_interest(
            principal,
            annual_rate,
            time_years,
            compounding_frequency.unwrap_or_default(),
        ),
        // no rate history yet, so variable debts accrue like simple ones
        InterestType::Variable => checked_simple_interest(principal, annual_rate, time_years),
    }
}

/// the bound an unrepresentable interest amount is clamped to
pub(crate) fn saturated_interest(principal: Money, annual_rate: Rate) -> Money {
    if principal.is_negative() != annual_rate.as_decimal().is_sign_negative() {
        Money::MIN
    } else {
        Money::MAX
    }
}
