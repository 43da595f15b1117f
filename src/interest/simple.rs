use log::warn;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

use super::saturated_interest;

/// simple interest: `P * r * t`, rounded to cents
///
/// Used for `simple` and `fixed` debts, and as the stand-in for `variable`
/// ones. Inputs are not validated; a negative principal yields negative interest.
pub fn simple_interest(principal: Money, annual_rate: Rate, time_years: Decimal) -> Money {
    checked_simple_interest(principal, annual_rate, time_years).unwrap_or_else(|| {
        warn!(
            "simple interest on {} at {} over {} years overflows, saturating",
            principal, annual_rate, time_years
        );
        saturated_interest(principal, annual_rate)
    })
}

/// simple interest, or `None` when it is not representable
pub fn checked_simple_interest(principal: Money, annual_rate: Rate, time_years: Decimal) -> Option<Money> {
    principal
        .as_decimal()
        .checked_mul(annual_rate.as_decimal())?
        .checked_mul(time_years)
        .map(Money::from_decimal)
}
