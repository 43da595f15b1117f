use log::warn;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};

use crate::decimal::{Money, Rate};
use crate::types::CompoundingFrequency;

use super::saturated_interest;

/// scale the exponent is rounded to before checking for a whole number of periods
const EXPONENT_DP: u32 = 20;

/// compound interest over `time_years`: `P(1 + r/n)^(nt) - P`, rounded to cents
///
/// Saturates at `Money::MAX` (or `Money::MIN` for a negative principal) when
/// the result does not fit in a `Decimal`.
pub fn compound_interest(
    principal: Money,
    annual_rate: Rate,
    time_years: Decimal,
    frequency: CompoundingFrequency,
) -> Money {
    checked_compound_interest(principal, annual_rate, time_years, frequency).unwrap_or_else(|| {
        warn!(
            "compound interest on {} at {} over {} years overflows, saturating",
            principal, annual_rate, time_years
        );
        saturated_interest(principal, annual_rate)
    })
}

/// compound interest, or `None` when it is not representable
pub fn checked_compound_interest(
    principal: Money,
    annual_rate: Rate,
    time_years: Decimal,
    frequency: CompoundingFrequency,
) -> Option<Money> {
    if time_years.is_zero() || principal.is_zero() || annual_rate.is_zero() {
        return Some(Money::ZERO);
    }

    let n = Decimal::from(frequency.periods_per_year());
    let base = Decimal::ONE + annual_rate.as_decimal() / n;
    let exponent = n.checked_mul(time_years)?.round_dp(EXPONENT_DP);

    let principal = principal.as_decimal();
    let amount = principal.checked_mul(compound_factor(base, exponent)?)?;
    amount.checked_sub(principal).map(Money::from_decimal)
}

/// `base^exponent`, exact for whole periods and via ln/exp otherwise
fn compound_factor(base: Decimal, exponent: Decimal) -> Option<Decimal> {
    if exponent.fract().is_zero() {
        if let Some(factor) = exponent.to_i64().and_then(|periods| base.checked_powi(periods)) {
            return Some(factor);
        }
    }

    if let Some(factor) = base.checked_powd(exponent) {
        return Some(factor);
    }

    // outside decimal range unless the float path says otherwise
    base.to_f64()
        .zip(exponent.to_f64())
        .map(|(b, e)| b.powf(e))
        .filter(|factor| factor.is_finite())
        .and_then(Decimal::from_f64)
}
