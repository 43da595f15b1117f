use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::interest::{checked_period_interest, years_from_days};
use crate::types::{CompoundingFrequency, InterestType};

/// period length used when a breakdown does not specify one
pub const DEFAULT_PERIOD_DAYS: u32 = 30;

/// one row of an interest breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInterest {
    /// 1-based period number
    pub period: u32,
    pub principal: Money,
    pub interest: Money,
    pub total: Money,
}

/// period-by-period interest ledger with totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestBreakdown {
    pub principal: Money,
    pub rate: Rate,
    pub time_in_years: Decimal,
    pub interest_amount: Money,
    pub total_amount: Money,
    pub breakdown: Vec<PeriodInterest>,
}

/// accrue interest over `number_of_periods` periods of `period_days` each
/// (30 when `None`)
///
/// Compound debts roll each period's total into the next period's principal;
/// every other type accrues on the original principal throughout. The ledger
/// stops early, with totals covering only the rows produced, once an amount
/// no longer fits in a `Decimal`.
pub fn interest_breakdown(
    principal: Money,
    rate: Rate,
    interest_type: InterestType,
    compounding_frequency: Option<CompoundingFrequency>,
    number_of_periods: u32,
    period_days: Option<u32>,
) -> InterestBreakdown {
    let period_days = period_days.unwrap_or(DEFAULT_PERIOD_DAYS);
    let mut breakdown = Vec::with_capacity(number_of_periods as usize);
    let mut current_principal = principal;
    let mut interest_amount = Money::ZERO;

    for period in 1..=number_of_periods {
        let accrued = checked_period_interest(
            current_principal,
            rate,
            interest_type,
            compounding_frequency,
            period_days,
        )
        .and_then(|interest| {
            let total = current_principal.checked_add(interest)?;
            let running = interest_amount.checked_add(interest)?;
            Some((interest, total, running))
        });

        let Some((interest, total, running)) = accrued else {
            warn!(
                "interest breakdown overflows at period {} of {}, stopping with {} principal",
                period, number_of_periods, current_principal
            );
            break;
        };

        breakdown.push(PeriodInterest {
            period,
            principal: current_principal,
            interest,
            total,
        });
        interest_amount = running;

        if interest_type == InterestType::Compound {
            current_principal = total;
        }
    }

    let covered_periods = breakdown.len() as u32;
    InterestBreakdown {
        principal,
        rate,
        time_in_years: years_from_days(covered_periods.saturating_mul(period_days)),
        interest_amount,
        total_amount: principal.saturating_add(interest_amount),
        breakdown,
    }
}
