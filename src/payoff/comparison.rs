use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::decimal::Money;

use super::PayoffStrategy;

/// which strategy wins a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyVerdict {
    Snowball,
    Avalanche,
    Tie,
}

impl StrategyVerdict {
    fn from_ordering(snowball_vs_avalanche: Ordering) -> Self {
        match snowball_vs_avalanche {
            Ordering::Less => StrategyVerdict::Snowball,
            Ordering::Greater => StrategyVerdict::Avalanche,
            Ordering::Equal => StrategyVerdict::Tie,
        }
    }
}

impl fmt::Display for StrategyVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyVerdict::Snowball => f.write_str("snowball"),
            StrategyVerdict::Avalanche => f.write_str("avalanche"),
            StrategyVerdict::Tie => f.write_str("tie"),
        }
    }
}

/// side-by-side summary of a snowball and an avalanche plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub faster_strategy: StrategyVerdict,
    pub cheaper_strategy: StrategyVerdict,
    /// months between the two plans' finish
    pub time_difference: u32,
    /// interest saved by the cheaper plan
    pub interest_difference: Money,
}

/// compare two already-simulated plans
pub fn compare_strategies(snowball: &PayoffStrategy, avalanche: &PayoffStrategy) -> StrategyComparison {
    StrategyComparison {
        faster_strategy: StrategyVerdict::from_ordering(snowball.total_months.cmp(&avalanche.total_months)),
        cheaper_strategy: StrategyVerdict::from_ordering(snowball.total_interest.cmp(&avalanche.total_interest)),
        time_difference: snowball.total_months.abs_diff(avalanche.total_months),
        interest_difference: (snowball.total_interest - avalanche.total_interest).abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::Debt;
    use crate::decimal::Rate;
    use crate::payoff::calculate_strategy;
    use crate::types::StrategyKind;
    use rust_decimal_macros::dec;

    fn plan(strategy: StrategyKind, total_months: u32, total_interest: &str) -> PayoffStrategy {
        PayoffStrategy {
            strategy,
            total_months,
            total_interest: Money::from_str_exact(total_interest).unwrap(),
            total_payments: Money::ZERO,
            payoff_order: Vec::new(),
        }
    }

    #[test]
    fn test_avalanche_cheaper_snowball_faster() {
        let snowball = plan(StrategyKind::Snowball, 30, "1500.00");
        let avalanche = plan(StrategyKind::Avalanche, 32, "1350.50");

        let comparison = compare_strategies(&snowball, &avalanche);
        assert_eq!(comparison.faster_strategy, StrategyVerdict::Snowball);
        assert_eq!(comparison.cheaper_strategy, StrategyVerdict::Avalanche);
        assert_eq!(comparison.time_difference, 2);
        assert_eq!(comparison.interest_difference, Money::from_str_exact("149.50").unwrap());
    }

    #[test]
    fn test_ties() {
        let snowball = plan(StrategyKind::Snowball, 24, "800.00");
        let avalanche = plan(StrategyKind::Avalanche, 24, "800.00");

        let comparison = compare_strategies(&snowball, &avalanche);
        assert_eq!(comparison.faster_strategy, StrategyVerdict::Tie);
        assert_eq!(comparison.cheaper_strategy, StrategyVerdict::Tie);
        assert_eq!(comparison.time_difference, 0);
        assert_eq!(comparison.interest_difference, Money::ZERO);
    }

    #[test]
    fn test_compare_simulated_plans() {
        let debts = vec![
            Debt::new("Card", Money::from_major(6_000), Rate::from_percentage(dec!(24.9)))
                .with_minimum_payment(Money::from_major(200)),
            Debt::new("Car", Money::from_major(2_500), Rate::from_percentage(dec!(4.5)))
                .with_minimum_payment(Money::from_major(150)),
        ];

        let snowball = calculate_strategy(&debts, StrategyKind::Snowball, Money::from_major(100));
        let avalanche = calculate_strategy(&debts, StrategyKind::Avalanche, Money::from_major(100));
        let comparison = compare_strategies(&snowball, &avalanche);

        assert_eq!(
            comparison.time_difference,
            snowball.total_months.abs_diff(avalanche.total_months)
        );
        assert_eq!(
            comparison.interest_difference,
            (snowball.total_interest - avalanche.total_interest).abs()
        );
        assert_eq!(comparison, compare_strategies(&snowball, &avalanche));
    }
}
