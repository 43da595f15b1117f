//! serialization support for presentation-layer views
use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::decimal::Money;
use crate::errors::Result;
use crate::payoff::{compare_strategies, PayoffSimulator, PayoffStrategy, StrategyComparison};
use crate::types::{DebtId, StrategyKind};

/// both strategies for the same debts, plus how they compare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyReport {
    pub extra_payment: Money,
    pub snowball: PayoffStrategy,
    pub avalanche: PayoffStrategy,
    pub comparison: StrategyComparison,
}

impl StrategyReport {
    pub fn build(simulator: &PayoffSimulator, debts: &[Debt], extra_payment: Money) -> Self {
        let snowball = simulator.calculate_strategy(debts, StrategyKind::Snowball, extra_payment);
        let avalanche = simulator.calculate_strategy(debts, StrategyKind::Avalanche, extra_payment);
        let comparison = compare_strategies(&snowball, &avalanche);

        Self {
            extra_payment,
            snowball,
            avalanche,
            comparison,
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// projected payoff date for one debt; `None` serializes as null ("will not pay off")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffProjectionView {
    pub debt_id: DebtId,
    pub debt_name: String,
    pub current_balance: Money,
    pub monthly_payment: Money,
    pub projected_payoff_date: Option<DateTime<Utc>>,
}

impl PayoffProjectionView {
    pub fn project(
        simulator: &PayoffSimulator,
        debt: &Debt,
        monthly_payment: Money,
        time_provider: &SafeTimeProvider,
    ) -> Self {
        Self {
            debt_id: debt.id,
            debt_name: debt.name.clone(),
            current_balance: debt.current_balance,
            monthly_payment,
            projected_payoff_date: simulator.projected_payoff_date(debt, monthly_payment, time_provider),
        }
    }

    pub fn will_pay_off(&self) -> bool {
        self.projected_payoff_date.is_some()
    }
}

impl PayoffStrategy {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
