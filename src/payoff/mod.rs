pub mod comparison;
pub mod projection;
pub mod simulator;

use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::decimal::Money;
use crate::types::{DebtId, StrategyKind};

pub use comparison::{compare_strategies, StrategyComparison, StrategyVerdict};
pub use simulator::{order_debts, PayoffSimulator};

/// payoff plan for a single debt within a strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub debt_id: DebtId,
    pub debt_name: String,
    /// month counter when this debt's plan began
    pub start_month: u32,
    /// month counter when the balance cleared, or when the period cap was hit
    pub payoff_month: u32,
    /// scheduled payment per period (minimum plus rolled-over extra)
    pub scheduled_payment: Money,
    pub total_paid: Money,
    pub interest_paid: Money,
    /// balance left at the end of the plan; zero unless the cap was reached
    pub remaining_balance: Money,
    pub paid_off: bool,
}

/// result of simulating a payoff strategy across a set of debts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffStrategy {
    pub strategy: StrategyKind,
    pub total_months: u32,
    pub total_interest: Money,
    pub total_payments: Money,
    /// debts in strategy order, not completion order
    pub payoff_order: Vec<DebtPayoff>,
}

impl PayoffStrategy {
    /// every debt in the plan clears within the period cap
    pub fn is_achievable(&self) -> bool {
        self.payoff_order.iter().all(|entry| entry.paid_off)
    }

    pub fn entry(&self, debt_id: DebtId) -> Option<&DebtPayoff> {
        self.payoff_order.iter().find(|entry| entry.debt_id == debt_id)
    }
}

/// simulate `strategy` over `debts` with the default engine settings
pub fn calculate_strategy(debts: &[Debt], strategy: StrategyKind, extra_payment: Money) -> PayoffStrategy {
    PayoffSimulator::default().calculate_strategy(debts, strategy, extra_payment)
}

/// amortize one debt with the default engine settings
pub fn calculate_debt_payoff(debt: &Debt, extra_payment: Money, start_month: u32) -> DebtPayoff {
    PayoffSimulator::default().calculate_debt_payoff(debt, extra_payment, start_month)
}

/// configured or derived minimum payment with the default engine settings
pub fn minimum_payment(debt: &Debt) -> Money {
    PayoffSimulator::default().minimum_payment(debt)
}

/// projected payoff date with the default engine settings
pub fn projected_payoff_date(
    debt: &Debt,
    monthly_payment: Money,
    time_provider: &SafeTimeProvider,
) -> Option<DateTime<Utc>> {
    PayoffSimulator::default().projected_payoff_date(debt, monthly_payment, time_provider)
}
