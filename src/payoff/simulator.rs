use log::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::debt::Debt;
use crate::decimal::Money;
use crate::interest::period_interest;
use crate::types::StrategyKind;

use super::{DebtPayoff, PayoffStrategy};

/// simulates snowball and avalanche payoff plans
///
/// Debts are amortized one after another in strategy order rather than in
/// lock-step: each debt's plan starts its month counter where the previous
/// one finished, and the minimum payment of every finished debt rolls into
/// the payment of the next.
#[derive(Debug, Clone, Default)]
pub struct PayoffSimulator {
    config: EngineConfig,
}

impl PayoffSimulator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// simulate paying off `debts` in `strategy` order
    ///
    /// Debts without a positive balance are left out of the plan entirely.
    pub fn calculate_strategy(
        &self,
        debts: &[Debt],
        strategy: StrategyKind,
        extra_payment: Money,
    ) -> PayoffStrategy {
        let ordered = order_debts(debts, strategy);
        debug!(
            "simulating {} strategy for {} of {} debts, extra payment {}",
            strategy,
            ordered.len(),
            debts.len(),
            extra_payment
        );

        let mut month = 0;
        let mut rolling_extra = extra_payment;
        let mut total_interest = Money::ZERO;
        let mut total_payments = Money::ZERO;
        let mut payoff_order = Vec::with_capacity(ordered.len());

        for debt in ordered {
            let payoff = self.calculate_debt_payoff(debt, rolling_extra, month);

            month = payoff.payoff_month;
            total_interest += payoff.interest_paid;
            total_payments += payoff.total_paid;
            rolling_extra += self.minimum_payment(debt);

            payoff_order.push(payoff);
        }

        debug!(
            "{} strategy finishes in month {}: interest {}, payments {}",
            strategy, month, total_interest, total_payments
        );

        PayoffStrategy {
            strategy,
            total_months: month,
            total_interest,
            total_payments,
            payoff_order,
        }
    }

    /// amortize a single debt, paying its minimum plus `extra_payment` each period
    ///
    /// The month counter continues from `start_month`. The last payment is clipped to
    /// the remaining balance plus that period's interest. When the period cap is hit
    /// the plan is returned as-is with the balance still outstanding.
    pub fn calculate_debt_payoff(&self, debt: &Debt, extra_payment: Money, start_month: u32) -> DebtPayoff {
        let period_days = debt.payment_frequency.period_days();
        let scheduled_payment = self.minimum_payment(debt) + extra_payment;

        let mut balance = debt.current_balance;
        let mut month = start_month;
        let mut periods = 0;
        let mut total_paid = Money::ZERO;
        let mut interest_paid = Money::ZERO;

        while balance > self.config.payoff_tolerance && periods < self.config.max_periods {
            let interest = period_interest(
                balance,
                debt.interest_rate,
                debt.interest_type,
                debt.compounding_frequency,
                period_days,
            );
            let payment = scheduled_payment.min(balance.saturating_add(interest));
            let interest_portion = interest.min(payment);
            let principal_portion = (payment - interest_portion).max(Money::ZERO);

            balance -= principal_portion;
            total_paid += payment;
            interest_paid += interest_portion;
            month += 1;
            periods += 1;
        }

        let paid_off = balance <= self.config.payoff_tolerance;
        if paid_off {
            trace!(
                "debt {} paid off in month {} (started month {}, paying {})",
                debt.name, month, start_month, scheduled_payment
            );
        } else {
            warn!(
                "debt {} not paid off after {} periods at {}, {} remaining",
                debt.name, periods, scheduled_payment, balance
            );
        }

        DebtPayoff {
            debt_id: debt.id,
            debt_name: debt.name.clone(),
            start_month,
            payoff_month: month,
            scheduled_payment,
            total_paid,
            interest_paid,
            remaining_balance: balance,
            paid_off,
        }
    }

    /// configured minimum payment, or a derived floor when none is set
    ///
    /// The floor covers 110% of one period's interest or 2% of the balance,
    /// whichever is larger, so an unconfigured debt still makes progress.
    /// A floor that rounds to zero on a balance above the payoff tolerance
    /// becomes one cent (or the whole balance, if smaller).
    pub fn minimum_payment(&self, debt: &Debt) -> Money {
        if let Some(minimum) = debt.configured_minimum() {
            return minimum;
        }

        let interest = period_interest(
            debt.current_balance,
            debt.interest_rate,
            debt.interest_type,
            debt.compounding_frequency,
            debt.payment_frequency.period_days(),
        );
        let interest_floor = interest.fraction(self.config.minimum_interest_multiplier);
        let balance_floor = debt.current_balance.fraction(self.config.minimum_balance_fraction);

        let floor = interest_floor.max(balance_floor);
        if floor < Money::CENT && debt.current_balance > self.config.payoff_tolerance {
            return Money::CENT.min(debt.current_balance);
        }
        floor
    }
}

/// active debts sorted for `strategy`
///
/// Snowball takes the smallest balance first; avalanche the highest rate first,
/// smaller balance winning ties. Both sorts are stable.
pub fn order_debts(debts: &[Debt], strategy: StrategyKind) -> Vec<&Debt> {
    let mut active: Vec<&Debt> = debts.iter().filter(|debt| debt.is_active()).collect();

    match strategy {
        StrategyKind::Snowball => {
            active.sort_by(|a, b| a.current_balance.cmp(&b.current_balance));
        }
        StrategyKind::Avalanche => {
            active.sort_by(|a, b| {
                b.interest_rate
                    .cmp(&a.interest_rate)
                    .then_with(|| a.current_balance.cmp(&b.current_balance))
            });
        }
    }

    active
}
