use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{EngineError, Result};

/// tuning constants for the payoff simulator and projections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// per-debt cap on simulated payment periods (600 = 50 years of months)
    pub max_periods: u32,
    /// a balance at or below this is considered paid off
    pub payoff_tolerance: Money,
    /// derived minimum payment covers this multiple of one period's interest
    pub minimum_interest_multiplier: Decimal,
    /// derived minimum payment is at least this fraction of the balance
    pub minimum_balance_fraction: Decimal,
    /// horizon for payoff date projections
    pub projection_horizon_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_periods: 600,
            payoff_tolerance: Money::CENT,
            minimum_interest_multiplier: dec!(1.1),
            minimum_balance_fraction: dec!(0.02),
            projection_horizon_days: 50 * 365,
        }
    }
}

impl EngineConfig {
    /// parse configuration from json, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_periods == 0 {
            return Err(invalid("max_periods must be greater than zero"));
        }
        if self.payoff_tolerance.is_negative() {
            return Err(invalid("payoff_tolerance cannot be negative"));
        }
        if self.minimum_interest_multiplier < Decimal::ONE {
            return Err(invalid("minimum_interest_multiplier must be at least 1"));
        }
        if self.minimum_balance_fraction < Decimal::ZERO || self.minimum_balance_fraction > Decimal::ONE {
            return Err(invalid("minimum_balance_fraction must be between 0 and 1"));
        }
        if self.projection_horizon_days == 0 {
            return Err(invalid("projection_horizon_days must be greater than zero"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> EngineError {
    EngineError::InvalidConfiguration {
        message: message.to_string(),
    }
}
