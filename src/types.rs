use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::EngineError;

/// unique identifier for a debt
pub type DebtId = Uuid;

/// how interest on a debt is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestType {
    Simple,
    Compound,
    /// computed as simple interest
    Fixed,
    /// computed as simple interest until rate history is modelled
    Variable,
}

/// compounding frequency for compound-interest debts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Daily,
    #[default]
    Monthly,
    Yearly,
}

impl CompoundingFrequency {
    /// number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Yearly => 1,
        }
    }
}

/// how often a debt is paid; each maps to a fixed day count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    Yearly,
}

impl PaymentFrequency {
    /// approximate days in one payment period
    pub fn period_days(&self) -> u32 {
        match self {
            PaymentFrequency::Weekly => 7,
            PaymentFrequency::Biweekly => 14,
            PaymentFrequency::Monthly => 30,
            PaymentFrequency::Yearly => 365,
        }
    }
}

/// debt payoff ordering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// smallest balance first
    Snowball,
    /// highest interest rate first
    Avalanche,
}

macro_rules! tagged_enum {
    ($ty:ident, $err:ident, { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $tag),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($tag => Ok($ty::$variant),)+
                    _ => Err(EngineError::$err { value: s.to_string() }),
                }
            }
        }
    };
}

tagged_enum!(InterestType, UnknownInterestType, {
    Simple => "simple",
    Compound => "compound",
    Fixed => "fixed",
    Variable => "variable",
});

tagged_enum!(CompoundingFrequency, UnknownCompoundingFrequency, {
    Daily => "daily",
    Monthly => "monthly",
    Yearly => "yearly",
});

tagged_enum!(PaymentFrequency, UnknownPaymentFrequency, {
    Weekly => "weekly",
    Biweekly => "biweekly",
    Monthly => "monthly",
    Yearly => "yearly",
});

tagged_enum!(StrategyKind, UnknownStrategy, {
    Snowball => "snowball",
    Avalanche => "avalanche",
});
