pub mod config;
pub mod debt;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod payments;
pub mod payoff;
pub mod serialization;
pub mod types;

// re-export key types
pub use config::EngineConfig;
pub use debt::{debts_from_json, Debt};
pub use decimal::{Money, Rate};
pub use errors::{EngineError, Result};
pub use interest::{
    checked_period_interest, compound_interest, interest_breakdown, payment_split, period_interest,
    simple_interest, InterestBreakdown, PaymentSplit, PeriodInterest,
};
pub use payments::{days_since_last_payment, record_payment, DebtPayment};
pub use payoff::{
    calculate_debt_payoff, calculate_strategy, compare_strategies, minimum_payment,
    projected_payoff_date, DebtPayoff, PayoffSimulator, PayoffStrategy, StrategyComparison,
    StrategyVerdict,
};
pub use serialization::{PayoffProjectionView, StrategyReport};
pub use types::{CompoundingFrequency, DebtId, InterestType, PaymentFrequency, StrategyKind};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
