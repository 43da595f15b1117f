use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unknown interest type: {value}")]
    UnknownInterestType {
        value: String,
    },

    #[error("unknown compounding frequency: {value}")]
    UnknownCompoundingFrequency {
        value: String,
    },

    #[error("unknown payment frequency: {value}")]
    UnknownPaymentFrequency {
        value: String,
    },

    #[error("unknown payoff strategy: {value}")]
    UnknownStrategy {
        value: String,
    },

    #[error("invalid amount: {value}")]
    InvalidAmount {
        value: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
