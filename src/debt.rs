use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::payments::DebtPayment;
use crate::types::{CompoundingFrequency, DebtId, InterestType, PaymentFrequency};

/// point-in-time snapshot of a liability, as supplied by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    pub name: String,
    pub current_balance: Money,
    /// annual percentage in JSON ("6.9" for 6.9%)
    #[serde(with = "crate::decimal::percentage")]
    pub interest_rate: Rate,
    pub interest_type: InterestType,
    #[serde(default)]
    pub compounding_frequency: Option<CompoundingFrequency>,
    #[serde(default)]
    pub minimum_payment: Option<Money>,
    #[serde(default)]
    pub payment_frequency: PaymentFrequency,
}

impl Debt {
    /// new simple-interest debt paid monthly with no configured minimum
    pub fn new(name: impl Into<String>, current_balance: Money, interest_rate: Rate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            current_balance,
            interest_rate,
            interest_type: InterestType::Simple,
            compounding_frequency: None,
            minimum_payment: None,
            payment_frequency: PaymentFrequency::Monthly,
        }
    }

    pub fn with_id(mut self, id: DebtId) -> Self {
        self.id = id;
        self
    }

    pub fn with_minimum_payment(mut self, minimum_payment: Money) -> Self {
        self.minimum_payment = Some(minimum_payment);
        self
    }

    pub fn with_payment_frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.payment_frequency = frequency;
        self
    }

    /// switch to compound interest; `None` compounds monthly
    pub fn compounded(mut self, frequency: Option<CompoundingFrequency>) -> Self {
        self.interest_type = InterestType::Compound;
        self.compounding_frequency = frequency;
        self
    }

    pub fn with_interest_type(mut self, interest_type: InterestType) -> Self {
        self.interest_type = interest_type;
        self
    }

    /// outstanding balance above zero
    pub fn is_active(&self) -> bool {
        self.current_balance.is_positive()
    }

    /// configured minimum, when it is a usable positive amount
    pub fn configured_minimum(&self) -> Option<Money> {
        self.minimum_payment.filter(|m| m.is_positive())
    }

    /// reduce the balance by a recorded payment's principal, never below zero
    pub fn apply_payment(&mut self, payment: &DebtPayment) {
        let applied = payment.principal_paid.min(self.current_balance);
        self.current_balance -= applied;
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// parse a json array of debt snapshots
pub fn debts_from_json(json: &str) -> Result<Vec<Debt>> {
    Ok(serde_json::from_str(json)?)
}
