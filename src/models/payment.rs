use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::formatting::format_money;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaymentMethodError {
    #[error("Invalid payment type.")]
    InvalidChoice(i64),
}

/// How the customer settles the bill. Paying only produces the
/// confirmation text; there is no failure mode.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    pub fn pay(&self, amount: Decimal) -> String {
        format!("Paid {} using {}.", format_money(amount), self)
    }
}

impl TryFrom<i64> for PaymentMethod {
    type Error = PaymentMethodError;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(PaymentMethod::Cash),
            2 => Ok(PaymentMethod::Card),
            other => Err(PaymentMethodError::InvalidChoice(other)),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Card => write!(f, "Credit Card"),
        }
    }
}
