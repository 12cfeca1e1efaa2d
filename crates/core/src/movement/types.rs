//! Movement domain types.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::date::MovementDate;
use super::error::MovementError;

/// Opaque movement identifier assigned by the API layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementId(pub String);

impl MovementId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for MovementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Money coming in.
    #[serde(alias = "ingreso")]
    Income,
    /// Money going out.
    #[serde(alias = "egreso", alias = "gasto")]
    Expense,
    /// Any other value; counts toward neither total.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for MovementType {
    type Err = MovementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "ingreso" => Ok(Self::Income),
            "expense" | "egreso" | "gasto" => Ok(Self::Expense),
            _ => Err(MovementError::UnknownType(s.to_string())),
        }
    }
}

/// A single income or expense record.
///
/// The amount is stored unsigned; the sign comes from `movement_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Opaque identifier.
    #[serde(alias = "_id")]
    pub id: MovementId,
    /// Calendar date of the movement.
    #[serde(default, alias = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<MovementDate>,
    /// Creation timestamp, used when `date` is missing.
    #[serde(
        default,
        alias = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<MovementDate>,
    /// Income or expense.
    #[serde(rename = "type", alias = "tipo")]
    pub movement_type: MovementType,
    /// Non-negative amount.
    #[serde(alias = "monto")]
    pub amount: Decimal,
    /// Free-text description.
    #[serde(default, alias = "concepto")]
    pub concept: String,
    /// Optional category label.
    #[serde(default, alias = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Movement {
    /// Creates a movement dated `date` with empty labels.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        date: MovementDate,
        movement_type: MovementType,
        amount: Decimal,
    ) -> Self {
        Self {
            id: MovementId::new(id),
            date: Some(date),
            created_at: None,
            movement_type,
            amount,
            concept: String::new(),
            category: None,
        }
    }

    /// Sets the concept label.
    #[must_use]
    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = concept.into();
        self
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: MovementDate) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Returns the signed amount (positive for income, negative for expense,
    /// zero for unknown types).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.movement_type {
            MovementType::Income => self.amount,
            MovementType::Expense => -self.amount,
            MovementType::Unknown => Decimal::ZERO,
        }
    }
}
