//! The data returned by the remote transactions API.

use serde::{Deserialize, Deserializer};
use time::{PrimitiveDateTime, format_description::well_known::Iso8601};

/// Whether a transaction adds to or subtracts from the account balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// A credit, e.g. a salary payment.
    Income,
    /// A debit, e.g. a purchase.
    Outcome,
}

/// A category assigned to a transaction, e.g. "Groceries".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// The display name of the category.
    pub title: String,
}

/// A single transaction as reported by the remote API.
///
/// `value` is in minor currency units (centavos) and is always unsigned,
/// the debit or credit semantics are carried by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The opaque unique identifier assigned by the backend.
    pub id: String,
    /// The display title, e.g. the payee.
    pub title: String,
    /// The amount in minor currency units.
    pub value: i64,
    /// Whether the transaction is a credit or a debit.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The category assigned by the backend, if any.
    #[serde(default)]
    pub category: Option<Category>,
    /// When the transaction was created.
    #[serde(deserialize_with = "deserialize_iso8601")]
    pub created_at: PrimitiveDateTime,
}

/// The income, outcome and net totals for the account.
///
/// Fields default to zero so a partial or missing balance renders as zeroes
/// instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Balance {
    /// The sum of all income transactions.
    #[serde(default)]
    pub income: i64,
    /// The sum of all outcome transactions.
    #[serde(default)]
    pub outcome: i64,
    /// Income minus outcome, computed by the backend.
    #[serde(default)]
    pub total: i64,
}

/// The payload of the transaction listing endpoint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TransactionSummary {
    /// The transactions in the display order chosen by the backend.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// The account totals.
    #[serde(default)]
    pub balance: Balance,
}

/// Parses timestamps such as `2024-03-05T14:30:00` or
/// `2020-04-20T00:00:00.000Z`. Any UTC offset is ignored.
fn deserialize_iso8601<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;

    PrimitiveDateTime::parse(&text, &Iso8601::DEFAULT).map_err(serde::de::Error::custom)
}
