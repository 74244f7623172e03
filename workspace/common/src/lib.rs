//! Common transport-layer types and display logic shared by the dashboard
//! frontend. The structs mirror the `GET /transactions` payload so the
//! frontend can deserialize API responses without duplicating shapes, and
//! the formatting modules stay free of any browser dependency so they can be
//! tested natively.

mod dashboard;
mod error;
mod money;
mod relative_date;
mod timestamp;

pub use dashboard::{
    prepare_rows, BalanceCard, DashboardState, DisplayFormat, FormattedBalance, SharedBalance,
    TransactionRow,
};
pub use error::{DisplayError, Result};
pub use money::CurrencyFormatter;
pub use relative_date::{format_relative, DateLocale};

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ===================== Transactions =====================

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

impl TransactionType {
    /// Class attached to the value cell so income and outcome can be styled apart.
    pub fn css_class(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }

    /// Prefix shown in front of the formatted value.
    pub fn sign_prefix(&self) -> &'static str {
        match self {
            TransactionType::Income => "",
            TransactionType::Outcome => "- ",
        }
    }
}

/// Category as embedded in a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDto {
    pub title: String,
}

/// Raw transaction as returned by the API.
///
/// `value` arrives numeric-as-string (`"5000"`) but plain JSON numbers are
/// accepted as well. `created_at` is ISO-8601; values without an offset are
/// read as local time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDto {
    pub id: String,
    pub title: String,
    pub value: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: CategoryDto,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<FixedOffset>,
}

// ===================== Balance =====================

/// Aggregate sums computed by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Balance {
    pub income: Decimal,
    pub outcome: Decimal,
    pub total: Decimal,
}

/// Body of `GET /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionDto>,
    pub balance: Balance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_transactions_response() {
        let body = r#"{
            "transactions": [
                {
                    "id": "1",
                    "title": "Salary",
                    "value": "5000",
                    "type": "income",
                    "category": { "title": "Job" },
                    "created_at": "2024-01-10T12:00:00Z"
                },
                {
                    "id": "2",
                    "title": "Rent",
                    "value": 1200.5,
                    "type": "outcome",
                    "category": { "title": "House" },
                    "created_at": "2024-01-11T08:30:00.000Z"
                }
            ],
            "balance": { "income": "5000", "outcome": "1200.5", "total": "3799.5" }
        }"#;

        let response: TransactionsResponse =
            serde_json::from_str(body).expect("Should parse response");

        assert_eq!(response.transactions.len(), 2);
        assert_eq!(response.transactions[0].kind, TransactionType::Income);
        assert_eq!(response.transactions[0].value, Decimal::new(5000, 0));
        assert_eq!(response.transactions[0].category.title, "Job");
        assert_eq!(response.transactions[1].kind, TransactionType::Outcome);
        assert_eq!(response.transactions[1].value, Decimal::new(12005, 1));
        assert_eq!(response.balance.total, Decimal::new(37995, 1));
    }

    #[test]
    fn test_created_at_without_offset() {
        let body = r#"{
            "transactions": [
                {
                    "id": "1",
                    "title": "Salary",
                    "value": "5000",
                    "type": "income",
                    "category": { "title": "Job" },
                    "created_at": "2024-01-10T12:00:00"
                },
                {
                    "id": "2",
                    "title": "Rent",
                    "value": "1200",
                    "type": "outcome",
                    "category": { "title": "House" },
                    "created_at": "2024-01-11"
                }
            ],
            "balance": { "income": "5000", "outcome": "1200", "total": "3800" }
        }"#;

        let response: TransactionsResponse =
            serde_json::from_str(body).expect("Offset-less timestamps should parse");

        let local = |dto: &TransactionDto| {
            dto.created_at
                .with_timezone(&chrono::Local)
                .naive_local()
                .to_string()
        };
        assert_eq!(local(&response.transactions[0]), "2024-01-10 12:00:00");
        assert_eq!(local(&response.transactions[1]), "2024-01-11 00:00:00");
    }

    #[test]
    fn test_invalid_created_at_is_rejected() {
        let body = r#"{
            "id": "1",
            "title": "Salary",
            "value": "5000",
            "type": "income",
            "category": { "title": "Job" },
            "created_at": "last tuesday"
        }"#;

        let result: std::result::Result<TransactionDto, _> = serde_json::from_str(body);
        assert!(result.unwrap_err().to_string().contains("invalid ISO-8601 timestamp"));
    }

    #[test]
    fn test_unknown_transaction_type_is_rejected() {
        let body = r#"{
            "id": "1",
            "title": "Gift",
            "value": "10",
            "type": "transfer",
            "category": { "title": "Misc" },
            "created_at": "2024-01-10T12:00:00Z"
        }"#;

        let result: std::result::Result<TransactionDto, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_transaction_type_display_helpers() {
        assert_eq!(TransactionType::Income.css_class(), "income");
        assert_eq!(TransactionType::Outcome.css_class(), "outcome");
        assert_eq!(TransactionType::Income.sign_prefix(), "");
        assert_eq!(TransactionType::Outcome.sign_prefix(), "- ");
    }

    #[test]
    fn test_balance_default_is_zero() {
        let balance = Balance::default();
        assert!(balance.income.is_zero());
        assert!(balance.outcome.is_zero());
        assert!(balance.total.is_zero());
    }
}
