//! Display model of the dashboard page.
//!
//! Raw API records are mapped into new `TransactionRow`s; the raw values are
//! never rewritten in place. The balance is kept behind an `Rc` so the
//! formatted balance can be memoized on the identity of the committed value.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use chrono::{DateTime, TimeZone};
use tracing::debug;

use crate::money::CurrencyFormatter;
use crate::relative_date::{format_relative, DateLocale};
use crate::{Balance, TransactionDto, TransactionType, TransactionsResponse};

/// Formatting configuration passed to every formatting call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DisplayFormat {
    pub currency: CurrencyFormatter,
    pub locale: DateLocale,
}

/// A table row ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: String,
    pub title: String,
    pub kind: TransactionType,
    pub category_title: String,
    pub formatted_value: String,
    pub formatted_date: String,
}

impl TransactionRow {
    /// Build a row, formatting the creation date relative to `now`.
    pub fn from_dto<Tz>(dto: &TransactionDto, now: &DateTime<Tz>, format: &DisplayFormat) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let created_at = dto.created_at.with_timezone(&now.timezone());
        Self {
            id: dto.id.clone(),
            title: dto.title.clone(),
            kind: dto.kind,
            category_title: dto.category.title.clone(),
            formatted_value: format.currency.format(dto.value),
            formatted_date: format_relative(&created_at, now, format.locale),
        }
    }

    /// Value as shown in the table, outcome rows carry a `"- "` prefix.
    pub fn display_value(&self) -> String {
        format!("{}{}", self.kind.sign_prefix(), self.formatted_value)
    }
}

/// Map every transaction to a row, keeping the API order.
pub fn prepare_rows<Tz>(
    transactions: &[TransactionDto],
    now: &DateTime<Tz>,
    format: &DisplayFormat,
) -> Vec<TransactionRow>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    debug!(count = transactions.len(), "Preparing transaction rows");
    transactions
        .iter()
        .map(|transaction| TransactionRow::from_dto(transaction, now, format))
        .collect()
}

/// Summary cards, in display order via [`BalanceCard::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceCard {
    Income,
    Outcome,
    Total,
}

impl BalanceCard {
    pub const ALL: [BalanceCard; 3] = [BalanceCard::Income, BalanceCard::Outcome, BalanceCard::Total];

    pub fn label(&self) -> &'static str {
        match self {
            BalanceCard::Income => "Entradas",
            BalanceCard::Outcome => "Saídas",
            BalanceCard::Total => "Total",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BalanceCard::Income => "assets/income.svg",
            BalanceCard::Outcome => "assets/outcome.svg",
            BalanceCard::Total => "assets/total.svg",
        }
    }

    pub fn alt(&self) -> &'static str {
        match self {
            BalanceCard::Income => "Income",
            BalanceCard::Outcome => "Outcome",
            BalanceCard::Total => "Total",
        }
    }

    pub fn test_id(&self) -> &'static str {
        match self {
            BalanceCard::Income => "balance-income",
            BalanceCard::Outcome => "balance-outcome",
            BalanceCard::Total => "balance-total",
        }
    }

    pub fn is_total(&self) -> bool {
        matches!(self, BalanceCard::Total)
    }
}

/// Balance values formatted for the summary cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedBalance {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

impl FormattedBalance {
    pub fn new(balance: &Balance, format: &DisplayFormat) -> Self {
        debug!("Formatting balance");
        Self {
            income: format.currency.format(balance.income),
            outcome: format.currency.format(balance.outcome),
            total: format.currency.format(balance.total),
        }
    }

    pub fn get(&self, card: BalanceCard) -> &str {
        match card {
            BalanceCard::Income => &self.income,
            BalanceCard::Outcome => &self.outcome,
            BalanceCard::Total => &self.total,
        }
    }
}

/// Committed balance state.
///
/// Equality is reference identity: two handles are equal only when they
/// point at the same committed balance, even if another balance holds the
/// same numbers.
#[derive(Debug, Clone, Default)]
pub struct SharedBalance(Rc<Balance>);

impl SharedBalance {
    pub fn new(balance: Balance) -> Self {
        Self(Rc::new(balance))
    }
}

impl PartialEq for SharedBalance {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedBalance {
    type Target = Balance;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Everything the dashboard renders. The default is the state before the
/// fetch resolves: no rows and a zero balance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub rows: Rc<Vec<TransactionRow>>,
    pub balance: SharedBalance,
}

impl DashboardState {
    /// State committed once the API response has been transformed.
    pub fn loaded<Tz>(response: TransactionsResponse, now: &DateTime<Tz>, format: &DisplayFormat) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let rows = prepare_rows(&response.transactions, now, format);
        Self {
            rows: Rc::new(rows),
            balance: SharedBalance::new(response.balance),
        }
    }
}
