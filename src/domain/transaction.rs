//! Domain model for a single recorded income or expense.

use std::{fmt, result::Result as StdResult, str::FromStr};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::common::{Displayable, Identifiable};
use crate::errors::{Result, TrackerError};

/// Date-time layout written to persisted records.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const ISO_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Distinguishes money coming in from money going out.
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Multiplier applied to the amount when folding into a balance.
    pub fn sign(self) -> f64 {
        match self {
            TransactionKind::Income => 1.0,
            TransactionKind::Expense => -1.0,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(TrackerError::Parse(format!(
                "unknown transaction kind `{other}`"
            ))),
        }
    }
}

/// A validated transaction. Fields are read-only; edits produce a replacement value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord", into = "TransactionRecord")]
pub struct Transaction {
    id: u64,
    kind: TransactionKind,
    amount: f64,
    category: String,
    description: String,
    occurred_on: NaiveDateTime,
}

impl Transaction {
    /// Builds a transaction from already typed values.
    ///
    /// The amount must be finite and non-negative and the category must not be
    /// blank. Sub-second precision is dropped from `occurred_on` so the value
    /// survives a round trip through the persisted record unchanged.
    pub fn new(
        id: u64,
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        occurred_on: NaiveDateTime,
    ) -> Result<Self> {
        if !amount.is_finite() {
            return Err(TrackerError::InvalidInput(format!(
                "amount must be a finite number, got {amount}"
            )));
        }
        if amount < 0.0 {
            return Err(TrackerError::InvalidInput(format!(
                "amount must not be negative, got {amount}"
            )));
        }
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(TrackerError::InvalidInput(
                "category must not be empty".into(),
            ));
        }
        let occurred_on = occurred_on.with_nanosecond(0).unwrap_or(occurred_on);
        Ok(Self {
            id,
            kind,
            amount,
            category,
            description: description.into(),
            occurred_on,
        })
    }

    /// Builds a transaction from form text, parsing amount and date first.
    pub fn parse(
        id: u64,
        kind: TransactionKind,
        amount: &str,
        category: impl Into<String>,
        description: impl Into<String>,
        occurred_on: &str,
    ) -> Result<Self> {
        let amount = parse_amount(amount)?;
        let occurred_on = parse_occurred_on(occurred_on)?;
        Self::new(id, kind, amount, category, description, occurred_on)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn occurred_on(&self) -> NaiveDateTime {
        self.occurred_on
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the sign implied by the kind.
    pub fn signed_amount(&self) -> f64 {
        self.kind.sign() * self.amount
    }

    /// Case-insensitive substring match against description or category.
    ///
    /// Callers are expected to skip the check for an empty term.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.description.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }

    /// Inclusive on both ends.
    pub fn in_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.occurred_on >= start && self.occurred_on <= end
    }

    pub fn to_record(&self) -> TransactionRecord {
        TransactionRecord {
            id: self.id,
            kind: self.kind,
            amount: self.amount,
            category: self.category.clone(),
            description: self.description.clone(),
            date: self.occurred_on.format(ISO_FORMAT).to_string(),
        }
    }

    pub fn from_record(record: TransactionRecord) -> Result<Self> {
        let occurred_on = parse_occurred_on(&record.date)?;
        Self::new(
            record.id,
            record.kind,
            record.amount,
            record.category,
            record.description,
            occurred_on,
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let record: TransactionRecord = serde_json::from_str(data)?;
        Self::from_record(record)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "txn:{} [{} {:.2} {}]",
            self.id, self.kind, self.amount, self.category
        )
    }
}

/// Plain structural form of a transaction as it is written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: u64,
    #[serde(alias = "type")]
    pub kind: TransactionKind,
    #[serde(deserialize_with = "amount_from_number_or_text")]
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
}

impl From<Transaction> for TransactionRecord {
    fn from(txn: Transaction) -> Self {
        TransactionRecord {
            id: txn.id,
            kind: txn.kind,
            amount: txn.amount,
            date: txn.occurred_on.format(ISO_FORMAT).to_string(),
            category: txn.category,
            description: txn.description,
        }
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TrackerError;

    fn try_from(record: TransactionRecord) -> Result<Self> {
        Transaction::from_record(record)
    }
}

/// Parses an amount typed by the user.
///
/// Accepts a single comma as the decimal separator when no dot is present
/// (`"450,75"`). Non-numeric and non-finite input is rejected.
pub fn parse_amount(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    let value: f64 = normalized
        .parse()
        .map_err(|_| TrackerError::Parse(format!("invalid amount `{text}`")))?;
    if !value.is_finite() {
        return Err(TrackerError::Parse(format!("invalid amount `{text}`")));
    }
    Ok(value)
}

/// Parses an ISO-8601 date or date-time.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS[.fff]`, RFC 3339 timestamps with an offset
/// (converted to local time), and bare `YYYY-MM-DD` dates (midnight).
pub fn parse_occurred_on(text: &str) -> Result<NaiveDateTime> {
    let trimmed = text.trim();
    if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, ISO_PARSE_FORMAT) {
        return Ok(value);
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(value.with_timezone(&Local).naive_local());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(TrackerError::Parse(format!("invalid date `{text}`")))
}

fn amount_from_number_or_text<'de, D>(deserializer: D) -> StdResult<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) => Ok(value),
        RawAmount::Text(text) => parse_amount(&text).map_err(serde::de::Error::custom),
    }
}
