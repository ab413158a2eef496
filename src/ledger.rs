//! # Ledger Module
//!
//! In-memory ledger of income and expense entries backing the app's screens.
//!
//! ## Key Types:
//! - `EntryKind` - Income or Expense
//! - `LedgerEntry` - One dated entry with description and amount
//! - `Ledger` - The entry collection with balance and month queries
//! - `LedgerError` - Validation errors raised when adding entries
//!
//! ## Purpose:
//! The ledger is the plain data the UI consumes: the transaction list reads
//! `entries_for_month()`, the header reads `balance()`, and the add-entry
//! form submits through `add_entry()`. Persistence is a serde_json round-trip
//! through eframe's storage hook.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for ledger mutations
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("description cannot be empty")]
    EmptyDescription,

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("amount must be greater than zero")]
    NonPositiveAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Income,
    Expense,
}

/// One dated ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
}

impl LedgerEntry {
    /// Signed contribution of this entry to the balance
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

/// The entry collection, kept sorted newest-first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add an entry. The amount arrives as the raw form string
    /// so validation lives in one place for every caller.
    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        description: &str,
        amount: &str,
        kind: EntryKind,
    ) -> Result<&LedgerEntry, LedgerError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(LedgerError::EmptyDescription);
        }
        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| LedgerError::InvalidAmount(amount.trim().to_string()))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::NonPositiveAmount);
        }

        let entry = LedgerEntry {
            id: Uuid::new_v4(),
            date,
            description: description.to_string(),
            amount,
            kind,
        };
        // Newest first; stable so same-day entries keep insertion order
        let at = self
            .entries
            .iter()
            .position(|e| e.date <= entry.date)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, entry);
        log::info!(
            "🧾 added {} entry for {:.2} on {}",
            match kind {
                EntryKind::Income => "income",
                EntryKind::Expense => "expense",
            },
            self.entries[at].amount,
            self.entries[at].date
        );
        Ok(&self.entries[at])
    }

    /// Running balance over every entry
    pub fn balance(&self) -> f64 {
        self.entries.iter().map(LedgerEntry::signed_amount).sum()
    }

    /// Entries for one calendar month, newest first
    pub fn entries_for_month(&self, year: i32, month: u32) -> Vec<&LedgerEntry> {
        use chrono::Datelike;
        self.entries
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A few starter entries for a first launch with no saved state
    pub fn with_sample_entries(today: NaiveDate) -> Self {
        let mut ledger = Ledger::new();
        let seed: [(&str, &str, EntryKind, i64); 4] = [
            ("Salary", "1850.00", EntryKind::Income, 9),
            ("Groceries", "62.40", EntryKind::Expense, 6),
            ("Coffee", "4.50", EntryKind::Expense, 2),
            ("Sold old bike", "85.00", EntryKind::Income, 1),
        ];
        for (description, amount, kind, days_ago) in seed {
            let date = today - chrono::Duration::days(days_ago);
            // Seed data is known-valid
            if let Err(e) = ledger.add_entry(date, description, amount, kind) {
                log::warn!("⚠️ skipped sample entry '{}': {}", description, e);
            }
        }
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn balance_sums_income_minus_expenses() {
        let mut ledger = Ledger::new();
        ledger
            .add_entry(date(2026, 8, 1), "Salary", "100.00", EntryKind::Income)
            .unwrap();
        ledger
            .add_entry(date(2026, 8, 2), "Lunch", "12.50", EntryKind::Expense)
            .unwrap();
        assert_eq!(ledger.balance(), 87.5);
    }

    #[test]
    fn add_entry_rejects_bad_input() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.add_entry(date(2026, 8, 1), "   ", "5.00", EntryKind::Expense),
            Err(LedgerError::EmptyDescription)
        );
        assert_eq!(
            ledger.add_entry(date(2026, 8, 1), "Lunch", "abc", EntryKind::Expense),
            Err(LedgerError::InvalidAmount("abc".to_string()))
        );
        assert_eq!(
            ledger.add_entry(date(2026, 8, 1), "Lunch", "-3", EntryKind::Expense),
            Err(LedgerError::NonPositiveAmount)
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn entries_sorted_newest_first() {
        let mut ledger = Ledger::new();
        ledger
            .add_entry(date(2026, 8, 5), "Middle", "1", EntryKind::Expense)
            .unwrap();
        ledger
            .add_entry(date(2026, 8, 1), "Oldest", "1", EntryKind::Expense)
            .unwrap();
        ledger
            .add_entry(date(2026, 8, 9), "Newest", "1", EntryKind::Expense)
            .unwrap();

        let descriptions: Vec<_> = ledger
            .entries_for_month(2026, 8)
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn entries_for_month_filters_by_year_and_month() {
        let mut ledger = Ledger::new();
        ledger
            .add_entry(date(2026, 8, 5), "This month", "1", EntryKind::Expense)
            .unwrap();
        ledger
            .add_entry(date(2026, 7, 5), "Last month", "1", EntryKind::Expense)
            .unwrap();
        ledger
            .add_entry(date(2025, 8, 5), "Last year", "1", EntryKind::Expense)
            .unwrap();

        let august = ledger.entries_for_month(2026, 8);
        assert_eq!(august.len(), 1);
        assert_eq!(august[0].description, "This month");
    }

    #[test]
    fn serde_round_trip_preserves_entries() {
        let mut ledger = Ledger::new();
        ledger
            .add_entry(date(2026, 8, 1), "Salary", "100.00", EntryKind::Income)
            .unwrap();
        let json = serde_json::to_string(&ledger).unwrap();
        let restored: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.balance(), ledger.balance());
    }
}
