//! Append only log of committed transactions
use super::transaction::TransactionKind;
use crate::amount::Amount;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Committed transaction. Once recorded it is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    kind: TransactionKind,
    amount: Amount,
    timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    #[allow(missing_docs)]
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    #[allow(missing_docs)]
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// moment when entry was appended to history
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Ordered transactions history of a single account
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Record transaction with current UTC time
    pub(crate) fn append(&mut self, kind: TransactionKind, amount: Amount) -> &HistoryEntry {
        self.append_at(kind, amount, Utc::now())
    }

    pub(crate) fn append_at(
        &mut self,
        kind: TransactionKind,
        amount: Amount,
        timestamp: DateTime<Utc>,
    ) -> &HistoryEntry {
        self.entries.push(HistoryEntry {
            kind,
            amount,
            timestamp,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in order of insertion
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose kind name equals `kind` ignoring case, or all entries for `None`.
    ///
    /// Returned iterator can be cloned to walk the same entries again.
    pub fn filter_by_kind<'a>(
        &'a self,
        kind: Option<&'a str>,
    ) -> impl Iterator<Item = &'a HistoryEntry> + Clone + 'a {
        self.entries
            .iter()
            .filter(move |entry| kind.map_or(true, |name| entry.kind.matches_name(name)))
    }

    /// Entries recorded at current UTC date
    pub fn entries_today(&self) -> Vec<&HistoryEntry> {
        self.entries_on(Utc::now().date_naive())
    }

    /// Entries recorded at `date` (UTC)
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.timestamp.date_naive() == date)
            .collect()
    }

    /// Number of entries of `kind` over the whole history
    pub fn count_of(&self, kind: TransactionKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    /// Sum of amounts of `kind` over the whole history, `None` when it does not fit in
    /// [`Decimal`]
    pub fn total_of(&self, kind: TransactionKind) -> Option<Decimal> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .try_fold(Decimal::ZERO, |total, entry| total.checked_add(*entry.amount))
    }
}
