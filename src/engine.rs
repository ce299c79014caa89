use crate::errors::StoreError;
use std::fmt;
use std::fmt::Formatter;
use tracing::debug;

/// Widest date the ledger keeps, `YYYY/MM/DD`.
pub const DATE_WIDTH: usize = 10;
pub const KIND_WIDTH: usize = 7;
pub const CATEGORY_WIDTH: usize = 19;

#[derive(Clone, Debug, PartialEq)]
pub enum TransactionKind {
    /// Money coming into the wallet. Counted towards total income.
    Income,

    /// Money leaving the wallet. Counted towards total expenses and
    /// considered when looking for the most expensive category.
    Expense,

    /// Any other label. It is stored and persisted verbatim but ignored by
    /// every report.
    Other(String),
}

impl TransactionKind {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Other(label) => label,
        }
    }
}

impl From<&str> for TransactionKind {
    fn from(label: &str) -> Self {
        let label = bounded(label, KIND_WIDTH);
        match label.as_str() {
            "income" => TransactionKind::Income,
            "expense" => TransactionKind::Expense,
            _ => TransactionKind::Other(label),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ledger record.
///
/// Text fields are truncated to their fixed widths on construction, nothing
/// else is validated: dates are not checked against `YYYY/MM/DD` and amounts
/// may be zero or negative.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    date: String,
    kind: TransactionKind,
    category: String,
    amount: f64,
}

impl Transaction {
    pub fn new(date: &str, kind: &str, category: &str, amount: f64) -> Self {
        Self {
            date: bounded(date, DATE_WIDTH),
            kind: TransactionKind::from(kind),
            category: bounded(category, CATEGORY_WIDTH),
            amount,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// A Ledger holds the wallet's transactions in insertion order together with
/// every distinct category name it has been handed.
///
/// The category list only ever grows through [`Ledger::add_transaction`] and
/// [`Ledger::add_category`]. Editing an entry does not register its new
/// category and deleting an entry does not forget its old one; only a reload
/// rebuilds the list from scratch.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    categories: Vec<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category name unless an identical one is already known.
    pub fn add_category(&mut self, name: &str) {
        let name = bounded(name, CATEGORY_WIDTH);
        if !self.categories.contains(&name) {
            debug!(category = %name, "registered new category");
            self.categories.push(name);
        }
    }

    /// Append a transaction and register its category.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.add_category(transaction.category());
        debug!(
            index = self.transactions.len(),
            date = transaction.date(),
            kind = %transaction.kind(),
            "added transaction"
        );
        self.transactions.push(transaction);
    }

    /// Replace the transaction at `index` in place.
    pub fn edit_transaction(
        &mut self,
        index: usize,
        transaction: Transaction,
    ) -> Result<(), StoreError> {
        let size = self.size();
        match self.transactions.get_mut(index) {
            Some(slot) => {
                *slot = transaction;
                debug!(index, "edited transaction");
                Ok(())
            }
            None => Err(StoreError::OutOfRange { index, size }),
        }
    }

    /// Remove the transaction at `index`, shifting later entries down by one.
    pub fn delete_transaction(&mut self, index: usize) -> Result<Transaction, StoreError> {
        if index >= self.size() {
            return Err(StoreError::OutOfRange {
                index,
                size: self.size(),
            });
        }

        debug!(index, "deleted transaction");
        Ok(self.transactions.remove(index))
    }

    pub fn size(&self) -> usize {
        self.transactions.len()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Drop every transaction and category, keeping allocated capacity.
    pub(crate) fn clear(&mut self) {
        self.transactions.clear();
        self.categories.clear();
    }
}

fn bounded(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::new("2024/01/05", "income", "salary", 100.0));
        ledger.add_transaction(Transaction::new("2024/01/07", "expense", "food", 40.0));
        ledger.add_transaction(Transaction::new("2024/01/09", "expense", "rent", 70.0));
        ledger
    }

    #[test]
    fn should_start_empty() {
        let ledger = Ledger::new();

        assert_eq!(ledger.size(), 0);
        assert!(ledger.transactions().is_empty());
        assert!(ledger.categories().is_empty());
    }

    #[test]
    fn should_append_transactions_in_call_order() {
        let ledger = sample_ledger();

        // Every add grows the ledger by one and keeps insertion order.
        assert_eq!(ledger.size(), 3);
        let dates: Vec<&str> = ledger.transactions().iter().map(|tx| tx.date()).collect();
        assert_eq!(dates, vec!["2024/01/05", "2024/01/07", "2024/01/09"]);

        // Categories are registered in first-seen order.
        assert_eq!(ledger.categories(), &["salary", "food", "rent"]);
    }

    #[test]
    fn should_register_category_only_once() {
        let mut ledger = Ledger::new();
        ledger.add_category("food");
        ledger.add_category("rent");
        ledger.add_category("food");

        assert_eq!(ledger.categories(), &["food", "rent"]);

        // Matching is case-sensitive.
        ledger.add_category("Food");
        assert_eq!(ledger.categories(), &["food", "rent", "Food"]);
    }

    #[test]
    fn should_not_register_duplicate_category_from_transactions() {
        let mut ledger = sample_ledger();
        ledger.add_transaction(Transaction::new("2024/01/10", "expense", "food", 12.5));

        assert_eq!(ledger.size(), 4);
        assert_eq!(ledger.categories(), &["salary", "food", "rent"]);
    }

    #[test]
    fn should_edit_only_the_requested_entry() {
        let mut ledger = sample_ledger();
        let before = ledger.transactions().to_vec();

        let replacement = Transaction::new("2024/01/08", "expense", "travel", 15.0);
        assert!(ledger.edit_transaction(1, replacement.clone()).is_ok());

        assert_eq!(ledger.size(), 3);
        assert_eq!(ledger.transactions()[0], before[0]);
        assert_eq!(ledger.transactions()[1], replacement);
        assert_eq!(ledger.transactions()[2], before[2]);

        // Edits never register the new category.
        assert_eq!(ledger.categories(), &["salary", "food", "rent"]);
    }

    #[test]
    fn should_fail_to_edit_out_of_range() {
        let mut ledger = sample_ledger();
        let before = ledger.transactions().to_vec();

        let result = ledger.edit_transaction(3, Transaction::new("2024/02/01", "income", "gift", 1.0));
        assert_eq!(result, Err(StoreError::OutOfRange { index: 3, size: 3 }));

        // The ledger must be left untouched.
        assert_eq!(ledger.transactions(), before.as_slice());
        assert_eq!(ledger.categories(), &["salary", "food", "rent"]);
    }

    #[test]
    fn should_delete_and_preserve_order() {
        let mut ledger = sample_ledger();

        let removed = ledger.delete_transaction(0).unwrap();
        assert_eq!(removed.category(), "salary");

        assert_eq!(ledger.size(), 2);
        assert_eq!(ledger.transactions()[0].category(), "food");
        assert_eq!(ledger.transactions()[1].category(), "rent");

        // The category of the removed entry is still known.
        assert_eq!(ledger.categories(), &["salary", "food", "rent"]);
    }

    #[test]
    fn should_fail_to_delete_out_of_range() {
        let mut ledger = sample_ledger();

        assert_eq!(
            ledger.delete_transaction(7).unwrap_err(),
            StoreError::OutOfRange { index: 7, size: 3 }
        );
        assert_eq!(ledger.size(), 3);

        // An empty ledger has no valid index at all.
        let mut empty = Ledger::new();
        assert!(empty.delete_transaction(0).is_err());
    }

    #[test]
    fn should_truncate_bounded_fields() {
        let tx = Transaction::new(
            "2024/01/01/extra",
            "incomes",
            "an-extremely-long-category-name",
            -3.0,
        );

        assert_eq!(tx.date(), "2024/01/01");
        assert_eq!(tx.kind(), &TransactionKind::Other(String::from("incomes")));
        assert_eq!(tx.category(), "an-extremely-long-c");

        // Amounts are stored as given, including negative values.
        assert_eq!(tx.amount(), -3.0);
    }

    #[test]
    fn should_parse_kinds_exactly() {
        assert_eq!(TransactionKind::from("income"), TransactionKind::Income);
        assert_eq!(TransactionKind::from("expense"), TransactionKind::Expense);
        assert_eq!(
            TransactionKind::from("Income"),
            TransactionKind::Other(String::from("Income"))
        );
        assert_eq!(TransactionKind::from("refund").to_string(), "refund");

        // Labels are cut to their width before matching.
        assert_eq!(TransactionKind::from("expenses"), TransactionKind::Expense);
    }
}
