use crate::engine::{Ledger, TransactionKind};
use std::fmt;
use std::fmt::Formatter;

/// Aggregate figures over every transaction in a ledger.
#[derive(Debug, PartialEq)]
pub struct Totals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,

    /// Category of the single largest expense, empty when no expense is
    /// larger than zero.
    pub top_expense_category: String,
    pub top_expense_amount: f64,
}

/// Income and expense sums for transactions dated inside a window.
#[derive(Debug, PartialEq)]
pub struct RangeStats {
    pub start: String,
    pub end: String,
    pub total_income: f64,
    pub total_expenses: f64,
}

/// Display adapter for the ledger's category names.
pub struct CategoryListing<'a>(pub &'a [String]);

impl Ledger {
    /// Sum income and expenses and find the largest expense.
    ///
    /// Ties keep the first expense seen. The running maximum starts at zero,
    /// so expenses of zero or less never count as the top expense.
    pub fn totals(&self) -> Totals {
        let mut total_income = 0.0;
        let mut total_expenses = 0.0;
        let mut top_expense_category = "";
        let mut top_expense_amount = 0.0;

        for tx in self.transactions() {
            match tx.kind() {
                TransactionKind::Income => total_income += tx.amount(),
                TransactionKind::Expense => {
                    total_expenses += tx.amount();
                    if tx.amount() > top_expense_amount {
                        top_expense_amount = tx.amount();
                        top_expense_category = tx.category();
                    }
                }
                TransactionKind::Other(_) => {}
            }
        }

        Totals {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            top_expense_category: top_expense_category.to_string(),
            top_expense_amount,
        }
    }

    /// Sum income and expenses for transactions whose date falls between
    /// `start` and `end`, both inclusive.
    ///
    /// Dates are compared as plain strings, which only matches calendar order
    /// when every date is zero padded `YYYY/MM/DD`.
    pub fn stats_in_range(&self, start: &str, end: &str) -> RangeStats {
        let mut total_income = 0.0;
        let mut total_expenses = 0.0;

        for tx in self
            .transactions()
            .iter()
            .filter(|tx| tx.date() >= start && tx.date() <= end)
        {
            match tx.kind() {
                TransactionKind::Income => total_income += tx.amount(),
                TransactionKind::Expense => total_expenses += tx.amount(),
                TransactionKind::Other(_) => {}
            }
        }

        RangeStats {
            start: start.to_string(),
            end: end.to_string(),
            total_income,
            total_expenses,
        }
    }

    pub fn list_categories(&self) -> CategoryListing<'_> {
        CategoryListing(self.categories())
    }
}

impl CategoryListing<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Income: {:.2}", self.total_income)?;
        writeln!(f, "Total Expenses: {:.2}", self.total_expenses)?;
        writeln!(f, "Balance: {:.2}", self.balance)?;
        write!(
            f,
            "Most Expensive Category: {} ({:.2})",
            self.top_expense_category, self.top_expense_amount
        )
    }
}

impl fmt::Display for RangeStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics from {} to {}:", self.start, self.end)?;
        writeln!(f, "Total Income: {:.2}", self.total_income)?;
        write!(f, "Total Expenses: {:.2}", self.total_expenses)
    }
}

impl fmt::Display for CategoryListing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No categories available.");
        }

        write!(f, "Categories:")?;
        for name in self.0 {
            write!(f, "\n- {}", name)?;
        }
        Ok(())
    }
}
