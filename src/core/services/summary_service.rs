//! Pure aggregations over an already filtered transaction slice.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::core::format::{CurrencyFormatter, DateFormatter};
use crate::domain::transaction::Transaction;

/// Summed expense amount for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Income and expense totals for a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub income_total: f64,
    pub expense_total: f64,
}

/// Expense amount per category, ready for a proportional chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expense: f64,
}

/// Bundle of headline figures for a transaction set. Recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub balance: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub highest_expense: Option<Transaction>,
    pub dominant_category: Option<CategoryTotal>,
}

impl SummaryReport {
    /// One-line rendering for status bars and logs.
    pub fn headline<F>(&self, formatter: &F, currency: &str) -> String
    where
        F: CurrencyFormatter + DateFormatter + ?Sized,
    {
        let mut line = format!(
            "Balance {} | Income {} | Expenses {}",
            formatter.format_amount(self.balance, currency),
            formatter.format_amount(self.total_income, currency),
            formatter.format_amount(self.total_expense, currency),
        );
        if let Some(top) = &self.dominant_category {
            line.push_str(&format!(
                " | Top category {} ({})",
                top.category,
                formatter.format_amount(top.total, currency)
            ));
        }
        if let Some(largest) = &self.highest_expense {
            line.push_str(&format!(
                " | Largest expense {} on {}",
                formatter.format_amount(largest.amount(), currency),
                formatter.format_date(largest.occurred_on().date())
            ));
        }
        line
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Income adds, expense subtracts.
    pub fn balance(txs: &[Transaction]) -> f64 {
        txs.iter().fold(0.0, |acc, txn| acc + txn.signed_amount())
    }

    pub fn total_income(txs: &[Transaction]) -> f64 {
        txs.iter()
            .filter(|txn| txn.is_income())
            .map(Transaction::amount)
            .sum()
    }

    pub fn total_expense(txs: &[Transaction]) -> f64 {
        txs.iter()
            .filter(|txn| txn.is_expense())
            .map(Transaction::amount)
            .sum()
    }

    /// Largest expense by amount; the earliest one in input order wins ties.
    pub fn highest_expense(txs: &[Transaction]) -> Option<&Transaction> {
        txs.iter()
            .filter(|txn| txn.is_expense())
            .fold(None, |best: Option<&Transaction>, txn| match best {
                Some(current) if current.amount() >= txn.amount() => Some(current),
                _ => Some(txn),
            })
    }

    /// Expense category with the largest summed amount.
    pub fn dominant_category(txs: &[Transaction]) -> Option<CategoryTotal> {
        let shares = accumulate(txs.iter().filter(|txn| txn.is_expense()), |entry, txn| {
            entry.1 += txn.amount()
        });
        shares
            .into_iter()
            .fold(None, |best: Option<CategoryTotal>, (category, (_, total))| {
                match best {
                    Some(current) if current.total >= total => Some(current),
                    _ => Some(CategoryTotal { category, total }),
                }
            })
    }

    /// Per-category income and expense totals in first-seen order.
    pub fn group_by_category(txs: &[Transaction]) -> Vec<CategoryBreakdown> {
        accumulate(txs.iter(), |entry, txn| {
            if txn.is_income() {
                entry.0 += txn.amount();
            } else {
                entry.1 += txn.amount();
            }
        })
        .into_iter()
        .map(|(category, (income_total, expense_total))| CategoryBreakdown {
            category,
            income_total,
            expense_total,
        })
        .collect()
    }

    /// Expense-only totals per category; categories summing to zero are omitted.
    pub fn expense_shares_by_category(txs: &[Transaction]) -> Vec<CategoryShare> {
        accumulate(txs.iter().filter(|txn| txn.is_expense()), |entry, txn| {
            entry.1 += txn.amount()
        })
        .into_iter()
        .filter(|(_, (_, amount))| *amount > 0.0)
        .map(|(category, (_, amount))| CategoryShare { category, amount })
        .collect()
    }

    /// Income and expense totals per calendar month, oldest month first.
    pub fn monthly_totals(txs: &[Transaction]) -> Vec<MonthlyTotals> {
        let mut months: Vec<MonthlyTotals> = Vec::new();
        for txn in txs {
            let date = txn.occurred_on().date();
            let (year, month) = (date.year(), date.month());
            let index = match months
                .iter()
                .position(|entry| entry.year == year && entry.month == month)
            {
                Some(index) => index,
                None => {
                    months.push(MonthlyTotals {
                        year,
                        month,
                        income: 0.0,
                        expense: 0.0,
                    });
                    months.len() - 1
                }
            };
            if txn.is_income() {
                months[index].income += txn.amount();
            } else {
                months[index].expense += txn.amount();
            }
        }
        months.sort_by_key(|entry| (entry.year, entry.month));
        months
    }

    /// Composes the headline aggregations into a [`SummaryReport`].
    pub fn build_report(txs: &[Transaction]) -> SummaryReport {
        let report = SummaryReport {
            balance: Self::balance(txs),
            total_income: Self::total_income(txs),
            total_expense: Self::total_expense(txs),
            highest_expense: Self::highest_expense(txs).cloned(),
            dominant_category: Self::dominant_category(txs),
        };
        tracing::debug!(
            transactions = txs.len(),
            balance = report.balance,
            "built summary report"
        );
        report
    }
}

/// Folds transactions into `(income, expense)` pairs keyed by category,
/// preserving the order in which categories first appear.
fn accumulate<'a, I, F>(txs: I, mut apply: F) -> Vec<(String, (f64, f64))>
where
    I: Iterator<Item = &'a Transaction>,
    F: FnMut(&mut (f64, f64), &Transaction),
{
    let mut totals: Vec<(String, (f64, f64))> = Vec::new();
    for txn in txs {
        let index = match totals
            .iter()
            .position(|(category, _)| category == txn.category())
        {
            Some(index) => index,
            None => {
                totals.push((txn.category().to_string(), (0.0, 0.0)));
                totals.len() - 1
            }
        };
        apply(&mut totals[index].1, txn);
    }
    totals
}
