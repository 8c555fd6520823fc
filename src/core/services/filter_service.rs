//! Search and period filtering followed by a newest-first sort.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::core::time::Clock;
use crate::domain::filters::{DateWindow, FilterCriteria, Period};
use crate::domain::transaction::Transaction;

/// Lower bound used for [`Period::All`].
const EPOCH_YEAR: i32 = 2000;

pub struct FilterService;

impl FilterService {
    /// Resolves the inclusive window for `period` relative to `now`.
    pub fn resolve_period_window(period: Period, now: NaiveDateTime) -> DateWindow {
        let today = now.date();
        let end = end_of_day(today);
        let start_date = match period {
            Period::Day => today,
            Period::Week => {
                today - Duration::days(today.weekday().num_days_from_sunday() as i64)
            }
            Period::RollingWeek => today - Duration::days(6),
            Period::Month => today.with_day(1).unwrap_or(today),
            Period::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
            Period::All => NaiveDate::from_ymd_opt(EPOCH_YEAR, 1, 1).unwrap_or(NaiveDate::MIN),
        };
        DateWindow {
            start: start_date.and_time(NaiveTime::MIN),
            end,
        }
    }

    /// Applies `criteria` to `txs` and sorts newest first.
    ///
    /// The search term is used verbatim; only an empty term skips the search
    /// step. The window is resolved against `now` on every call. Equal dates
    /// keep their input order.
    pub fn filter_and_sort(
        txs: &[Transaction],
        criteria: &FilterCriteria,
        now: NaiveDateTime,
    ) -> Vec<Transaction> {
        let term = criteria.search_term.as_str();
        let window = match criteria.period {
            Period::All => None,
            period => Some(Self::resolve_period_window(period, now)),
        };
        let mut filtered: Vec<Transaction> = txs
            .iter()
            .filter(|txn| term.is_empty() || txn.matches_search(term))
            .filter(|txn| {
                window
                    .map(|window| txn.in_range(window.start, window.end))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.occurred_on().cmp(&a.occurred_on()));
        tracing::debug!(
            input = txs.len(),
            output = filtered.len(),
            period = %criteria.period,
            "filtered transactions"
        );
        filtered
    }

    /// Same as [`FilterService::filter_and_sort`], reading "now" from `clock`.
    pub fn apply(
        txs: &[Transaction],
        criteria: &FilterCriteria,
        clock: &dyn Clock,
    ) -> Vec<Transaction> {
        Self::filter_and_sort(txs, criteria, clock.now())
    }
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last)
}
