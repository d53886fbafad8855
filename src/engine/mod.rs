//! The billing engine: a pure computation over a snapshot of subscriptions.
//!
//! `process` takes the record snapshot, the upcoming-window size, and the
//! reference day as explicit parameters and returns fresh derived values.
//! Nothing here reads ambient state or mutates the records.

pub mod rollover;

use chrono::{Duration, NaiveDate};

use crate::domain::{Subscription, SubscriptionCategory};

/// Derived views recomputed on every invocation; never persisted.
#[derive(Debug, Clone, Default)]
pub struct BillingSummary {
    /// Sum of monthly-equivalent costs over all records.
    pub total_monthly_cost: f64,
    /// Records due within the window, ascending by next due date.
    pub upcoming: Vec<Subscription>,
    /// All records partitioned by category; keys ordered by display name,
    /// records within a group ordered by title.
    pub grouped: Vec<(SubscriptionCategory, Vec<Subscription>)>,
}

pub struct BillingEngine;

impl BillingEngine {
    /// Runs the full aggregation pipeline for one snapshot.
    pub fn process(
        records: &[Subscription],
        window_days: u32,
        reference: NaiveDate,
    ) -> BillingSummary {
        BillingSummary {
            total_monthly_cost: Self::total_monthly_cost(records),
            upcoming: Self::upcoming(records, window_days, reference),
            grouped: Self::grouped(records),
        }
    }

    /// Total monthly cost across all records; 0 for an empty snapshot.
    pub fn total_monthly_cost(records: &[Subscription]) -> f64 {
        records.iter().map(Subscription::monthly_cost).sum()
    }

    /// Records whose next due date falls in the half-open window
    /// `[reference, reference + window_days)`, ascending by due date.
    /// The sort is stable: ties keep the snapshot's order.
    pub fn upcoming(
        records: &[Subscription],
        window_days: u32,
        reference: NaiveDate,
    ) -> Vec<Subscription> {
        let window_end = reference + Duration::days(window_days as i64);
        let mut due: Vec<(NaiveDate, Subscription)> = records
            .iter()
            .map(|record| (record.next_due_date(reference), record.clone()))
            .filter(|(next, _)| *next >= reference && *next < window_end)
            .collect();
        due.sort_by_key(|(next, _)| *next);
        due.into_iter().map(|(_, record)| record).collect()
    }

    /// All records grouped by category. Group keys sort by the category's
    /// display name, entries within a group by title (byte order).
    pub fn grouped(records: &[Subscription]) -> Vec<(SubscriptionCategory, Vec<Subscription>)> {
        let mut groups: Vec<(SubscriptionCategory, Vec<Subscription>)> = Vec::new();
        for record in records {
            match groups.iter_mut().find(|(category, _)| *category == record.category) {
                Some((_, members)) => members.push(record.clone()),
                None => groups.push((record.category, vec![record.clone()])),
            }
        }
        groups.sort_by_key(|(category, _)| category.display_name());
        for (_, members) in &mut groups {
            members.sort_by(|a, b| a.title.cmp(&b.title));
        }
        groups
    }

    /// Whether a due date projected on an earlier day has slipped past
    /// `today`. Projection is redone from the anchor on every check;
    /// `projected_on` is the day the caller last derived the due date for.
    /// With `projected_on == today` this is always false, since projection
    /// is strictly forward-looking.
    pub fn is_overdue(record: &Subscription, projected_on: NaiveDate, today: NaiveDate) -> bool {
        record.next_due_date(projected_on) <= today
    }
}
