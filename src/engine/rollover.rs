//! Calendar projection of the next due date.

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::BillingCycle;

/// Projects the next occurrence of a billing date strictly after `reference`.
///
/// Starting from the stored anchor, the candidate advances one whole cycle at
/// a time until it passes the reference day. An anchor already in the future
/// is returned unchanged; an anchor equal to the reference day is advanced
/// once, so the result is never equal to `reference`.
pub fn next_due_date(anchor: NaiveDate, cycle: BillingCycle, reference: NaiveDate) -> NaiveDate {
    let mut candidate = anchor;
    while candidate <= reference {
        let advanced = advance_one_cycle(candidate, cycle);
        if advanced <= candidate {
            // Only reachable if calendar addition failed to move forward;
            // bail out rather than loop forever.
            tracing::error!(%candidate, %cycle, "billing date projection stalled");
            break;
        }
        candidate = advanced;
    }
    candidate
}

/// Advances a date by exactly one cycle increment.
///
/// Month and year steps clamp the day-of-month when the target month is
/// shorter (Jan 31 + 1 month = Feb 28/29, never Mar 3).
pub fn advance_one_cycle(date: NaiveDate, cycle: BillingCycle) -> NaiveDate {
    match cycle {
        BillingCycle::Weekly => date + Duration::weeks(1),
        BillingCycle::Monthly => shift_month(date),
        BillingCycle::Yearly => shift_year(date),
    }
}

fn shift_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| projection_failed(date))
}

fn shift_year(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or_else(|| projection_failed(date))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_of_next - Duration::days(1)).day()
}

// Calendar addition with a clamped day cannot produce an invalid date; if it
// ever does, returning the input keeps the projection total and signals the
// defect to the host.
fn projection_failed(date: NaiveDate) -> NaiveDate {
    tracing::error!(%date, "calendar projection produced no valid date");
    date
}
