//! The subscription record entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::domain::{BillingCycle, SubscriptionCategory};
use crate::engine::rollover;

/// One recurring obligation. `price` is denominated in the cycle's native
/// period (a yearly record stores the yearly charge). `anchor_date` is the
/// sole temporal seed: any known billing occurrence, past or future, from
/// which due dates are projected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub category: SubscriptionCategory,
    pub cycle: BillingCycle,
    pub anchor_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
}

impl Subscription {
    pub fn new(
        title: impl Into<String>,
        price: f64,
        category: SubscriptionCategory,
        cycle: BillingCycle,
        anchor_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            price,
            category,
            cycle,
            anchor_date,
            notes: None,
            color_hex: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_color_hex(mut self, color_hex: impl Into<String>) -> Self {
        self.color_hex = Some(color_hex.into());
        self
    }

    /// First billing occurrence strictly after `reference`, projected from
    /// the anchor. Always recomputed; never stored.
    pub fn next_due_date(&self, reference: NaiveDate) -> NaiveDate {
        rollover::next_due_date(self.anchor_date, self.cycle, reference)
    }

    /// Price normalized to a per-month figure.
    pub fn monthly_cost(&self) -> f64 {
        self.cycle.monthly_equivalent(self.price)
    }

    /// Advances the anchor to the next due date, completing the pending
    /// occurrence. Returns the new anchor.
    pub fn advance_anchor(&mut self, reference: NaiveDate) -> NaiveDate {
        self.anchor_date = self.next_due_date(reference);
        self.anchor_date
    }
}

impl Identifiable for Subscription {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Subscription {
    fn name(&self) -> &str {
        &self.title
    }
}

impl Displayable for Subscription {
    fn display_label(&self) -> String {
        format!("{} ({})", self.title, self.cycle)
    }
}
