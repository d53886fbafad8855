//! Command operations against the subscription store.
//!
//! Mutations are explicit commands: each one loads the current snapshot,
//! applies the change, persists, and returns fresh data. Nothing holds a
//! live reference into storage.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{BillingCycle, Subscription, SubscriptionCategory};
use crate::storage::StorageBackend;

use super::{ServiceError, ServiceResult};

/// Validated input for creating or editing a subscription. Produced by the
/// form layer; the engine itself never sees unvalidated text.
#[derive(Debug, Clone)]
pub struct SubscriptionDraft {
    pub title: String,
    pub price: f64,
    pub category: SubscriptionCategory,
    pub cycle: BillingCycle,
    pub anchor_date: NaiveDate,
    pub notes: Option<String>,
    pub color_hex: Option<String>,
}

pub struct SubscriptionService;

impl SubscriptionService {
    pub fn list(store: &dyn StorageBackend) -> ServiceResult<Vec<Subscription>> {
        Ok(store.load()?)
    }

    pub fn add(store: &dyn StorageBackend, draft: SubscriptionDraft) -> ServiceResult<Subscription> {
        let draft = Self::validate(draft)?;
        let mut subscription = Subscription::new(
            draft.title,
            draft.price,
            draft.category,
            draft.cycle,
            draft.anchor_date,
        );
        subscription.notes = draft.notes;
        subscription.color_hex = draft.color_hex;

        let mut subscriptions = store.load()?;
        subscriptions.push(subscription.clone());
        store.save(&subscriptions)?;
        tracing::info!(id = %subscription.id, title = %subscription.title, "subscription added");
        Ok(subscription)
    }

    pub fn edit(
        store: &dyn StorageBackend,
        id: Uuid,
        draft: SubscriptionDraft,
    ) -> ServiceResult<Subscription> {
        let draft = Self::validate(draft)?;
        let mut subscriptions = store.load()?;
        let subscription = subscriptions
            .iter_mut()
            .find(|sub| sub.id == id)
            .ok_or_else(|| ServiceError::Invalid(format!("Subscription `{}` not found", id)))?;
        subscription.title = draft.title;
        subscription.price = draft.price;
        subscription.category = draft.category;
        subscription.cycle = draft.cycle;
        subscription.anchor_date = draft.anchor_date;
        subscription.notes = draft.notes;
        subscription.color_hex = draft.color_hex;
        let updated = subscription.clone();
        store.save(&subscriptions)?;
        Ok(updated)
    }

    pub fn remove(store: &dyn StorageBackend, id: Uuid) -> ServiceResult<()> {
        let mut subscriptions = store.load()?;
        let before = subscriptions.len();
        subscriptions.retain(|sub| sub.id != id);
        if subscriptions.len() == before {
            return Err(ServiceError::Invalid(format!(
                "Subscription `{}` not found",
                id
            )));
        }
        store.save(&subscriptions)?;
        tracing::info!(%id, "subscription removed");
        Ok(())
    }

    /// Completes the pending occurrence: advances the anchor to the next due
    /// date projected against `reference` and persists. Returns the new due
    /// date after the advance.
    pub fn mark_paid(
        store: &dyn StorageBackend,
        id: Uuid,
        reference: NaiveDate,
    ) -> ServiceResult<NaiveDate> {
        let mut subscriptions = store.load()?;
        let subscription = subscriptions
            .iter_mut()
            .find(|sub| sub.id == id)
            .ok_or_else(|| ServiceError::Invalid(format!("Subscription `{}` not found", id)))?;
        subscription.advance_anchor(reference);
        let next = subscription.next_due_date(reference);
        store.save(&subscriptions)?;
        Ok(next)
    }

    fn validate(mut draft: SubscriptionDraft) -> ServiceResult<SubscriptionDraft> {
        draft.title = draft.title.trim().to_string();
        if draft.title.is_empty() {
            return Err(ServiceError::Invalid("Please enter a title".into()));
        }
        if !draft.price.is_finite() || draft.price < 0.0 {
            return Err(ServiceError::Invalid(
                "Please enter a valid price (e.g. 9.99)".into(),
            ));
        }
        if let Some(hex) = &draft.color_hex {
            let valid = hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit());
            if !valid {
                return Err(ServiceError::Invalid(format!(
                    "`{}` is not a 6-digit color hex",
                    hex
                )));
            }
        }
        if let Some(notes) = &draft.notes {
            if notes.trim().is_empty() {
                draft.notes = None;
            }
        }
        Ok(draft)
    }
}
