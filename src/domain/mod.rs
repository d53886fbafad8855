//! Domain types: the subscription record and its closed enumerations.

pub mod category;
pub mod common;
pub mod cycle;
pub mod subscription;

pub use category::SubscriptionCategory;
pub use common::{Decoded, Displayable, Identifiable, NamedEntity};
pub use cycle::BillingCycle;
pub use subscription::Subscription;
