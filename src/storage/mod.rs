pub mod json_backend;

use crate::{domain::Subscription, errors::TrackerError};

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Abstraction over persistence backends for the subscription collection.
///
/// The engine never talks to storage directly; services load a snapshot,
/// derive or mutate, and save the full collection back.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<Vec<Subscription>>;
    fn save(&self, subscriptions: &[Subscription]) -> Result<()>;

    /// Deletes every stored subscription. Used by the reset command.
    fn reset(&self) -> Result<()> {
        self.save(&[])
    }
}

pub use json_backend::{JsonStorage, STORE_SCHEMA_VERSION};
