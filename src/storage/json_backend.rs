//! JSON-file persistence for the subscription collection.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::Subscription;
use crate::errors::TrackerError;
use crate::storage::{Result, StorageBackend};
use crate::utils;

pub const STORE_SCHEMA_VERSION: u32 = 1;

const TMP_SUFFIX: &str = "tmp";

/// On-disk envelope around the subscription list.
#[derive(Debug, Serialize, Deserialize)]
struct StoreData {
    schema_version: u32,
    subscriptions: Vec<Subscription>,
}

/// Stores the whole collection as one pretty-printed JSON file, written
/// atomically via a temp file and rename.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Backend at the managed location (`~/.subtrack/subscriptions.json`).
    pub fn new() -> Self {
        Self {
            path: utils::subscriptions_file(),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Vec<Subscription>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let store: StoreData = serde_json::from_str(&data)?;
        if store.schema_version > STORE_SCHEMA_VERSION {
            return Err(TrackerError::Storage(format!(
                "subscription store schema {} is newer than supported {}",
                store.schema_version, STORE_SCHEMA_VERSION
            )));
        }
        Ok(store.subscriptions)
    }

    fn save(&self, subscriptions: &[Subscription]) -> Result<()> {
        let store = StoreData {
            schema_version: STORE_SCHEMA_VERSION,
            subscriptions: subscriptions.to_vec(),
        };
        let json = serde_json::to_string_pretty(&store)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), count = subscriptions.len(), "store saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
