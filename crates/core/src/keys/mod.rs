//! API key issuance and validation
//!
//! Keys are opaque upper-case hex tokens persisted to a JSON document of the
//! form `{"apiKeys": ["...", ...]}`. The store holds the set in memory behind
//! a single async lock; every issuance persists the full set before the lock
//! is released, so concurrent issuers cannot lose each other's writes.

use std::path::{Path, PathBuf};

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::CatalogResult;

/// Random bytes per generated key
const KEY_BYTES: usize = 32;

/// On-disk key document
#[derive(Debug, Default, Serialize, Deserialize)]
struct KeyDocument {
    #[serde(rename = "apiKeys", default)]
    api_keys: Vec<String>,
}

/// Persistent set of issued API keys
#[derive(Debug)]
pub struct ApiKeyStore {
    keys: RwLock<Vec<String>>,
    storage_path: PathBuf,
}

impl ApiKeyStore {
    /// Open the store at `storage_path`.
    ///
    /// A missing file yields an empty set. A file that exists but cannot be
    /// read or parsed is an error, so it is never overwritten on issuance.
    pub async fn open(storage_path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let storage_path = storage_path.into();
        let keys = load_from_disk(&storage_path).await?;
        info!(path = %storage_path.display(), count = keys.len(), "Opened API key store");

        Ok(Self {
            keys: RwLock::new(keys),
            storage_path,
        })
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Generate a new key, persist it, and return it.
    ///
    /// The key is only added to the in-memory set once it is on disk.
    pub async fn issue(&self) -> CatalogResult<String> {
        let mut keys = self.keys.write().await;
        let key = generate_key();

        let mut updated = keys.clone();
        updated.push(key.clone());
        save_to_disk(&self.storage_path, &updated).await?;
        *keys = updated;

        info!(count = keys.len(), "Issued API key");
        Ok(key)
    }

    /// Whether `candidate` exactly matches an issued key.
    ///
    /// Absent or empty candidates are never valid.
    pub async fn validate(&self, candidate: Option<&str>) -> bool {
        let candidate = match candidate {
            Some(c) if !c.is_empty() => c,
            _ => return false,
        };

        let keys = self.keys.read().await;
        // Compare against every key so timing does not reveal which matched.
        let mut matched = false;
        for key in keys.iter() {
            if constant_time_eq(candidate, key) {
                matched = true;
            }
        }
        matched
    }

    /// Number of issued keys
    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.keys.read().await.is_empty()
    }
}

async fn load_from_disk(path: &Path) -> CatalogResult<Vec<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => {
            let document: KeyDocument = serde_json::from_str(&contents)?;
            Ok(document.api_keys)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

async fn save_to_disk(path: &Path, keys: &[String]) -> CatalogResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let document = KeyDocument {
        api_keys: keys.to_vec(),
    };
    let contents = serde_json::to_string_pretty(&document)?;
    let tmp_path = path.with_extension("tmp");
    tokio::fs::write(&tmp_path, contents).await?;
    tokio::fs::rename(&tmp_path, path).await?;
    Ok(())
}

/// Generate a random key: 32 bytes from the OS RNG, upper-case hex
pub fn generate_key() -> String {
    let mut bytes = [0u8; KEY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode_upper(bytes)
}

/// Compare two strings without short-circuiting on the first difference
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    if a_bytes.len() != b_bytes.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a_bytes.iter().zip(b_bytes) {
        diff |= x ^ y;
    }
    diff == 0
}
