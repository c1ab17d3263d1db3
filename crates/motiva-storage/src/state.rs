use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::kv::KvStore;

/// Load a typed JSON value from the store. `Ok(None)` when the key is
/// absent; a present-but-unparseable value is a `Serialization` error, which
/// callers treat the same as absent (and usually delete).
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KvStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize a value as JSON and store it under `key`.
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
    S: KvStore + ?Sized,
{
    let raw = serde_json::to_string_pretty(value)?;
    store.set(key, &raw)
}
