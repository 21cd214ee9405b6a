use std::fmt;

use crate::{Entry, ProbeError};

/// Which browser storage area a store reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// Durable, origin-scoped storage
    Local,
    /// Tab-lifetime storage
    Session,
}

impl StorageScope {
    /// Title shown on the card for this scope.
    pub fn title(&self) -> &'static str {
        match self {
            StorageScope::Local => "Local Storage",
            StorageScope::Session => "Session Storage",
        }
    }
}

impl fmt::Display for StorageScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A facade over a key-value storage area that can be enumerated by index,
/// read by key and cleared.
///
/// Every method may fail (for example when the host denies storage access);
/// [`read_all`] and [`clear`] turn those failures into empty snapshots and
/// no-ops respectively.
pub trait KeyValueStore {
    /// Number of keys currently held.
    fn len(&self) -> Result<u32, ProbeError>;
    /// The key at `index` in native enumeration order, if any.
    fn key(&self, index: u32) -> Result<Option<String>, ProbeError>;
    /// The value stored against `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, ProbeError>;
    /// Remove every entry.
    fn clear(&self) -> Result<(), ProbeError>;

    /// Whether the store currently holds no keys.
    fn is_empty(&self) -> Result<bool, ProbeError> {
        Ok(self.len()? == 0)
    }
}

impl<T> KeyValueStore for std::sync::Arc<T>
where
    T: KeyValueStore + ?Sized,
{
    fn len(&self) -> Result<u32, ProbeError> {
        (**self).len()
    }

    fn key(&self, index: u32) -> Result<Option<String>, ProbeError> {
        (**self).key(index)
    }

    fn get(&self, key: &str) -> Result<Option<String>, ProbeError> {
        (**self).get(key)
    }

    fn clear(&self) -> Result<(), ProbeError> {
        (**self).clear()
    }
}

/// Take a snapshot of every entry in `store`, in the store's enumeration
/// order, with sizes.
///
/// Returns an empty snapshot if the store cannot be read.
pub fn read_all<S>(store: &S) -> Vec<Entry>
where
    S: KeyValueStore + ?Sized,
{
    match try_read_all(store) {
        Ok(entries) => {
            tracing::debug!(count = entries.len(), "Read storage snapshot");
            entries
        }
        Err(error) => {
            tracing::warn!(%error, "Storage unreadable, showing empty snapshot");
            Vec::new()
        }
    }
}

fn try_read_all<S>(store: &S) -> Result<Vec<Entry>, ProbeError>
where
    S: KeyValueStore + ?Sized,
{
    let length = store.len()?;
    let mut entries = Vec::with_capacity(length as usize);

    for index in 0..length {
        // A key can vanish between `len` and `key` if another context
        // writes to the same area.
        let Some(key) = store.key(index)? else {
            continue;
        };
        let value = store.get(&key)?.unwrap_or_default();
        entries.push(Entry::sized(key, value));
    }

    Ok(entries)
}

/// Remove every entry from `store`.
///
/// Failures are logged and otherwise ignored. The caller is expected to
/// [`read_all`] again afterwards; nothing cached is updated here.
pub fn clear<S>(store: &S)
where
    S: KeyValueStore + ?Sized,
{
    if let Err(error) = store.clear() {
        tracing::warn!(%error, "Failed to clear storage");
    }
}
