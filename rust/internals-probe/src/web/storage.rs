use crate::{KeyValueStore, ProbeError, StorageScope};

use super::{access_error, window};

/// `window.localStorage` or `window.sessionStorage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStorage {
    scope: StorageScope,
}

impl BrowserStorage {
    /// A handle on the storage area for `scope`.
    pub fn new(scope: StorageScope) -> Self {
        Self { scope }
    }

    fn area(&self) -> Result<web_sys::Storage, ProbeError> {
        let window = window()?;
        let storage = match self.scope {
            StorageScope::Local => window.local_storage(),
            StorageScope::Session => window.session_storage(),
        };
        storage
            .map_err(access_error)?
            .ok_or_else(|| ProbeError::Unavailable(self.scope.title().into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn len(&self) -> Result<u32, ProbeError> {
        self.area()?.length().map_err(access_error)
    }

    fn key(&self, index: u32) -> Result<Option<String>, ProbeError> {
        self.area()?.key(index).map_err(access_error)
    }

    fn get(&self, key: &str) -> Result<Option<String>, ProbeError> {
        self.area()?.get_item(key).map_err(access_error)
    }

    fn clear(&self) -> Result<(), ProbeError> {
        self.area()?.clear().map_err(access_error)
    }
}
