//! [`SessionStorage`] backed by the browser's `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `web_sys::Storage` is not `Send`, so the handle is looked up on every call
//! instead of being held. Outside the browser every operation reports
//! [`StorageError::Unavailable`] and the session store treats the user as
//! logged out.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use friendlink::{SessionStorage, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, StorageError> {
    Err(StorageError::Unavailable("localStorage is only available in the browser".to_owned()))
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.get_item(key).map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            unavailable()
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            // Quota errors surface here.
            storage()?.set_item(key, value).map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            unavailable()
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.remove_item(key).map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            unavailable()
        }
    }
}
