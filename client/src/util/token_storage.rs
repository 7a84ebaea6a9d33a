//! Bearer-token persistence in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only sees the [`TokenStore`] trait. Outside the browser
//! (native tests) there is no storage: nothing loads and writes fail.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

use session::{StorageError, TokenStore};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError("localStorage unavailable".to_owned()))
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage().ok()?.get_item(TOKEN_KEY).ok().flatten()?;
            (!raw.trim().is_empty()).then_some(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(TOKEN_KEY, token)
                .map_err(|e| StorageError(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(unavailable())
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(TOKEN_KEY)
                .map_err(|e| StorageError(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> StorageError {
    StorageError("localStorage unavailable outside the browser".to_owned())
}
