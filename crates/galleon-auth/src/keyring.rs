//! Secret-store lookup contract
//!
//! The physical store (OS keychain, credential helper, vault) lives outside
//! this crate; only its read contract is consumed here. Identifiers are
//! repository URL strings, not repository names.

use std::collections::HashMap;
use std::fmt;

/// A secret as stored in the external store
///
/// Either half may be missing; defaulting to the empty string happens at
/// resolution time.
#[derive(Clone, Default)]
pub struct SecretEntry {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for SecretEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretEntry")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "*****"))
            .finish()
    }
}

/// Read-only secret lookup by URL identifier
///
/// Implementations must treat an unavailable store as a miss: absence of a
/// secret is not an error condition, and a broken store never fails a
/// request. Implementations are queried concurrently from download workers.
pub trait SecretStore: Send + Sync {
    /// Look up the secret stored under `url`, if any
    fn lookup(&self, url: &str) -> Option<SecretEntry>;
}

/// Store with no secrets; the default when no backend is wired up
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSecretStore;

impl SecretStore for NoSecretStore {
    fn lookup(&self, _url: &str) -> Option<SecretEntry> {
        None
    }
}

/// In-memory store, used by embedders that load secrets themselves and in
/// tests as a stand-in for a system keyring
#[derive(Debug, Clone, Default)]
pub struct MemorySecretStore {
    entries: HashMap<String, SecretEntry>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a secret under a URL identifier
    pub fn insert(
        &mut self,
        url: impl Into<String>,
        username: Option<String>,
        password: Option<String>,
    ) {
        self.entries
            .insert(url.into(), SecretEntry { username, password });
    }
}

impl SecretStore for MemorySecretStore {
    fn lookup(&self, url: &str) -> Option<SecretEntry> {
        self.entries.get(url).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lookup() {
        let mut store = MemorySecretStore::new();
        store.insert(
            "https://foo.bar/simple/",
            None,
            Some("bar".to_string()),
        );

        let entry = store.lookup("https://foo.bar/simple/").unwrap();
        assert_eq!(entry.username, None);
        assert_eq!(entry.password.as_deref(), Some("bar"));

        assert!(store.lookup("https://foo.bar/other/").is_none());
    }

    #[test]
    fn test_secret_entry_debug_redacts_password() {
        let entry = SecretEntry {
            username: Some("bar".to_string()),
            password: Some("baz".to_string()),
        };
        let rendered = format!("{:?}", entry);
        assert!(!rendered.contains("baz"));
    }
}
