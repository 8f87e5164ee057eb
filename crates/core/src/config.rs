//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the store and
//! services. Nothing in the core reads environment variables during request handling.

use crate::constants::{DEFAULT_DATABASE_URL, MEMORY_SCHEME, MONGODB_SCHEMES};
use crate::{TutorialError, TutorialResult};

/// Which backing store a connection string selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    MongoDb,
    Memory,
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    database_url: String,
    store_kind: StoreKind,
}

impl CoreConfig {
    /// Create a new `CoreConfig` from a backing store connection string.
    ///
    /// # Errors
    ///
    /// Returns [`TutorialError::InvalidConfig`] if the URL is blank or its scheme is neither
    /// `mongodb://`, `mongodb+srv://` nor `memory://`.
    pub fn new(database_url: impl Into<String>) -> TutorialResult<Self> {
        let database_url = database_url.into().trim().to_string();
        if database_url.is_empty() {
            return Err(TutorialError::InvalidConfig(
                "database url cannot be empty".into(),
            ));
        }

        let store_kind = if database_url.starts_with(MEMORY_SCHEME) {
            StoreKind::Memory
        } else if MONGODB_SCHEMES
            .iter()
            .any(|scheme| database_url.starts_with(scheme))
        {
            StoreKind::MongoDb
        } else {
            return Err(TutorialError::InvalidConfig(format!(
                "unsupported database url scheme (expected mongodb://, mongodb+srv:// or {MEMORY_SCHEME})"
            )));
        };

        Ok(Self {
            database_url,
            store_kind,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn store_kind(&self) -> StoreKind {
        self.store_kind
    }

    /// Connection string with any `user:password@` credentials masked, for logging.
    pub fn redacted_database_url(&self) -> String {
        let url = &self.database_url;
        let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
            return url.clone();
        };
        let rest = &url[scheme_end..];
        let host_end = rest.find('/').unwrap_or(rest.len());
        match rest[..host_end].rfind('@') {
            Some(at) => format!("{}***@{}", &url[..scheme_end], &rest[at + 1..]),
            None => url.clone(),
        }
    }
}

/// Resolve the connection string from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_DATABASE_URL`].
pub fn database_url_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_value_falls_back_to_default() {
        assert_eq!(database_url_from_env_value(None), DEFAULT_DATABASE_URL);
        assert_eq!(
            database_url_from_env_value(Some("   ".into())),
            DEFAULT_DATABASE_URL
        );
        assert_eq!(
            database_url_from_env_value(Some(" memory:// ".into())),
            "memory://"
        );
    }

    #[test]
    fn test_store_kind_from_scheme() {
        let mongo = CoreConfig::new("mongodb://db:27017/tutorials").unwrap();
        assert_eq!(mongo.store_kind(), StoreKind::MongoDb);

        let srv = CoreConfig::new("mongodb+srv://cluster.example.net/app").unwrap();
        assert_eq!(srv.store_kind(), StoreKind::MongoDb);

        let memory = CoreConfig::new("memory://").unwrap();
        assert_eq!(memory.store_kind(), StoreKind::Memory);
    }

    #[test]
    fn test_rejects_blank_and_unknown_schemes() {
        assert!(matches!(
            CoreConfig::new("  "),
            Err(TutorialError::InvalidConfig(_))
        ));
        assert!(matches!(
            CoreConfig::new("postgres://localhost/db"),
            Err(TutorialError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_redacts_credentials() {
        let cfg = CoreConfig::new("mongodb://admin:secret@db:27017/tutorials").unwrap();
        assert_eq!(cfg.redacted_database_url(), "mongodb://***@db:27017/tutorials");

        let plain = CoreConfig::new("mongodb://db:27017/tutorials").unwrap();
        assert_eq!(plain.redacted_database_url(), "mongodb://db:27017/tutorials");
    }
}
