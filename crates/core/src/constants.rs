//! Constants used throughout the tutorials core crate.

/// Connection string used when `MONGODB_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017/tutorials_db";

/// Database name used when the connection string does not name one.
pub const DEFAULT_DATABASE_NAME: &str = "tutorials_db";

/// Collection holding tutorial documents.
pub const TUTORIALS_COLLECTION: &str = "tutorials";

/// Connection string scheme that selects the in-memory store.
pub const MEMORY_SCHEME: &str = "memory://";

/// Connection string schemes accepted for the MongoDB store.
pub const MONGODB_SCHEMES: &[&str] = &["mongodb://", "mongodb+srv://"];
