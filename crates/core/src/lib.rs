//! # Tutorials Core
//!
//! Core data access for tutorial records.
//!
//! This crate contains:
//! - The [`Tutorial`] record and its create/patch inputs
//! - The [`TutorialStore`] contract with MongoDB and in-memory implementations
//! - [`TutorialService`], the operations the API layer and CLI call
//! - Startup configuration ([`CoreConfig`])
//!
//! **No API concerns**: HTTP servers, status codes and wire types belong in `api-rest` and
//! `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod service;
pub mod store;
pub mod tutorial;

pub use config::{database_url_from_env_value, CoreConfig, StoreKind};
pub use constants::DEFAULT_DATABASE_URL;
pub use error::{TutorialError, TutorialResult};
pub use service::TutorialService;
pub use store::{connect, InMemoryTutorialStore, MongoTutorialStore, TutorialStore};
pub use tutorial::{NewTutorial, Tutorial, TutorialPatch};
pub use tutorials_types::{NonEmptyText, TutorialId};
