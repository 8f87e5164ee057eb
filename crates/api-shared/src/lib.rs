//! # API Shared
//!
//! Shared definitions for the tutorials API.
//!
//! Contains:
//! - Request/response bodies (`dto` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and kept free of core types so the wire format can be reviewed on its own.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
