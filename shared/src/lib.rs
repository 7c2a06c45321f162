//! Shared types for the coral-admin panel
//!
//! Wire models, request/response DTOs, and pagination types used by the
//! gateway client and the entity stores.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};
