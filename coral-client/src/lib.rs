//! Coral Client - HTTP gateway for the admin panel API
//!
//! Wraps every outbound call: attaches bearer credentials, maps responses
//! into a uniform result shape, and invalidates the session on
//! authorization failure. The entity stores consume this crate through the
//! per-entity API traits and never touch HTTP details themselves.

pub mod api;
pub mod config;
pub mod credential;
pub mod error;
pub mod http;

pub use api::{AuthApi, CartApi, ProductApi, UserApi};
pub use config::ClientConfig;
pub use credential::{Credential, CredentialStorage};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
