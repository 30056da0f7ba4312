//! Middleware module
//!
//! Bearer authentication and the credential stores it consults.

pub mod auth;
pub mod credentials;

pub use credentials::{AllowAnyBearer, CredentialStore, Principal, StaticTokenStore};
