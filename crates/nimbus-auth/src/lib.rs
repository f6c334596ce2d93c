//! Credential lifecycle management for the upstream weather provider.
//!
//! The upstream API authenticates requests with short-lived EdDSA-signed
//! JWTs. [`CredentialIssuer`] signs them on demand and caches the current
//! one in memory, renewing it before expiry.

pub mod issuer;

pub use issuer::{Credential, CredentialError, CredentialIssuer};
