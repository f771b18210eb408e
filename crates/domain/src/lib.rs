//! # Kintone MiniApp Domain
//!
//! Domain types for the kintone mini-program REST client.
//!
//! This crate contains:
//! - Credential types and the validating classification factory
//! - Error types and Result definitions
//! - Domain constants (platform limits, header names)
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure data types, no I/O

pub mod auth;
pub mod constants;
pub mod errors;

// Re-export commonly used items
pub use auth::{ApiTokens, AuthConfig, BasicAuth, Credential, GuestSpaceId};
pub use errors::{ApiErrorResponse, KintoneError, Result};
