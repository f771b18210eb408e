//! # Kintone MiniApp Client
//!
//! REST API client for kintone adapted to restricted mini-program runtimes
//! whose only network primitives are callback-based `request`,
//! `uploadFile`, and `downloadFile` functions.
//!
//! This crate contains:
//! - The HTTP transport adapter bridging callback completion into futures
//! - Header derivation and the client facade
//! - Thin API clients (record, app, file, bulk request)
//! - Test doubles for the platform runtime capability
//!
//! ## Architecture
//! - The platform runtime is an injected capability
//!   ([`http::PlatformRuntime`]), never ambient state
//! - Configuration is immutable after construction; each call builds a
//!   local descriptor and settles exactly once

pub mod api;
pub mod client;
pub mod config;
pub mod headers;
pub mod http;
pub mod testing;

// Re-export commonly used items
pub use client::{default_error_response_handler, KintoneMiniAppClient};
pub use config::{ClientOptions, ClientOptionsBuilder};
pub use http::{DownloadedFile, HttpClient, MiniAppHttpClient, PlatformRuntime};
