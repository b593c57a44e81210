//! Typed client for the MetaMap government-check API

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

/// Credentials and per-request authentication
pub mod auth;

/// Generic request dispatch
pub mod client;

/// Client configuration
pub mod config;

/// Deployment environment and logging setup
pub mod environment;

/// Client error types
pub mod error;

/// Typed endpoint wrappers
pub mod govchecks;

pub use auth::{AccessToken, Credentials};
pub use client::Client;
pub use config::ClientConfig;
pub use environment::Environment;
pub use error::{ClientError, ClientResult};
pub use govcheck_types::{
    argentina, AuthMode, BusinessError, GovCheckRequest, GovCheckResponse, HttpMethod, Metadata,
};
