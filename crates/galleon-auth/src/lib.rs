//! Galleon credential resolution and resilient requests
//!
//! This crate is the authentication layer of the Galleon client: given a
//! repository URL it decides what credentials (if any) to attach, and it
//! executes the request with retry/backoff for transient failures.
//!
//! ## Key Features
//!
//! - **Precedence chain**: URL userinfo, then environment variables, then
//!   explicit configuration, then the secret store - first match wins
//! - **Prefix-scoped credentials**: repositories sharing a host but
//!   diverging in path each resolve their own credentials
//! - **Transient-aware retries**: network failures and 502/503/504 retry
//!   with backoff; every other failing status surfaces immediately
//! - **Worker-safe**: one `Authenticator` serves many concurrent downloads
//!
//! ## Example
//!
//! ```rust,no_run
//! use galleon_auth::{AuthConfig, Authenticator, Repository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig {
//!     repositories: vec![Repository::new("foo", "https://foo.bar/simple/")?],
//!     ..Default::default()
//! };
//!
//! let authenticator = Authenticator::new(config)?;
//! let archive = authenticator
//!     .get_bytes("https://foo.bar/simple/foo-0.1.0.tar.gz")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Security Notes
//!
//! - Credentials are read-only here: nothing is written back to
//!   configuration or the secret store
//! - Userinfo is stripped from URLs before they reach the transport
//! - Credential types redact passwords from `Debug` output, and the
//!   Authorization header is marked sensitive

pub mod authenticator;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod keyring;
pub mod retry;
pub mod transport;

// Re-exports for convenience
pub use authenticator::{Authenticator, RequestOptions};
pub use client::{ResilientClient, Sleeper, TokioSleeper};
pub use config::{AuthConfig, CredentialEntry, Repository, RepositoryRegistry};
pub use credentials::{Credential, CredentialResolver, CredentialSource, env_var_names};
pub use error::{AuthError, Result};
pub use keyring::{MemorySecretStore, NoSecretStore, SecretEntry, SecretStore};
pub use retry::{AttemptFailure, AttemptOutcome, RetryPolicy};
pub use transport::{
    HttpTransport, Transport, TransportError, TransportRequest, TransportResponse,
};
