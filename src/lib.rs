//! Endpoint configurations for the [Firefox Accounts] deployment environments.
//!
//! [Firefox Accounts]: <https://accounts.firefox.com>
//!
//! # Usage
//!
//! Pick one of the presets and use its URLs as base addresses:
//!
//! ```
//! use fxa_endpoints::{EndpointConfig, Environment};
//!
//! let config = EndpointConfig::production();
//! assert_eq!(config.label(), "Production");
//! assert_eq!(
//!     config.force_auth_url().as_str(),
//!     "https://accounts.firefox.com/force_auth?service=sync&context=fx_ios_v1"
//! );
//!
//! // Or select the environment by name.
//! let env: Environment = "stage".parse().unwrap();
//! assert_eq!(env.config(), EndpointConfig::stage());
//! ```
//!
//! The API server URLs (`auth_server_url`, `oauth_server_url`,
//! `profile_server_url`) are used exactly as configured. The page URLs
//! (`sign_in_url`, `settings_url`, `force_auth_url`) are opened in a browser
//! and carry a `context` query parameter identifying the client, see
//! [append_context_param].
//!
//! Custom deployments can be described with [EndpointConfig::new] or
//! deserialized with serde; every URL is validated either way.

pub mod config;
pub mod endpoint;
pub mod environment;
pub mod error;

pub use config::{append_context_param, EndpointConfig, CONTEXT};
pub use endpoint::{EndpointUrl, UrlError};
pub use environment::Environment;
pub use error::{Error, Result};
