//! session validation and caching for gatewarden.
//!
//! this crate resolves opaque session tokens into [`Principal`]s by calling
//! the upstream authentication service, and memoizes successful validations
//! for a fixed ttl so that most requests never leave the process:
//! - [`transport`]: the remote-validation seam and its http implementation
//! - [`cache`]: the ttl-bounded session cache with lazy expiry
//!
//! [`Principal`]: gatewarden_types::Principal

#![warn(missing_docs)]

pub mod cache;
mod error;
mod http;
pub mod transport;

pub use cache::SessionCache;
pub use error::Error;
pub use http::HttpValidator;
pub use transport::{Validation, ValidationTransport};
