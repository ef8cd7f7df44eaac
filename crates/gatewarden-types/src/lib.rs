//! core types for gatewarden - an authorization front-end core.
//!
//! this crate provides the fundamental data structures used throughout gatewarden:
//! - [`permission`]: permission strings and permission sets
//! - [`principal`]: an authenticated identity plus its resolved permissions
//! - [`claims`]: session token claims and payload decoding
//! - [`config`]: application configuration

#![warn(missing_docs)]

mod claims;
mod config;
mod permission;
mod principal;

pub use claims::{ClaimsError, SessionClaims, decode_claims};
pub use config::{AuthConfig, Config};
pub use permission::{ADMIN, PermissionSet, split_scoped};
pub use principal::Principal;
