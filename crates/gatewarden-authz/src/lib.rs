//! hierarchical permission evaluation for gatewarden.
//!
//! this crate implements the permission decision engine: given a principal's
//! granted permission set and a required permission, decide authorization.
//! Evaluation is deny-by-default, with an `admin` override, exact matching,
//! and hierarchical matching over ranked `action:resource` permissions.

#![warn(missing_docs)]

pub mod engine;
pub mod rank;

pub use engine::AuthzEngine;
pub use rank::RankTable;
