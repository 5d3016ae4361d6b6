//! Rehearsal Types - Shared domain types
//!
//! This crate contains domain types used across Rehearsal services:
//! - User identity
//! - Billing records and subscription status
//! - Derived access decisions and entitlement checks

pub mod access;
pub mod error;
pub mod subscription;
pub mod user;

pub use access::*;
pub use error::*;
pub use subscription::*;
pub use user::*;
