//! Common test utilities and helpers
//!
//! - Test application fixture over the in-memory store
//! - Authentication helpers (users and tokens)
//! - Assertion helpers for favorites responses
//! - A storage backend that fails on demand
#![allow(dead_code)]

pub mod app;
pub mod assertions;
pub mod auth_helpers;
pub mod failing_store;

pub use app::*;
pub use assertions::*;
pub use auth_helpers::*;
pub use failing_store::*;
