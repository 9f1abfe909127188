//! Server application models and type definitions.
//!
//! This module contains the shared application state, the account form models
//! with their validation rules, and type-safe wrappers for session data.

pub mod accounts;
pub mod app;
pub mod session;
