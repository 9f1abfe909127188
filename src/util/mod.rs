//! Utility functions shared across services.

pub mod password;
