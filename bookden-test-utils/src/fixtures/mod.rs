//! Test fixture modules for database record creation.
//!
//! Fixtures insert real rows through the entity layer so tests exercise the
//! same schema the application runs against.

pub mod account;
