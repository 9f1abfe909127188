//! Business logic services.
//!
//! Services sit between controllers and repositories: they own the rules for
//! account creation and credential checks while controllers stay thin.

pub mod accounts;
