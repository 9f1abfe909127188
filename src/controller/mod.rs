//! HTTP controller endpoints.
//!
//! Controllers parse the request, call into the service layer, and pick the
//! response: a redirect when the action succeeded, a re-rendered form when it
//! did not. Session state goes through the typed wrappers in
//! [`crate::model::session`].

pub mod accounts;
pub mod home;
