//! Standard constant values shared across tests.
//!
//! These values are not real credentials, only placeholders that satisfy the
//! signup validation rules so fixtures and form submissions can reuse them.

/// Username used for account fixtures unless a test needs its own.
pub static TEST_USERNAME: &str = "avid_reader";

/// Password used for account fixtures.
///
/// Long enough and non-numeric so the same value passes the signup form.
pub static TEST_PASSWORD: &str = "turn3very-page";
