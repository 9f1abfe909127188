//! Data access layer.
//!
//! Repositories wrap entity queries behind a small API. They are generic over
//! [`sea_orm::ConnectionTrait`] so the same code runs against the live pool
//! and against transactions or test connections.

pub mod account;
