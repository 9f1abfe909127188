//! Bookden server library.
//!
//! Bookden is a small reading club web application. This crate carries the
//! accounts feature (signup, login, logout) and the home page those flows
//! return to. Request handling is axum, session state is tower-sessions, and
//! persistence is sea-orm over SQLite.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod view;
