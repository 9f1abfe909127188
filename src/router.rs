//! HTTP routing configuration.
//!
//! All routes are registered here. The account flows live under
//! `/accounts/` and the trailing slashes are part of the paths. Logout is
//! registered with [`any`] on purpose: it accepts every HTTP method so
//! link-based logout works alongside form posts.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all endpoints registered.
///
/// # Registered Endpoints
/// - `GET /` - Home page
/// - `GET /accounts/login/` - Login form
/// - `POST /accounts/login/` - Log in
/// - `ANY /accounts/logout/` - Log out current account
/// - `GET /accounts/signup/` - Signup form
/// - `POST /accounts/signup/` - Create an account
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(controller::home::index))
        .route(
            "/accounts/login/",
            get(controller::accounts::login_form).post(controller::accounts::login),
        )
        .route("/accounts/logout/", any(controller::accounts::logout))
        .route(
            "/accounts/signup/",
            get(controller::accounts::signup_form).post(controller::accounts::signup),
        )
}
