use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    Form,
};
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{
        accounts::{LoginForm, SignupErrors, SignupForm, LOGIN_FAILED},
        app::AppState,
        session::{account::SessionAccountId, flash::SessionFlash},
    },
    service::accounts::{AccountService, SignupOutcome},
    view,
};

pub const LOGGED_OUT_NOTICE: &str = "You have been logged out.";

/// Renders the signup form
///
/// # Responses
/// - 200 (OK): The empty account-creation form
pub async fn signup_form() -> impl IntoResponse {
    view::accounts::signup_page("", &SignupErrors::default())
}

/// Creates an account from the submitted signup form
///
/// A successful submission creates exactly one account and redirects; the
/// visitor is not signed in automatically. A failed submission re-renders
/// the form with each problem next to its field and writes nothing.
///
/// # Responses
/// - 303 (See Other): Account created, redirect to the home page
/// - 200 (OK): Validation failed, form re-rendered with field errors
/// - 500 (Internal Server Error): A database or hashing error occurred
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<impl IntoResponse, Error> {
    let account_service = AccountService::new(&state.db);

    match account_service.signup(&form).await? {
        SignupOutcome::Created(account) => {
            tracing::info!(username = %account.username, "account created");

            Ok(Redirect::to("/").into_response())
        }
        SignupOutcome::Invalid(errors) => {
            Ok(view::accounts::signup_page(&form.username, &errors).into_response())
        }
    }
}

/// Renders the login form
///
/// # Responses
/// - 200 (OK): The empty login form
pub async fn login_form() -> impl IntoResponse {
    view::accounts::login_page("", None)
}

/// Logs an account in from the submitted login form
///
/// The session ID is rotated before the account ID is stored so a session
/// fixed before login never carries the signed-in state.
///
/// # Responses
/// - 303 (See Other): Credentials accepted, redirect to the home page
/// - 200 (OK): Credentials rejected, form re-rendered with a generic error
/// - 500 (Internal Server Error): A database or session error occurred
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    let account_service = AccountService::new(&state.db);

    match account_service
        .authenticate(&form.username, &form.password)
        .await?
    {
        Some(account) => {
            session.cycle_id().await?;
            SessionAccountId::insert(&session, account.id).await?;

            tracing::info!(username = %account.username, "account logged in");

            Ok(Redirect::to("/").into_response())
        }
        None => {
            Ok(view::accounts::login_page(&form.username, Some(LOGIN_FAILED)).into_response())
        }
    }
}

/// Logs the visitor out by clearing their session
///
/// Registered for every HTTP method rather than POST only, so plain links
/// and prefetched GETs log out the same way a form submission does. The
/// logged-out notice is queued even for visitors who were never signed in.
///
/// # Responses
/// - 303 (See Other): Redirect to the home page, session cleared if one existed
/// - 500 (Internal Server Error): There was an issue updating the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_account_id = SessionAccountId::get(&session).await?;

    // Only clear session if there is actually an account in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_account_id.is_some() {
        session.clear().await;
    }

    SessionFlash::push(&session, LOGGED_OUT_NOTICE).await?;

    Ok(Redirect::to("/"))
}
