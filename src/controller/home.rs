use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{
        app::AppState,
        session::{account::SessionAccountId, flash::SessionFlash},
    },
    service::accounts::AccountService,
    view,
};

/// Renders the landing page
///
/// Drains queued notices so each one shows exactly once. A session pointing
/// at an account that no longer exists renders as anonymous rather than
/// failing.
///
/// # Responses
/// - 200 (OK): The home page
/// - 500 (Internal Server Error): A database or session error occurred
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let notices = SessionFlash::take(&session).await?;

    let account = match SessionAccountId::get(&session).await? {
        Some(account_id) => {
            AccountService::new(&state.db)
                .get_account(account_id)
                .await?
        }
        None => None,
    };

    let username = account.as_ref().map(|account| account.username.as_str());

    Ok(view::home::home_page(username, &notices))
}
