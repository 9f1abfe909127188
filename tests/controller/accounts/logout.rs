use axum::{http::StatusCode, response::IntoResponse};
use bookden_test_utils::prelude::*;

use bookden::{
    controller::accounts::{logout, LOGGED_OUT_NOTICE},
    model::session::{account::SessionAccountId, flash::SessionFlash},
};

#[tokio::test]
/// Expect 303 redirect after logout with an account ID in session
async fn returns_redirect_on_logout_with_account_id() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let account_id = 1;
    SessionAccountId::insert(&test.session, account_id)
        .await
        .unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // Ensure account was cleared from session
    let maybe_account_id = SessionAccountId::get(&test.session).await.unwrap();
    assert!(maybe_account_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 303 redirect after logout even without session data
///
/// This checks for the 500 internal error that occurs when clearing
/// a session without any data in it. To resolve this, the endpoint doesn't
/// clear session unless there is actually an account ID in session, it will
/// redirect home regardless of clear being called.
async fn returns_redirect_on_logout_with_no_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    Ok(())
}

#[tokio::test]
/// Expect the logged-out notice to be queued for the next page
async fn queues_logged_out_notice() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    SessionAccountId::insert(&test.session, 1).await.unwrap();
    logout(test.session.clone()).await.unwrap();

    let notices = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(notices, vec![LOGGED_OUT_NOTICE.to_string()]);

    Ok(())
}

#[tokio::test]
/// Expect the notice to be queued even for visitors who were never signed in
async fn queues_notice_for_anonymous_visitor() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    logout(test.session.clone()).await.unwrap();

    let notices = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(notices, vec![LOGGED_OUT_NOTICE.to_string()]);

    Ok(())
}
