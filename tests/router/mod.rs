//! Tests for the assembled router.
//!
//! These send real requests through the router and session layer with
//! `tower::ServiceExt::oneshot`, covering method routing and the behavior
//! that only exists across requests: cookies carrying the session and
//! notices surviving exactly one redirect.

use axum::{
    http::{header, Method, Request, StatusCode},
    Router,
};
use bookden_test_utils::constant::{TEST_PASSWORD, TEST_USERNAME};
use bookden_test_utils::prelude::*;
use sea_orm::EntityTrait;
use tower::ServiceExt;

use bookden::{router, startup};

use crate::util::{body_string, form_request, get_request, session_cookie};

async fn test_app() -> Result<(TestSetup, Router), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Account)?;

    let app = router::routes()
        .with_state(test.state())
        .layer(startup::build_session_layer());

    Ok((test, app))
}

#[tokio::test]
/// Expect 200 from the home page with no session cookie
async fn serves_home_page() -> Result<(), TestError> {
    let (_test, app) = test_app().await?;

    let response = app.oneshot(get_request("/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect logout to redirect home for GET, POST, and DELETE alike
async fn logs_out_on_any_method() -> Result<(), TestError> {
    let (_test, app) = test_app().await?;

    for method in [Method::GET, Method::POST, Method::DELETE] {
        let request = Request::builder()
            .method(method.clone())
            .uri("/accounts/logout/")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::SEE_OTHER,
            "unexpected status for {} logout",
            method
        );
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/")
        );
    }

    Ok(())
}

#[tokio::test]
/// Expect 405 for methods the signup route does not register
async fn rejects_unsupported_signup_method() -> Result<(), TestError> {
    let (_test, app) = test_app().await?;

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/accounts/signup/")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}

#[tokio::test]
/// Expect the logged-out notice to show on the next page and only there
async fn notice_survives_exactly_one_redirect() -> Result<(), TestError> {
    let (_test, app) = test_app().await?;

    let logout_response = app
        .clone()
        .oneshot(get_request("/accounts/logout/", None))
        .await
        .unwrap();
    assert_eq!(logout_response.status(), StatusCode::SEE_OTHER);

    let cookie = session_cookie(&logout_response).unwrap();

    let first_home = app
        .clone()
        .oneshot(get_request("/", Some(&cookie)))
        .await
        .unwrap();
    let first_body = body_string(first_home).await;
    assert!(first_body.contains("You have been logged out."));

    let second_home = app
        .oneshot(get_request("/", Some(&cookie)))
        .await
        .unwrap();
    let second_body = body_string(second_home).await;
    assert!(!second_body.contains("You have been logged out."));

    Ok(())
}

#[tokio::test]
/// Expect signup, login, logout to work end to end through the router
async fn signup_login_logout_journey() -> Result<(), TestError> {
    let (test, app) = test_app().await?;

    // Signup creates the account but does not sign the visitor in
    let signup_response = app
        .clone()
        .oneshot(form_request(
            "/accounts/signup/",
            &format!(
                "username={}&password1={}&password2={}",
                TEST_USERNAME, TEST_PASSWORD, TEST_PASSWORD
            ),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(signup_response.status(), StatusCode::SEE_OTHER);

    let accounts = entity::prelude::Account::find().all(&test.state.db).await?;
    assert_eq!(accounts.len(), 1);

    let login_response = app
        .clone()
        .oneshot(form_request(
            "/accounts/login/",
            &format!("username={}&password={}", TEST_USERNAME, TEST_PASSWORD),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(login_response.status(), StatusCode::SEE_OTHER);

    let mut cookie = session_cookie(&login_response).unwrap();

    let home_response = app
        .clone()
        .oneshot(get_request("/", Some(&cookie)))
        .await
        .unwrap();
    let home_body = body_string(home_response).await;
    assert!(home_body.contains("Signed in as"));
    assert!(home_body.contains(TEST_USERNAME));

    let logout_response = app
        .clone()
        .oneshot(get_request("/accounts/logout/", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(logout_response.status(), StatusCode::SEE_OTHER);
    if let Some(new_cookie) = session_cookie(&logout_response) {
        cookie = new_cookie;
    }

    let after_logout = app
        .oneshot(get_request("/", Some(&cookie)))
        .await
        .unwrap();
    let after_body = body_string(after_logout).await;
    assert!(after_body.contains("You have been logged out."));
    assert!(after_body.contains("/accounts/login/"));
    assert!(!after_body.contains("Signed in as"));

    Ok(())
}

#[tokio::test]
/// Expect a failed login through the router to re-render rather than redirect
async fn rerenders_failed_login() -> Result<(), TestError> {
    let (test, app) = test_app().await?;
    account::insert_default_account(&test.state.db).await?;

    let response = app
        .oneshot(form_request(
            "/accounts/login/",
            &format!("username={}&password=wrong-password1", TEST_USERNAME),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Please enter a correct username and password."));

    Ok(())
}
