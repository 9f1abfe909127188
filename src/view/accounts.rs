//! Pages for the account flows.

use axum::response::Html;

use crate::model::accounts::SignupErrors;

use super::{escape, page};

fn field_error_html(errors: &[String]) -> String {
    let mut html = String::new();
    for error in errors {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", escape(error)));
    }

    html
}

/// The signup form.
///
/// `username` re-fills the field after a failed submission so the visitor
/// only fixes what was wrong; password fields are never echoed back.
pub fn signup_page(username: &str, errors: &SignupErrors) -> Html<String> {
    let main = format!(
        "<h1>Sign up</h1>\n\
         <form method=\"post\" action=\"/accounts/signup/\">\n\
         <p>\n\
         <label for=\"id_username\">Username</label>\n\
         <input type=\"text\" name=\"username\" id=\"id_username\" value=\"{username}\" autofocus>\n\
         {username_errors}\
         </p>\n\
         <p>\n\
         <label for=\"id_password1\">Password</label>\n\
         <input type=\"password\" name=\"password1\" id=\"id_password1\">\n\
         {password1_errors}\
         </p>\n\
         <p>\n\
         <label for=\"id_password2\">Password confirmation</label>\n\
         <input type=\"password\" name=\"password2\" id=\"id_password2\">\n\
         {password2_errors}\
         </p>\n\
         <button type=\"submit\">Sign up</button>\n\
         </form>\n\
         <p>Already have an account? <a href=\"/accounts/login/\">Log in</a></p>\n",
        username = escape(username),
        username_errors = field_error_html(&errors.username),
        password1_errors = field_error_html(&errors.password1),
        password2_errors = field_error_html(&errors.password2),
    );

    page("Sign up", &[], &main)
}

/// The login form.
///
/// A failed attempt re-renders with a single non-field error; which half of
/// the pair was wrong is deliberately not revealed.
pub fn login_page(username: &str, error: Option<&str>) -> Html<String> {
    let error_html = match error {
        Some(error) => format!("<p class=\"error\">{}</p>\n", escape(error)),
        None => String::new(),
    };

    let main = format!(
        "<h1>Log in</h1>\n\
         {error_html}\
         <form method=\"post\" action=\"/accounts/login/\">\n\
         <p>\n\
         <label for=\"id_username\">Username</label>\n\
         <input type=\"text\" name=\"username\" id=\"id_username\" value=\"{username}\" autofocus>\n\
         </p>\n\
         <p>\n\
         <label for=\"id_password\">Password</label>\n\
         <input type=\"password\" name=\"password\" id=\"id_password\">\n\
         </p>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <p>New to Bookden? <a href=\"/accounts/signup/\">Sign up</a></p>\n",
        error_html = error_html,
        username = escape(username),
    );

    page("Log in", &[], &main)
}
