//! The landing page.

use axum::response::Html;

use super::{escape, page};

/// The home page, with navigation reflecting the signed-in state.
pub fn home_page(username: Option<&str>, notices: &[String]) -> Html<String> {
    let nav = match username {
        Some(username) => format!(
            "<p>Signed in as <strong>{}</strong> · <a href=\"/accounts/logout/\">Log out</a></p>\n",
            escape(username)
        ),
        None => "<p><a href=\"/accounts/login/\">Log in</a> · \
                 <a href=\"/accounts/signup/\">Sign up</a></p>\n"
            .to_string(),
    };

    let main = format!(
        "<h1>Bookden</h1>\n\
         <p>A reading club for keeping up with books together.</p>\n\
         {nav}",
        nav = nav,
    );

    page("Home", notices, &main)
}
