//! Server-rendered HTML pages.
//!
//! The pages are small enough to assemble directly with `format!` instead of
//! pulling in a template engine. Every interpolated value passes through
//! [`escape`] on the way in; page functions return [`axum::response::Html`]
//! so handlers can hand them straight back to axum.

pub mod accounts;
pub mod home;

use axum::response::Html;

/// Escape a value for interpolation into HTML text or a quoted attribute.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Wrap page content in the shared document shell.
///
/// Queued notices render above the main content on whichever page the user
/// lands on next.
pub fn page(title: &str, notices: &[String], main: &str) -> Html<String> {
    let mut notice_html = String::new();
    for notice in notices {
        notice_html.push_str(&format!(
            "    <p class=\"notice\">{}</p>\n",
            escape(notice)
        ));
    }

    Html(format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} | Bookden</title>\n\
         </head>\n\
         <body>\n\
         <header>\n\
         <a href=\"/\">Bookden</a>\n\
         </header>\n\
         {notices}<main>\n\
         {main}\
         </main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        notices = notice_html,
        main = main,
    ))
}

/// Generic page for unexpected failures.
///
/// Says nothing about the cause; details go to the log instead.
pub fn error_page() -> Html<String> {
    page(
        "Server error",
        &[],
        "<h1>Something went wrong</h1>\n<p>Please try again in a moment.</p>\n",
    )
}
