//! Page chrome shared by every route.

use std::fmt::Write;

use unravel_algos::AlgorithmKind;

use super::escape;

/// Path of an algorithm page.
pub fn algorithm_path(kind: AlgorithmKind) -> String {
    format!("/algorithms/{}", kind.slug())
}

fn nav(active: Option<AlgorithmKind>) -> String {
    let mut html = String::from("<nav><a class=\"brand\" href=\"/\">Unravel</a><ul>");
    for kind in AlgorithmKind::ALL {
        let class = if active == Some(kind) { " class=\"active\"" } else { "" };
        let _ = write!(
            html,
            "<li><a href=\"{}\"{class}>{}</a></li>",
            algorithm_path(kind),
            escape(kind.title())
        );
    }
    html.push_str("</ul></nav>");
    html
}

/// Wrap `body` in the full HTML document.
pub fn page(title: &str, active: Option<AlgorithmKind>, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title} | Unravel</title><link rel=\"stylesheet\" href=\"/style.css\"></head>\
         <body>{nav}<main>{body}</main>\
         <footer>Unravel {version}: quantum algorithms, one circuit at a time.</footer>\
         </body></html>",
        title = escape(title),
        nav = nav(active),
        version = env!("CARGO_PKG_VERSION"),
    )
}
