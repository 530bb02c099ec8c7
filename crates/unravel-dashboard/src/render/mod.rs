//! HTML fragments for the server-rendered pages.
//!
//! Every function returns a finished fragment as a `String`; user-supplied
//! text always goes through [`escape`].

pub mod histogram;
pub mod layout;
pub mod widgets;

use std::fmt::Write;

use unravel_hal::Counts;

/// Escape text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A `<pre>` block, e.g. for circuit diagrams and source listings.
pub fn preformatted(class: &str, text: &str) -> String {
    format!("<pre class=\"{class}\">{}</pre>", escape(text))
}

/// Counts table ordered by bit-string, with relative frequencies.
pub fn counts_table(counts: &Counts) -> String {
    let total = counts.total_shots().max(1) as f64;
    let mut html = String::from(
        "<table class=\"counts\"><thead><tr><th>Outcome</th><th>Count</th><th>Frequency</th></tr></thead><tbody>",
    );
    for (bits, count) in counts.sorted() {
        let _ = write!(
            html,
            "<tr><td><code>{}</code></td><td>{count}</td><td>{:.3}</td></tr>",
            escape(bits),
            count as f64 / total
        );
    }
    html.push_str("</tbody></table>");
    html
}

/// Inline error banner.
pub fn error_banner(message: &str) -> String {
    format!("<div class=\"error\" role=\"alert\">{}</div>", escape(message))
}
