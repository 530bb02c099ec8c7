//! Landing page.

use std::fmt::Write;

use axum::response::Html;
use unravel_algos::AlgorithmKind;

use crate::render::{escape, layout};

/// GET /
pub async fn home() -> Html<String> {
    let mut body = String::from(
        "<h1>Unravel</h1>\
         <p class=\"summary\">Unravel is a gateway to quantum computing. Pick a textbook \
         algorithm, choose its parameters, inspect the circuit it builds and run it on a \
         simulator to see the measurement statistics.</p>\
         <h2>Discover quantum algorithms</h2><div class=\"cards\">",
    );
    for kind in AlgorithmKind::ALL {
        let descriptor = kind.descriptor();
        let _ = write!(
            body,
            "<a class=\"card\" href=\"{}\"><h3>{}</h3><p>{}</p>\
             <p class=\"meta\">{} to {} qubits</p></a>",
            layout::algorithm_path(kind),
            escape(descriptor.title),
            escape(descriptor.summary),
            descriptor.min_qubits,
            descriptor.max_qubits
        );
    }
    body.push_str("</div>");
    Html(layout::page("Home", None, &body))
}
