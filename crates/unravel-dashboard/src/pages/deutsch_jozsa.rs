//! Deutsch-Jozsa page.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Response,
};
use unravel_algos::{AlgorithmKind, DjFunction};

use super::AlgorithmPage;
use crate::pipeline::PageOutcome;
use crate::render::{escape, widgets};
use crate::session::{PageQuery, Session};
use crate::state::AppState;

const PAGE: AlgorithmPage = AlgorithmPage {
    kind: AlgorithmKind::DeutschJozsa,
    run_label: "Run on Simulator",
    controls,
    details,
};

fn controls(session: &Session) -> String {
    let functions: Vec<(&str, &str)> = DjFunction::ALL
        .iter()
        .map(|f| (f.slug(), f.label()))
        .collect();

    let mut html = widgets::select(
        "function",
        "Select function",
        &functions,
        session.function.slug(),
        false,
    );
    html.push_str("<div class=\"pattern\">");
    html.push_str(&widgets::text_input(
        "x_gates",
        "Balanced oracle X gates",
        &session.x_gates,
        "1010… (default)",
    ));
    html.push_str(&widgets::text_input(
        "cx_gates",
        "Balanced oracle CX gates",
        &session.cx_gates,
        "1010… (default)",
    ));
    html.push_str("</div>");
    html
}

/// "constant" when every shot read all zeros, "balanced" otherwise.
fn verdict(outcome: &PageOutcome) -> Option<&'static str> {
    let result = outcome.result.as_ref()?;
    let all_zeros = result
        .counts
        .iter()
        .all(|(bits, count)| count == 0 || bits.chars().all(|c| c == '0'));
    Some(if all_zeros { "constant" } else { "balanced" })
}

fn details(session: &Session, outcome: &PageOutcome) -> String {
    let mut html = format!(
        "<p>Oracle: <strong>{}</strong></p>",
        escape(session.function.label())
    );
    if let Some(pattern) = outcome.built.as_ref().and_then(|b| b.pattern.as_ref()) {
        html.push_str(&format!(
            "<p>X gates <code>{}</code>, CX gates <code>{}</code></p>",
            pattern.x_gates, pattern.cx_gates
        ));
    }
    if let Some(verdict) = verdict(outcome) {
        html.push_str(&format!(
            "<p class=\"verdict\">The measurement says the function is <strong>{verdict}</strong>.</p>"
        ));
    }
    html
}

/// GET /algorithms/deutsch-jozsa
pub async fn page(State(state): State<Arc<AppState>>, Query(query): Query<PageQuery>) -> Response {
    super::render_algorithm_page(&state, &PAGE, &query).await
}
