//! Bernstein-Vazirani page.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Response,
};
use unravel_algos::{AlgorithmKind, SecretMode};

use super::AlgorithmPage;
use crate::pipeline::PageOutcome;
use crate::render::widgets;
use crate::session::{PageQuery, Session};
use crate::state::AppState;

const PAGE: AlgorithmPage = AlgorithmPage {
    kind: AlgorithmKind::BernsteinVazirani,
    run_label: "Run on Simulator",
    controls,
    details,
};

fn controls(session: &Session) -> String {
    let selected = match session.mode {
        SecretMode::Random => "random",
        SecretMode::Custom => "custom",
    };
    let mut html = widgets::radio(
        "mode",
        "Secret bitstring",
        &[
            ("random", SecretMode::Random.label()),
            ("custom", SecretMode::Custom.label()),
        ],
        selected,
    );
    html.push_str(&widgets::text_input(
        "secret",
        "Secret bitstring (custom mode)",
        &session.secret,
        "e.g. 110",
    ));
    html
}

fn details(_session: &Session, outcome: &PageOutcome) -> String {
    let Some(secret) = outcome.built.as_ref().and_then(|b| b.secret.as_ref()) else {
        return String::new();
    };
    let mut html = format!("<p>Secret Bitstring: <code>{secret}</code></p>");
    if let Some((bits, _)) = outcome.result.as_ref().and_then(|r| r.counts.most_frequent()) {
        let mark = if bits == secret.to_string() { "matches" } else { "differs from" };
        html.push_str(&format!(
            "<p class=\"verdict\">Most frequent outcome <code>{bits}</code> {mark} the secret.</p>"
        ));
    }
    html
}

/// GET /algorithms/bernstein-vazirani
pub async fn page(State(state): State<Arc<AppState>>, Query(query): Query<PageQuery>) -> Response {
    super::render_algorithm_page(&state, &PAGE, &query).await
}
