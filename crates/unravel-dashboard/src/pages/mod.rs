//! Server-rendered HTML pages.
//!
//! Each algorithm page is one GET form. Submitting it re-renders the whole
//! page from the query string; nothing is kept between requests.

pub mod bernstein_vazirani;
pub mod deutsch_jozsa;
pub mod entanglement;
pub mod home;

use std::fmt::Write;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::warn;
use unravel_algos::AlgorithmKind;
use unravel_hal::Provider;

use crate::pipeline::{self, PageOutcome};
use crate::render::{self, escape, histogram, layout, widgets};
use crate::session::{PageQuery, Session};
use crate::state::AppState;

/// What distinguishes one algorithm page from another.
pub(crate) struct AlgorithmPage {
    pub kind: AlgorithmKind,
    /// Label of the run button.
    pub run_label: &'static str,
    /// Algorithm-specific widgets.
    pub controls: fn(&Session) -> String,
    /// Algorithm-specific text shown above the diagram.
    pub details: fn(&Session, &PageOutcome) -> String,
}

/// Provider, backend and shot widgets.
fn execution_controls(session: &Session, max_shots: u32) -> String {
    let providers: Vec<(&str, &str)> = Provider::ALL
        .iter()
        .map(|p| (p.slug(), p.display_name()))
        .collect();
    let backends: Vec<(&str, &str)> = session
        .provider
        .backends()
        .iter()
        .map(|b| (b.name, b.name))
        .collect();

    let mut html = String::from("<div class=\"execution\">");
    html.push_str(&widgets::select(
        "provider",
        "Provider",
        &providers,
        session.provider.slug(),
        true,
    ));
    html.push_str(&widgets::select(
        "backend",
        "Backend",
        &backends,
        session.backend.name,
        false,
    ));
    html.push_str(&widgets::number_input(
        "shots",
        "Shots",
        1,
        max_shots,
        session.shots,
    ));
    html.push_str("</div>");
    html
}

fn results_section(session: &Session, outcome: &PageOutcome) -> String {
    let Some(result) = &outcome.result else {
        return String::new();
    };
    let mut html = String::from("<section class=\"results\"><h2>Results</h2>");
    let _ = write!(
        html,
        "<p class=\"meta\">{} shots on <code>{}</code> ({}, {})",
        result.shots,
        escape(session.backend.name),
        escape(session.provider.display_name()),
        session.backend.method
    );
    if let Some(ms) = result.execution_time_ms {
        let _ = write!(html, " in {ms} ms");
    }
    html.push_str("</p><div class=\"result-grid\">");
    html.push_str(&histogram::histogram(&result.counts));
    html.push_str(&render::counts_table(&result.counts));
    html.push_str("</div></section>");
    html
}

fn references_section(kind: AlgorithmKind) -> String {
    let descriptor = kind.descriptor();
    let mut html = String::from("<section class=\"references\"><h2>References</h2><ul>");
    for reference in descriptor.references {
        let _ = write!(
            html,
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>",
            escape(reference.url),
            escape(reference.title)
        );
    }
    html.push_str("</ul></section>");
    html
}

fn sources_section(kind: AlgorithmKind) -> String {
    let mut html = String::from("<section class=\"sources\"><h2>Implementation</h2>");
    for listing in kind.descriptor().sources {
        let _ = write!(
            html,
            "<details><summary><code>{}</code></summary>{}</details>",
            escape(listing.file),
            render::preformatted("source", listing.code)
        );
    }
    html.push_str("</section>");
    html
}

/// Run the pipeline for one algorithm page and render it.
pub(crate) async fn render_algorithm_page(
    state: &AppState,
    page: &AlgorithmPage,
    query: &PageQuery,
) -> Response {
    let mut session = Session::from_query(page.kind, query, &state.config);
    let outcome = pipeline::run_page(state, &mut session).await;
    if let Some(err) = &outcome.error {
        warn!(page = page.kind.slug(), error = %err, "page rendered with error");
    }

    let descriptor = page.kind.descriptor();
    let mut body = format!(
        "<h1>{}</h1><p class=\"summary\">{}</p>",
        escape(descriptor.title),
        escape(descriptor.summary)
    );

    let _ = write!(
        body,
        "<form method=\"get\" action=\"{}\" class=\"controls\">",
        layout::algorithm_path(page.kind)
    );
    body.push_str(&widgets::slider(
        "qubits",
        "Number of qubits",
        descriptor.min_qubits,
        descriptor.max_qubits,
        session.qubits,
    ));
    body.push_str(&(page.controls)(&session));
    body.push_str(&execution_controls(&session, state.config.max_shots));
    body.push_str(&widgets::actions(page.run_label));
    body.push_str("</form>");

    if let Some(err) = &outcome.error {
        body.push_str(&render::error_banner(&err.to_string()));
    }

    if let Some(built) = &outcome.built {
        body.push_str("<section class=\"circuit\"><h2>Circuit</h2>");
        body.push_str(&(page.details)(&session, &outcome));
        body.push_str(&render::preformatted("diagram", &built.circuit.draw()));
        body.push_str("</section>");
    }

    body.push_str(&results_section(&session, &outcome));
    body.push_str(&references_section(page.kind));
    body.push_str(&sources_section(page.kind));

    let html = layout::page(descriptor.title, Some(page.kind), &body);
    (outcome.status(), Html(html)).into_response()
}

/// Fallback for unknown paths.
pub async fn not_found() -> Response {
    let body = "<h1>Page not found</h1><p>Pick an algorithm from the navigation above.</p>";
    (
        StatusCode::NOT_FOUND,
        Html(layout::page("Not found", None, body)),
    )
        .into_response()
}
