//! GHZ and W state page.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Response,
};
use unravel_algos::{AlgorithmKind, Scheme, w_angles};
use unravel_ir::format_angle;

use super::AlgorithmPage;
use crate::pipeline::PageOutcome;
use crate::render::widgets;
use crate::session::{PageQuery, Session};
use crate::state::AppState;

const PAGE: AlgorithmPage = AlgorithmPage {
    kind: AlgorithmKind::Entanglement,
    run_label: "Generate State",
    controls,
    details,
};

fn controls(session: &Session) -> String {
    let schemes: Vec<(&str, &str)> = Scheme::ALL.iter().map(|s| (s.slug(), s.label())).collect();
    widgets::select(
        "scheme",
        "Select entangled state",
        &schemes,
        session.scheme.slug(),
        false,
    )
}

fn details(session: &Session, _outcome: &PageOutcome) -> String {
    let n = session.qubits as usize;
    match session.scheme {
        Scheme::Ghz => format!(
            "<p>Target state: <code>(|{}⟩ + |{}⟩)/√2</code></p>",
            "0".repeat(n),
            "1".repeat(n)
        ),
        Scheme::W => {
            let angles: Vec<String> = w_angles(session.qubits)
                .into_iter()
                .enumerate()
                .map(|(k, theta)| format!("q{k}: RY({})", format_angle(theta)))
                .collect();
            format!(
                "<p>Rotation cascade: <code>{}</code>, each qubit after the first preceded by a \
                 CX from its neighbour. The histogram shows the distribution this cascade \
                 actually prepares.</p>",
                angles.join(", ")
            )
        }
    }
}

/// GET /algorithms/entanglement
pub async fn page(State(state): State<Arc<AppState>>, Query(query): Query<PageQuery>) -> Response {
    super::render_algorithm_page(&state, &PAGE, &query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DashboardConfig;

    fn session(scheme: &str) -> Session {
        let query = PageQuery {
            qubits: Some("3".into()),
            scheme: Some(scheme.into()),
            ..PageQuery::default()
        };
        Session::from_query(AlgorithmKind::Entanglement, &query, &DashboardConfig::default())
    }

    #[test]
    fn test_w_details_list_cascade_angles() {
        let html = details(&session("w"), &PageOutcome::default());
        assert!(html.contains("q0: RY(1.91), q1: RY(-π/2), q2: RY(0)"));
        assert!(!html.contains("√3"));
    }

    #[test]
    fn test_ghz_details_name_target_state() {
        let html = details(&session("ghz"), &PageOutcome::default());
        assert!(html.contains("(|000⟩ + |111⟩)/√2"));
    }
}
