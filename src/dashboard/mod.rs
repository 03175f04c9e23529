//! Web dashboard.
//!
//! # Responsibilities
//! - Serve `GET /` with an HTML table of every endpoint's latest state
//! - Read-only consumer of the `StateStore`; triggers no checks
//!
//! # Design Decisions
//! - State is injected explicitly through axum `State`, no globals
//! - Rendering is plain string assembly; no template engine

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::monitor::state::EndpointState;
use crate::monitor::store::StateStore;
use crate::probe::ProbeStatus;

/// Build the dashboard router over a shared state store.
pub fn router(store: Arc<StateStore>) -> Router {
    Router::new()
        .route("/", get(render_index))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

async fn render_index(State(store): State<Arc<StateStore>>) -> Html<String> {
    Html(render_page(&store.snapshot()))
}

const PAGE_HEAD: &str = "<!DOCTYPE html>
<html>
<head>
    <title>Endpoint Monitor Dashboard</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; }
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #ccc; padding: 8px; text-align: center; }
        th { background: #eee; }
        .status-ok { background: #c8e6c9; }
        .status-error { background: #ffcdd2; }
    </style>
</head>
<body>
    <h1>Endpoint Monitor Dashboard</h1>
    <table>
        <thead>
            <tr><th>Name</th><th>URL</th><th>Last status</th><th>Response time (s)</th><th>Last checked</th></tr>
        </thead>
        <tbody>
";

const PAGE_FOOT: &str = "        </tbody>
    </table>
</body>
</html>
";

/// Render the full status page from a snapshot.
pub fn render_page(states: &[EndpointState]) -> String {
    let mut page = String::from(PAGE_HEAD);
    for state in states {
        page.push_str(&render_row(state));
    }
    page.push_str(PAGE_FOOT);
    page
}

fn render_row(state: &EndpointState) -> String {
    let class = match state.status {
        Some(ProbeStatus::Http(200)) => "status-ok",
        _ => "status-error",
    };
    let status = state
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "—".to_string());
    let latency = state
        .latency_secs
        .map(|l| l.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let last_checked = state
        .last_checked
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "—".to_string());

    format!(
        "            <tr class=\"{class}\">\
         <td>{name}</td>\
         <td><a href=\"{url}\" target=\"_blank\">{url}</a></td>\
         <td>{status}</td>\
         <td>{latency}</td>\
         <td>{last_checked}</td>\
         </tr>\n",
        class = class,
        name = escape(&state.name),
        url = escape(&state.url),
        status = status,
        latency = latency,
        last_checked = last_checked,
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
