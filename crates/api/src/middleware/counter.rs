//! GET-request counting middleware.
//!
//! Keeps a running total of GET requests served by the process and logs it
//! at debug level. The counter lives on [`AppState`] so the total is shared
//! across router clones.

use std::sync::atomic::Ordering;

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Count GET requests and log the running total.
pub async fn count_get_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::GET {
        let count = state.get_requests.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(count, "GET request counter");
    }

    next.run(request).await
}
