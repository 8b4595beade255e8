//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::controller::{Resolution, ViewState};

use super::dto::{CompareForm, ErrorResponse, StateResponse};
use super::state::AppState;
use super::templates::{IndexTemplate, PageView};

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/compare", post(compare))
        .route("/api/state", get(current_state))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Index page: form, current state, and the map.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    render_page(&state).await
}

/// JSON projection of the current view state.
async fn current_state(State(state): State<AppState>) -> Json<StateResponse> {
    let controller = state.controller.lock().await;
    Json(StateResponse::from_view(controller.state()))
}

/// Run one comparison lifecycle: submit, call, resolve, sync the map.
async fn compare(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<CompareForm>,
) -> Result<Response, AppError> {
    let pending = {
        let mut controller = state.controller.lock().await;
        controller.submit(&form.pickup, &form.drop)
    };

    // The controller lock is not held across the outbound call, so a
    // later submission can supersede this one; resolve() then reports
    // this outcome as stale and it is dropped on the floor.
    if let Some(pending) = pending {
        let outcome = state.pricing.compare(&pending.request).await;

        let mut controller = state.controller.lock().await;
        if controller.resolve(pending.seq, outcome) == Resolution::Applied {
            if let ViewState::Success(result) = controller.state() {
                let mut map = state.map.lock().await;
                map.route_changed(result.route_start, result.route_end, &result.route_path);
            }
        }
    }

    if accepts_html(&headers) {
        render_page(&state).await
    } else {
        let controller = state.controller.lock().await;
        Ok(Json(StateResponse::from_view(controller.state())).into_response())
    }
}

/// Render the page from the current controller and map state.
async fn render_page(state: &AppState) -> Result<Response, AppError> {
    let map_json = {
        let map = state.map.lock().await;
        serde_json::to_string(&map.surface().model()).map_err(|e| AppError::Internal {
            message: format!("Viewport serialization error: {e}"),
        })?
    };

    let view = {
        let controller = state.controller.lock().await;
        PageView::from_view(controller.state(), map_json)
    };

    let html = IndexTemplate { view }
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;

    Ok(Html(html).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_html_checks_the_accept_header() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_html(&headers));

        headers.insert(header::ACCEPT, "application/json".parse().unwrap());
        assert!(!accepts_html(&headers));

        headers.insert(
            header::ACCEPT,
            "text/html,application/xhtml+xml".parse().unwrap(),
        );
        assert!(accepts_html(&headers));
    }
}
