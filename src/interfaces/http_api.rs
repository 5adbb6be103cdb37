use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::application::usecases::DispatchManager;
use crate::domain::{DispatchResult, GestureId};

#[derive(Clone)]
pub struct ApiState {
    pub manager: Arc<DispatchManager>,
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/gesture", post(post_gesture))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

#[derive(Deserialize)]
struct GestureBody {
    gesture_name: Option<String>,
}

#[derive(Serialize)]
struct GestureResponse {
    status: &'static str,
    gesture: String,
    result: DispatchResult,
}

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    error: String,
}

/// `status` reports transport acceptance only; the dispatch outcome travels
/// in `result` so clients can tell "received OK" from "actually fired".
async fn post_gesture(
    State(state): State<ApiState>,
    body: Result<Json<GestureBody>, JsonRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(Json(b)) => b,
        Err(rej) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    status: "error",
                    error: rej.body_text(),
                }),
            )
                .into_response();
        }
    };

    let Some(name) = body.gesture_name.filter(|g| !g.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                status: "error",
                error: "missing gesture_name".to_string(),
            }),
        )
            .into_response();
    };

    let gesture = GestureId::new(name.clone());
    let result = state.manager.dispatch(&gesture).await;

    (
        StatusCode::OK,
        Json(GestureResponse {
            status: "success",
            gesture: name,
            result,
        }),
    )
        .into_response()
}
