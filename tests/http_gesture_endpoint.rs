use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use wavectl::application::usecases::DispatchManager;
use wavectl::application::{AppResult, PlaybackController};
use wavectl::domain::{ActionRegistry, PlaybackAction};
use wavectl::interfaces::http_api::{ApiState, build_router};

#[derive(Clone, Default)]
struct CountingController {
    count: Arc<Mutex<u32>>,
}

#[async_trait]
impl PlaybackController for CountingController {
    async fn perform(&self, _action: PlaybackAction) -> AppResult<()> {
        *self.count.lock().unwrap() += 1;
        Ok(())
    }
}

fn test_router(controller: CountingController) -> axum::Router {
    let manager = Arc::new(DispatchManager::new(
        ActionRegistry::with_default_bindings(),
        Duration::from_secs(2),
        Arc::new(controller),
    ));
    build_router(ApiState { manager })
}

fn gesture_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/gesture")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn empty_body_is_rejected_without_dispatching() {
    let controller = CountingController::default();
    let router = test_router(controller.clone());

    let resp = router.oneshot(gesture_request("{}")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "error");
    assert_eq!(*controller.count.lock().unwrap(), 0);
}

#[tokio::test]
async fn malformed_json_is_rejected_without_dispatching() {
    let controller = CountingController::default();
    let router = test_router(controller.clone());

    let resp = router
        .oneshot(gesture_request("{\"gesture_name\": "))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(*controller.count.lock().unwrap(), 0);
}

#[tokio::test]
async fn well_formed_gesture_reports_fired() {
    let controller = CountingController::default();
    let router = test_router(controller.clone());

    let resp = router
        .oneshot(gesture_request("{\"gesture_name\":\"play_pause\"}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["gesture"], "play_pause");
    assert_eq!(json["result"], "fired");
    assert_eq!(*controller.count.lock().unwrap(), 1);
}

#[tokio::test]
async fn duplicate_inside_window_is_transport_success_but_suppressed() {
    let controller = CountingController::default();
    let router = test_router(controller.clone());

    let first = router
        .clone()
        .oneshot(gesture_request("{\"gesture_name\":\"play_pause\"}"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = router
        .oneshot(gesture_request("{\"gesture_name\":\"play_pause\"}"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    let json = body_json(second).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["gesture"], "play_pause");
    assert_eq!(json["result"], "suppressed");
    assert_eq!(*controller.count.lock().unwrap(), 1);
}

#[tokio::test]
async fn unknown_gesture_is_transport_success_with_outcome_surfaced() {
    let controller = CountingController::default();
    let router = test_router(controller.clone());

    let resp = router
        .oneshot(gesture_request("{\"gesture_name\":\"wiggle\"}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["result"], "unknown_gesture");
    assert_eq!(*controller.count.lock().unwrap(), 0);
}

#[tokio::test]
async fn health_answers_ok() {
    let router = test_router(CountingController::default());
    let resp = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
