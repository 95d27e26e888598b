//! End-to-end pipeline tests against a fake engine.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reel_engine::{EngineConfig, RenderClient};
use reel_models::TargetDuration;
use reel_orchestrator::{
    LocalMediaItem, OrchestratorConfig, OrchestratorError, RenderItem, RenderOrchestrator,
    RenderRequest,
};
use reel_storage::{MediaUploader, StorageError, StorageResult, UploadCoordinator};

fn orchestrator_for(server: &MockServer) -> RenderOrchestrator {
    let client = RenderClient::new(EngineConfig::new("test-key").with_base_url(server.uri()));
    let config = OrchestratorConfig {
        poll_interval: Duration::from_millis(10),
        poll_max_wait: Duration::from_secs(5),
        poll_max_attempts: 50,
        upload_prefix: "uploads".to_string(),
    };
    RenderOrchestrator::new(client, config)
}

fn request(urls: &[&str], target: TargetDuration) -> RenderRequest {
    RenderRequest {
        media_items: urls
            .iter()
            .map(|url| RenderItem {
                url: url.to_string(),
                text: "overlay".to_string(),
                font_size: "6 vmin".to_string(),
            })
            .collect(),
        target_duration: target,
    }
}

#[tokio::test]
async fn render_returns_playable_url_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/renders"))
        .and(body_partial_json(json!({
            "source": { "output_format": "mp4", "width": 1080, "height": 1920, "frame_rate": 30 }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "id": "r-1", "status": "planned" }])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/renders/r-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "rendering" })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/renders/r-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "succeeded",
            "url": "https://cdn.engine/final.mp4"
        })))
        .mount(&server)
        .await;

    let url = orchestrator_for(&server)
        .render(&request(
            &["https://cdn.example/a.jpg", "https://cdn.example/b.jpg"],
            TargetDuration::Seconds(15.0),
        ))
        .await
        .unwrap();

    assert_eq!(url, "https://cdn.engine/final.mp4");
}

#[tokio::test]
async fn submission_rejection_surfaces_detail_and_skips_polling() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/renders"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid width"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/renders/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "rendering" })))
        .expect(0)
        .mount(&server)
        .await;

    let err = orchestrator_for(&server)
        .render(&request(
            &["https://cdn.example/a.jpg"],
            TargetDuration::Original,
        ))
        .await
        .unwrap_err();

    assert!(err.is_submission_rejected());
    let message = err.to_string();
    assert!(message.contains("422"));
    assert!(message.contains("invalid width"));
}

#[tokio::test]
async fn invalid_duration_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = orchestrator_for(&server)
        .render(&request(
            &["https://cdn.example/a.jpg", "https://cdn.example/b.jpg"],
            TargetDuration::Seconds(-5.0),
        ))
        .await
        .unwrap_err();

    assert!(err.is_invalid_duration());
}

#[tokio::test]
async fn engine_failure_during_polling_carries_engine_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/renders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "r-9" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/renders/r-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "failed",
            "error_message": "unsupported codec in scene 2"
        })))
        .mount(&server)
        .await;

    let err = orchestrator_for(&server)
        .render(&request(
            &["https://cdn.example/a.mp4"],
            TargetDuration::Original,
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestratorError::EngineRenderFailed(_)));
    assert!(err.to_string().contains("unsupported codec in scene 2"));
}

/// Uploader that fails a fixed input index.
struct FlakyUploader {
    fail_index: usize,
}

#[async_trait]
impl MediaUploader for FlakyUploader {
    async fn upload(&self, _path: &Path, key: &str, _content_type: &str) -> StorageResult<String> {
        let index: usize = key
            .rsplit('/')
            .next()
            .and_then(|name| name.split('-').next())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);
        if index == self.fail_index {
            return Err(StorageError::AwsSdk("connection reset".to_string()));
        }
        Ok(format!("https://media.example/{}", key))
    }
}

#[tokio::test]
async fn upload_failure_aborts_before_any_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let coordinator = UploadCoordinator::new(FlakyUploader { fail_index: 1 }, "uploads");
    let items = vec![
        LocalMediaItem::new("/tmp/a.jpg", "one"),
        LocalMediaItem::new("/tmp/b.jpg", "two"),
        LocalMediaItem::new("/tmp/c.jpg", "three"),
    ];

    let err = orchestrator_for(&server)
        .render_files(&coordinator, &items, TargetDuration::Seconds(15.0))
        .await
        .unwrap_err();

    assert!(err.is_upload_failure());
    assert!(err.to_string().contains("item 1"));
}

#[tokio::test]
async fn cancellation_stops_polling_without_a_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/renders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "r-5" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/renders/r-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "rendering" })))
        .mount(&server)
        .await;

    let client = RenderClient::new(EngineConfig::new("test-key").with_base_url(server.uri()));
    // An interval long enough that no poll fires before cancellation
    let config = OrchestratorConfig {
        poll_interval: Duration::from_secs(3600),
        poll_max_wait: Duration::from_secs(7200),
        poll_max_attempts: 10,
        upload_prefix: "uploads".to_string(),
    };
    let orchestrator = RenderOrchestrator::new(client, config);

    let handle = orchestrator
        .begin(&request(
            &["https://cdn.example/a.jpg"],
            TargetDuration::Original,
        ))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.cancel();
    let outcome = handle.wait().await.unwrap();
    assert!(!outcome.job().is_terminal());

    // Only the submission hit the engine
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}
