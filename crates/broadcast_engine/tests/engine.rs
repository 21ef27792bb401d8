use std::sync::Arc;
use std::time::{Duration, Instant};

use broadcast_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, FetchOutput, FetchSettings, Fetcher,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn next_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no engine event within 5s");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

struct StalledFetcher;

#[async_trait::async_trait]
impl Fetcher for StalledFetcher {
    async fn fetch_listing(&self) -> Result<FetchOutput, FetchError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn engine_reports_completed_listing() {
    broadcast_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/broadcast"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "{\"tour\":{\"id\":\"a\",\"name\":\"A\"},\"rounds\":[]}\n",
            "application/x-ndjson",
        ))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings {
        endpoint: format!("{}/api/broadcast", server.uri()),
        ..FetchSettings::default()
    });
    engine.fetch_listing();

    match next_event(&engine).await {
        EngineEvent::ListingCompleted { result } => {
            let output = result.expect("fetch ok");
            assert!(output.body.starts_with("{\"tour\""));
        }
    }
    assert!(engine.try_recv().is_none());
}

#[tokio::test]
async fn engine_reports_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings {
        endpoint: format!("{}/api/broadcast", server.uri()),
        ..FetchSettings::default()
    });
    engine.fetch_listing();

    let EngineEvent::ListingCompleted { result } = next_event(&engine).await;
    assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn shutdown_cancels_in_flight_fetch() {
    let engine = EngineHandle::with_fetcher(Arc::new(StalledFetcher));
    engine.fetch_listing();
    tokio::time::sleep(Duration::from_millis(50)).await;

    engine.shutdown();

    let EngineEvent::ListingCompleted { result } = next_event(&engine).await;
    assert_eq!(result.unwrap_err().kind, FailureKind::Cancelled);
}

#[tokio::test]
async fn clones_share_the_event_queue() {
    let engine = EngineHandle::with_fetcher(Arc::new(StalledFetcher));
    let other = engine.clone();
    other.fetch_listing();
    other.shutdown();

    let EngineEvent::ListingCompleted { result } = next_event(&engine).await;
    assert_eq!(result.unwrap_err().kind, FailureKind::Cancelled);
}
