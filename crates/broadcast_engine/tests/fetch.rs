use std::sync::Arc;
use std::time::Duration;

use broadcast_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = concat!(
    r#"{"tour":{"id":"a","name":"Spring Open"},"rounds":[{"id":"r1","ongoing":true}]}"#,
    "\n",
    r#"{"tour":{"id":"b","name":"Winter Cup"},"rounds":[{"id":"r2","ongoing":false}]}"#,
    "\n",
);

fn settings_for(server: &MockServer, route: &str) -> FetchSettings {
    FetchSettings {
        endpoint: format!("{}{}", server.uri(), route),
        fetched_utc: Arc::new(|| "2024-05-01T12:00:00Z".to_string()),
        ..FetchSettings::default()
    }
}

#[tokio::test]
async fn fetcher_requests_fifty_entries_as_ndjson() {
    broadcast_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/broadcast"))
        .and(query_param("nb", "50"))
        .and(header("accept", "application/x-ndjson"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(LISTING, "application/x-ndjson"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server, "/api/broadcast"));
    let output = fetcher.fetch_listing().await.expect("fetch ok");

    assert_eq!(output.body, LISTING);
    assert_eq!(
        output.metadata.request_url,
        format!("{}/api/broadcast?nb=50", server.uri())
    );
    assert_eq!(output.metadata.final_url, output.metadata.request_url);
    assert_eq!(output.metadata.redirect_count, 0);
    assert_eq!(output.metadata.byte_len, LISTING.len() as u64);
    assert_eq!(output.metadata.encoding_label, "UTF-8");
    assert_eq!(output.metadata.fetched_utc, "2024-05-01T12:00:00Z");
    assert_eq!(
        output.metadata.content_type.as_deref(),
        Some("application/x-ndjson")
    );
}

#[tokio::test]
async fn fetcher_honours_configured_entry_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/broadcast"))
        .and(query_param("nb", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_entries: 5,
        ..settings_for(&server, "/api/broadcast")
    };
    let output = ReqwestFetcher::new(settings)
        .fetch_listing()
        .await
        .expect("fetch ok");
    assert!(output.body.is_empty());
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server, "/missing"));

    let err = fetcher.fetch_listing().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert!(err.to_string().starts_with("http status 404"));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string(LISTING),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server, "/slow")
    };
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher.fetch_listing().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/x-ndjson")
                .insert_header("Content-Length", "11")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..settings_for(&server, "/large")
    };
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher.fetch_listing().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_html_error_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>maintenance</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server, "/html"));

    let err = fetcher.fetch_listing().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_reports_malformed_utf8_as_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/binary"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            vec![b'{', 0xff, 0xfe, b'}', b'\n'],
            "application/x-ndjson; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server, "/binary"));

    let err = fetcher.fetch_listing().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetcher_rejects_non_http_endpoint() {
    let settings = FetchSettings {
        endpoint: "ftp://lichess.org/api/broadcast".to_string(),
        ..FetchSettings::default()
    };

    let err = ReqwestFetcher::new(settings)
        .fetch_listing()
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[test]
fn default_clock_stamps_rfc3339_utc() {
    let stamp = (FetchSettings::default().fetched_utc)();
    let parsed = chrono::DateTime::parse_from_rfc3339(&stamp).expect("rfc3339 timestamp");
    assert_eq!(parsed.offset().local_minus_utc(), 0);
}
