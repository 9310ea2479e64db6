use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use filepeek_engine::{
    DownloadRequest, EngineEvent, EngineHandle, FailureKind, FetchError, FetchMetadata,
    FetchOutput, FileFetcher, TransportPayload,
};

/// Fake transport: answers every request from canned data, failing when the
/// file id says so.
struct StubFetcher;

#[async_trait::async_trait]
impl FileFetcher for StubFetcher {
    async fn fetch_file(&self, request: &DownloadRequest) -> Result<FetchOutput, FetchError> {
        if request.file_id == "broken" {
            return Err(FetchError::new(
                FailureKind::Network,
                "connection reset by peer",
            ));
        }
        Ok(FetchOutput {
            payload: TransportPayload {
                data_url: format!("data:application/pdf;base64,{}", request.file_id),
                mime_type: "application/pdf".to_string(),
            },
            metadata: FetchMetadata {
                url: format!("https://portal.example/filedownload?fileId={}", request.file_id),
                status: 200,
                byte_len: 4,
                declared_content_type: Some("application/pdf".to_string()),
            },
        })
    }
}

fn request(file_id: &str) -> DownloadRequest {
    DownloadRequest {
        file_id: file_id.to_string(),
        file_name: "report.pdf".to_string(),
    }
}

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn each_request_gets_exactly_one_completion() {
    let engine = EngineHandle::with_fetcher(Arc::new(StubFetcher));
    engine.request(1, request("42"));

    let event = engine.recv_timeout(WAIT).expect("completion arrives");
    let EngineEvent::FetchCompleted { request_id, result } = event;
    assert_eq!(request_id, 1);
    let output = result.expect("stub succeeds");
    assert_eq!(output.payload.data_url, "data:application/pdf;base64,42");

    // No second reply for the same request.
    std::thread::sleep(Duration::from_millis(100));
    assert!(engine.try_recv().is_none());
}

#[test]
fn concurrent_requests_complete_independently() {
    let engine = EngineHandle::with_fetcher(Arc::new(StubFetcher));
    engine.request(1, request("a"));
    engine.request(2, request("b"));
    engine.request(3, request("c"));

    let mut seen = BTreeSet::new();
    for _ in 0..3 {
        let EngineEvent::FetchCompleted { request_id, result } =
            engine.recv_timeout(WAIT).expect("completion arrives");
        assert!(result.is_ok());
        seen.insert(request_id);
    }
    assert_eq!(seen, BTreeSet::from([1, 2, 3]));
}

#[test]
fn failures_cross_the_boundary_as_results() {
    let engine = EngineHandle::with_fetcher(Arc::new(StubFetcher));
    engine.request(9, request("broken"));

    let EngineEvent::FetchCompleted { request_id, result } =
        engine.recv_timeout(WAIT).expect("completion arrives");
    assert_eq!(request_id, 9);
    let err = result.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(err.message, "connection reset by peer");
}
