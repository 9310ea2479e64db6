use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{clear_request_id, engine_info, engine_warn, set_request_id};

use crate::endpoint::DownloadEndpoint;
use crate::fetch::{FetchSettings, FileFetcher, ReqwestFetcher};
use crate::{DownloadRequest, EngineEvent, RequestId};

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        request: DownloadRequest,
    },
}

/// Handle to the privileged context. Commands go in over a channel, events
/// come back on another; this is the whole privilege boundary. There is no
/// reply timeout: if the privileged side dies, the caller never hears back
/// (a recorded gap, matching the overall design).
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, endpoint: DownloadEndpoint) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings, endpoint)))
    }

    /// Builds a handle around any fetcher, so tests can substitute a fake
    /// transport.
    pub fn with_fetcher(fetcher: Arc<dyn FileFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Dispatches a fetch. Each call is an independent operation; nothing
    /// dedupes or cancels earlier in-flight requests.
    pub fn request(&self, request_id: RequestId, request: DownloadRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn FileFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch {
            request_id,
            request,
        } => {
            // Request-id tags are thread-local; set them only between await
            // points, since the task may migrate across workers.
            set_request_id(request_id);
            engine_info!("fetch {} (file id {})", request.file_name, request.file_id);
            clear_request_id();

            let result = fetcher.fetch_file(&request).await;

            set_request_id(request_id);
            match &result {
                Ok(output) => engine_info!(
                    "fetched {} bytes as {}",
                    output.metadata.byte_len,
                    output.payload.mime_type
                ),
                Err(err) => engine_warn!("fetch failed: {}", err.message),
            }
            clear_request_id();

            // The reply is sent exactly once, after conversion completes.
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
