// Session state machine driving the fetch -> choose -> resolve workflow

use std::sync::Arc;

use tokio::sync::watch;

use super::errors::UrlRejection;
use super::format_selector::FormatSelector;
use super::state::{SessionPhase, SessionSnapshot};
use super::traits::ExtractorApi;
use super::validate::validate;

/// Generation tag captured when a request is issued; the response is
/// applied only while the tag still matches the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequestToken {
    generation: u64,
}

/// Owner of a single video request session.
///
/// Drives the workflow `Idle -> FetchingMetadata -> MetadataReady ->
/// ResolvingDownload -> DownloadReady`, with `Failed` reachable from either
/// network step and `reset` returning to `Idle` from anywhere. All state
/// lives inside a watch channel, so every applied transition publishes one
/// consistent [`SessionSnapshot`] to subscribers.
///
/// No in-flight call is ever aborted: a response arriving after the session
/// has moved on fails the generation check and is discarded. Concurrent
/// duplicate calls to the same operation are not guarded here; the caller
/// disables the affordance while [`SessionPhase::is_busy`] is true.
pub struct Session {
    api: Arc<dyn ExtractorApi>,
    state: watch::Sender<SessionSnapshot>,
}

impl Session {
    pub fn new(api: Arc<dyn ExtractorApi>) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self { api, state }
    }

    /// Current consistent snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    /// Observe every applied transition; the receiver always holds the
    /// latest snapshot
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    /// Best-effort status probe.
    ///
    /// A success is stored in the snapshot; a failure is logged and never
    /// surfaced, and neither outcome touches the phase.
    pub async fn check_server(&self) {
        match self.api.fetch_server_status().await {
            Ok(status) => {
                self.state.send_modify(|s| s.server_status = Some(status));
            }
            Err(err) => {
                tracing::warn!(error = %err, "server status check failed");
            }
        }
    }

    /// Validate and submit a URL for metadata extraction.
    ///
    /// A rejected input is returned to the caller and leaves the session
    /// untouched: no phase change, no clearing. An accepted input clears
    /// any previous metadata, download, and error before the fetch starts,
    /// so stale data is never visible during the fetch.
    pub async fn submit_url(&self, raw_url: &str) -> Result<(), UrlRejection> {
        let url = validate(raw_url)?.to_string();

        let token = self.begin(SessionPhase::FetchingMetadata, |s| {
            s.metadata = None;
            s.selected_format_id = None;
            s.download = None;
            s.error = None;
        });
        tracing::info!(url = %url, "fetching video metadata");

        let result = self.api.fetch_metadata(&url).await;
        self.apply(token, |s| match result {
            Ok(metadata) => {
                s.phase = SessionPhase::MetadataReady;
                s.metadata = Some(metadata);
            }
            Err(err) => {
                s.phase = SessionPhase::Failed;
                s.error = Some(err.message);
            }
        });
        Ok(())
    }

    /// Resolve a download link for the chosen rendition.
    ///
    /// The request carries the first listed rendition's source URL (query
    /// string stripped) plus the normalized quality; the backend re-derives
    /// the right rendition from that pair. Without metadata there is
    /// nothing to resolve and the call is a no-op. On failure the metadata
    /// is preserved so another quality can be tried without re-fetching.
    pub async fn select_format_and_download(&self, format_id: &str, quality: &str) {
        let source_url = {
            let snapshot = self.state.borrow();
            match snapshot
                .metadata
                .as_ref()
                .and_then(|m| m.download_source_url())
            {
                Some(url) => url.to_string(),
                None => {
                    tracing::debug!("no metadata to resolve a download from");
                    return;
                }
            }
        };
        let quality = FormatSelector::normalize_quality(quality);

        let token = self.begin(SessionPhase::ResolvingDownload, |s| {
            s.selected_format_id = Some(format_id.to_string());
            s.download = None;
            s.error = None;
        });
        tracing::info!(format_id, quality = %quality, "resolving download link");

        let result = self.api.resolve_download(&source_url, &quality).await;
        self.apply(token, |s| match result {
            Ok(download) => {
                s.phase = SessionPhase::DownloadReady;
                s.download = Some(download);
            }
            Err(err) => {
                // metadata stays readable in Failed for a retry
                s.phase = SessionPhase::Failed;
                s.error = Some(err.message);
            }
        });
    }

    /// Drop all request state and return to [`SessionPhase::Idle`].
    ///
    /// An in-flight call is not aborted; its response fails the generation
    /// check when it lands. The last known server status is kept.
    pub fn reset(&self) {
        self.state.send_modify(|s| {
            s.generation += 1;
            s.phase = SessionPhase::Idle;
            s.metadata = None;
            s.selected_format_id = None;
            s.download = None;
            s.error = None;
        });
        tracing::debug!("session reset");
    }

    /// Start a user-initiated transition: bump the generation, set the
    /// transient phase, and run the payload updates in the same atomic
    /// mutation.
    fn begin(
        &self,
        phase: SessionPhase,
        prepare: impl FnOnce(&mut SessionSnapshot),
    ) -> RequestToken {
        let mut generation = 0;
        self.state.send_modify(|s| {
            s.generation += 1;
            generation = s.generation;
            s.phase = phase;
            prepare(s);
        });
        RequestToken { generation }
    }

    /// Apply the outcome of a transition, unless the session has moved on
    /// since the request was issued; a stale outcome is discarded without
    /// notifying observers.
    fn apply(&self, token: RequestToken, outcome: impl FnOnce(&mut SessionSnapshot)) {
        self.state.send_if_modified(|s| {
            if s.generation != token.generation {
                tracing::debug!(
                    issued = token.generation,
                    current = s.generation,
                    "discarding stale backend response"
                );
                return false;
            }
            outcome(s);
            true
        });
    }
}
