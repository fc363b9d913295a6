// Session phase tag and observable snapshot

use serde::{Deserialize, Serialize};

use super::models::{DownloadResult, ServerStatus, VideoMetadata};

/// Phase of the video request workflow.
///
/// Exactly one phase is active at a time; the phase together with the
/// payload fields of [`SessionSnapshot`] fully determines what a UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No request submitted yet, or the session was reset
    Idle,
    /// Metadata fetch in flight
    FetchingMetadata,
    /// Metadata available, awaiting a format choice
    MetadataReady,
    /// Download link resolution in flight
    ResolvingDownload,
    /// A download link is available
    DownloadReady,
    /// The last backend call failed
    Failed,
}

impl SessionPhase {
    /// Whether a network call is in flight. The UI must disable the
    /// corresponding submit affordance while this is true; the machine
    /// itself does not guard against concurrent duplicate calls.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::FetchingMetadata | Self::ResolvingDownload)
    }

    /// Whether a new URL submission is accepted in this phase
    pub fn accepts_submission(&self) -> bool {
        !self.is_busy()
    }
}

/// Consistent view of the session at one point in time.
///
/// Published as a whole on every applied transition; the phase tag and its
/// payload always change together, so no observer sees a phase without its
/// matching payload.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,

    /// Metadata of the current video request, when fetched
    pub metadata: Option<VideoMetadata>,

    /// `format_id` of the rendition chosen for the last resolution
    pub selected_format_id: Option<String>,

    /// Result of the last successful download resolution
    pub download: Option<DownloadResult>,

    /// Message of the last backend failure, shown verbatim
    pub error: Option<String>,

    /// Last successful status probe, best-effort telemetry
    pub server_status: Option<ServerStatus>,

    /// Monotonic counter bumped on every user-initiated transition; used
    /// to detect and discard responses that outlived their request
    pub generation: u64,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Idle,
            metadata: None,
            selected_format_id: None,
            download: None,
            error: None,
            server_status: None,
            generation: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_phases() {
        assert!(SessionPhase::FetchingMetadata.is_busy());
        assert!(SessionPhase::ResolvingDownload.is_busy());
        assert!(!SessionPhase::Idle.is_busy());
        assert!(!SessionPhase::MetadataReady.is_busy());
        assert!(!SessionPhase::DownloadReady.is_busy());
        assert!(!SessionPhase::Failed.is_busy());
    }

    #[test]
    fn test_resubmission_allowed_in_every_settled_phase() {
        assert!(SessionPhase::Idle.accepts_submission());
        assert!(SessionPhase::MetadataReady.accepts_submission());
        assert!(SessionPhase::DownloadReady.accepts_submission());
        assert!(SessionPhase::Failed.accepts_submission());
        assert!(!SessionPhase::FetchingMetadata.accepts_submission());
    }

    #[test]
    fn test_default_snapshot_is_idle_and_empty() {
        let snapshot = SessionSnapshot::default();
        assert_eq!(snapshot.phase, SessionPhase::Idle);
        assert!(snapshot.metadata.is_none());
        assert!(snapshot.download.is_none());
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.generation, 0);
    }
}
