// vidlink - client-side session orchestration for a remote
// video-extraction service

pub mod backend;
pub mod session;

pub use backend::{BackendConfig, HttpBackendClient};
pub use session::{
    validate, BackendError, DisplayFormat, DownloadResult, ExtractorApi, FormatSelector,
    Platform, QualityBadge, RenditionDescriptor, ServerStatus, Session, SessionPhase,
    SessionSnapshot, UrlRejection, VideoMetadata,
};
