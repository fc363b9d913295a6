// Session layer - state machine and pure helpers for the video request
// workflow

pub mod errors;
pub mod format_selector;
pub mod models;
pub mod orchestrator;
pub mod state;
pub mod traits;
pub mod validate;

pub use errors::{BackendError, UrlRejection};
pub use format_selector::{DisplayFormat, FormatSelector, QualityBadge, MAX_DISPLAY_FORMATS};
pub use models::{DownloadResult, Platform, RenditionDescriptor, ServerStatus, VideoMetadata};
pub use orchestrator::Session;
pub use state::{SessionPhase, SessionSnapshot};
pub use traits::ExtractorApi;
pub use validate::validate;
