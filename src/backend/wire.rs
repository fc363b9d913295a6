// Wire types for the backend JSON contract
//
// Mirrors the backend's response shapes field-for-field and converts them
// into session models. Unknown fields (success, timestamp, ...) are
// ignored.

use serde::{Deserialize, Serialize};

use crate::session::models::{DownloadResult, Platform, RenditionDescriptor, VideoMetadata};

/// Body of both POST endpoints
#[derive(Debug, Serialize)]
pub(crate) struct UrlRequest<'a> {
    pub url: &'a str,
}

/// One entry of the video-info formats array
#[derive(Debug, Deserialize)]
pub(crate) struct WireFormat {
    pub format_id: String,
    pub quality: String,
    #[serde(default)]
    pub resolution: Option<u32>,
    pub extension: String,
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub filesize_mb: Option<f64>,
    pub url: String,
    pub has_audio: bool,
    pub has_video: bool,
}

impl From<WireFormat> for RenditionDescriptor {
    fn from(wire: WireFormat) -> Self {
        Self {
            format_id: wire.format_id,
            quality_label: wire.quality,
            resolution_height: wire.resolution,
            extension: wire.extension,
            has_audio: wire.has_audio,
            has_video: wire.has_video,
            filesize: wire.filesize,
            filesize_mb: wire.filesize_mb,
            url: wire.url,
        }
    }
}

/// POST /api/video-info response
#[derive(Debug, Deserialize)]
pub(crate) struct VideoInfoResponse {
    pub platform: Platform,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub uploader: Option<String>,
    pub formats: Vec<WireFormat>,
}

impl From<VideoInfoResponse> for VideoMetadata {
    fn from(wire: VideoInfoResponse) -> Self {
        Self {
            title: wire.title,
            thumbnail_url: wire.thumbnail,
            uploader: wire.uploader,
            duration_seconds: wire.duration,
            platform: wire.platform,
            formats: wire.formats.into_iter().map(Into::into).collect(),
        }
    }
}

/// POST /api/get-download-url response
#[derive(Debug, Deserialize)]
pub(crate) struct DownloadUrlResponse {
    pub platform: Platform,
    pub title: String,
    pub download_url: String,
    pub extension: String,
    #[serde(default)]
    pub filesize_mb: Option<f64>,
    pub has_audio: bool,
    pub has_video: bool,
}

impl From<DownloadUrlResponse> for DownloadResult {
    fn from(wire: DownloadUrlResponse) -> Self {
        Self {
            download_url: wire.download_url,
            title: wire.title,
            extension: wire.extension,
            platform: wire.platform,
            filesize_mb: wire.filesize_mb,
            has_audio: wire.has_audio,
            has_video: wire.has_video,
        }
    }
}

/// Error envelope carried by non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub detail: Option<String>,
}
