// Data models for the video request session

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source platform of a video URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Instagram,
    Tiktok,
    Facebook,
    Twitter,
    /// Any platform the backend does not classify
    #[serde(other)]
    Other,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Youtube => write!(f, "youtube"),
            Self::Instagram => write!(f, "instagram"),
            Self::Tiktok => write!(f, "tiktok"),
            Self::Facebook => write!(f, "facebook"),
            Self::Twitter => write!(f, "twitter"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// One selectable output option of a video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenditionDescriptor {
    /// Selection key, unique within one metadata set
    pub format_id: String,

    /// Platform-supplied quality label (e.g. "1080p"), not necessarily numeric
    pub quality_label: String,

    /// Vertical resolution in pixels, when known
    pub resolution_height: Option<u32>,

    /// Container extension (mp4, webm, ...)
    pub extension: String,

    pub has_audio: bool,
    pub has_video: bool,

    /// Exact size in bytes, when the backend knows it
    pub filesize: Option<u64>,

    /// Size in megabytes, when known
    pub filesize_mb: Option<f64>,

    /// Source URL of this rendition
    pub url: String,
}

impl RenditionDescriptor {
    /// Whether the rendition carries both an audio and a video stream
    pub fn is_merged(&self) -> bool {
        self.has_audio && self.has_video
    }
}

/// Everything the backend knows about a video before a download is resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub uploader: Option<String>,
    pub duration_seconds: Option<u64>,
    pub platform: Platform,

    /// Renditions in the order the backend returned them
    pub formats: Vec<RenditionDescriptor>,
}

impl VideoMetadata {
    /// Source URL that download resolution is issued against: the first
    /// listed rendition's URL with any query string stripped. The backend
    /// re-derives the right rendition from (source URL, quality).
    pub fn download_source_url(&self) -> Option<&str> {
        self.formats.first().and_then(|f| f.url.split('?').next())
    }
}

/// A resolved, one-shot download link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadResult {
    pub download_url: String,
    pub title: String,
    pub extension: String,
    pub platform: Platform,
    pub filesize_mb: Option<f64>,
    pub has_audio: bool,
    pub has_video: bool,
}

/// Informational status payload from the backend root endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    pub service: String,
    pub supported_sites: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rendition(url: &str) -> RenditionDescriptor {
        RenditionDescriptor {
            format_id: "22".to_string(),
            quality_label: "720p".to_string(),
            resolution_height: Some(720),
            extension: "mp4".to_string(),
            has_audio: true,
            has_video: true,
            filesize: Some(12_000_000),
            filesize_mb: Some(11.44),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_unknown_platform_folds_to_other() {
        let platform: Platform = serde_json::from_str("\"dailymotion\"").unwrap();
        assert_eq!(platform, Platform::Other);
    }

    #[test]
    fn test_known_platform_round_trip() {
        let platform: Platform = serde_json::from_str("\"youtube\"").unwrap();
        assert_eq!(platform, Platform::Youtube);
        assert_eq!(serde_json::to_string(&platform).unwrap(), "\"youtube\"");
    }

    #[test]
    fn test_download_source_url_strips_query() {
        let metadata = VideoMetadata {
            title: "clip".to_string(),
            thumbnail_url: None,
            uploader: None,
            duration_seconds: None,
            platform: Platform::Youtube,
            formats: vec![
                make_rendition("https://cdn.example.com/video.mp4?sig=abc&expire=1"),
                make_rendition("https://cdn.example.com/other.mp4"),
            ],
        };
        assert_eq!(
            metadata.download_source_url(),
            Some("https://cdn.example.com/video.mp4")
        );
    }

    #[test]
    fn test_download_source_url_empty_formats() {
        let metadata = VideoMetadata {
            title: "clip".to_string(),
            thumbnail_url: None,
            uploader: None,
            duration_seconds: None,
            platform: Platform::Other,
            formats: Vec::new(),
        };
        assert_eq!(metadata.download_source_url(), None);
    }
}
