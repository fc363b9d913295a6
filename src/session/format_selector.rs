// FormatSelector - prepares rendition lists for quality selection
//
// Converts raw renditions from a metadata fetch into UI-friendly display
// entries: quality badge, merged flag, size label. The backend's ordering
// is trusted; the list is truncated but never re-sorted here.

use serde::{Deserialize, Serialize};

use super::models::RenditionDescriptor;

/// Maximum number of renditions offered for selection
pub const MAX_DISPLAY_FORMATS: usize = 8;

/// Quality tier derived from vertical resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityBadge {
    FourK,
    TwoK,
    FullHd,
    Hd,
    Sd,
}

impl QualityBadge {
    /// Derive the badge from a vertical resolution, first match wins in
    /// descending order; unknown resolution counts as the lowest tier
    pub fn from_height(height: Option<u32>) -> Self {
        match height {
            Some(h) if h >= 2160 => Self::FourK,
            Some(h) if h >= 1440 => Self::TwoK,
            Some(h) if h >= 1080 => Self::FullHd,
            Some(h) if h >= 720 => Self::Hd,
            _ => Self::Sd,
        }
    }

    /// Short label for UI display
    pub fn label(&self) -> &'static str {
        match self {
            Self::FourK => "4K",
            Self::TwoK => "2K",
            Self::FullHd => "FHD",
            Self::Hd => "HD",
            Self::Sd => "SD",
        }
    }
}

/// Rendition prepared for UI display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayFormat {
    /// Original selection key, carried through unchanged
    pub format_id: String,

    /// Platform-supplied quality label (e.g. "1080p")
    pub quality_label: String,

    /// Derived quality tier badge
    pub badge: QualityBadge,

    /// Container extension (mp4, webm, ...)
    pub extension: String,

    /// Whether the rendition carries both audio and video, for display
    /// emphasis only
    pub merged: bool,

    /// Human-readable size, or "unknown size" when the backend has none
    pub size_label: String,
}

/// Format selection presentation logic
pub struct FormatSelector;

impl FormatSelector {
    /// Prepare renditions for display: the first [`MAX_DISPLAY_FORMATS`]
    /// entries in the order received, each with a derived badge and labels.
    pub fn present(formats: &[RenditionDescriptor]) -> Vec<DisplayFormat> {
        formats
            .iter()
            .take(MAX_DISPLAY_FORMATS)
            .map(|format| DisplayFormat {
                format_id: format.format_id.clone(),
                quality_label: format.quality_label.clone(),
                badge: QualityBadge::from_height(format.resolution_height),
                extension: format.extension.clone(),
                merged: format.is_merged(),
                size_label: Self::size_label(format.filesize_mb),
            })
            .collect()
    }

    /// Strip the trailing unit suffix from a quality label before it is
    /// sent to the backend ("1080p" -> "1080"). Labels without a leading
    /// digit ("best") pass through unchanged.
    pub fn normalize_quality(label: &str) -> String {
        let digits: String = label
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            label.to_string()
        } else {
            digits
        }
    }

    fn size_label(filesize_mb: Option<f64>) -> String {
        match filesize_mb {
            Some(mb) => format!("{:.2} MB", mb),
            None => "unknown size".to_string(),
        }
    }
}
