//! Resolved media metadata

use serde::Deserialize;

/// Descriptive metadata the engine reports after a successful fetch.
///
/// Only `title` is required; the engine's info document carries many more
/// fields, which are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaMetadata {
    pub title: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub extractor: Option<String>,
    #[serde(default)]
    pub webpage_url: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
    /// Extension of the downloaded stream before postprocessing
    #[serde(default)]
    pub ext: Option<String>,
}

impl MediaMetadata {
    /// Metadata carrying only a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: None,
            extractor: None,
            webpage_url: None,
            duration: None,
            ext: None,
        }
    }

    /// Parse an info JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Duration formatted as `H:MM:SS` or `M:SS`
    pub fn duration_display(&self) -> Option<String> {
        let total = self.duration?.max(0.0).round() as u64;
        let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
        Some(if h > 0 {
            format!("{}:{:02}:{:02}", h, m, s)
        } else {
            format!("{}:{:02}", m, s)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_info_document_ignoring_unknown_fields() {
        let json = r#"{
            "id": "abc",
            "title": "Sample",
            "extractor": "youtube",
            "webpage_url": "https://example.com/watch?v=abc",
            "duration": 212.0,
            "ext": "webm",
            "formats": [{"format_id": "251"}],
            "view_count": 42
        }"#;

        let meta = MediaMetadata::from_json(json).unwrap();
        assert_eq!(meta.title, "Sample");
        assert_eq!(meta.id.as_deref(), Some("abc"));
        assert_eq!(meta.extractor.as_deref(), Some("youtube"));
        assert_eq!(meta.ext.as_deref(), Some("webm"));
    }

    #[test]
    fn title_is_required() {
        assert!(MediaMetadata::from_json(r#"{"id": "abc"}"#).is_err());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let meta = MediaMetadata::from_json(r#"{"title": "Clip"}"#).unwrap();
        assert_eq!(meta, MediaMetadata::with_title("Clip"));
    }

    #[test]
    fn duration_display_formats() {
        let mut meta = MediaMetadata::with_title("x");
        assert_eq!(meta.duration_display(), None);

        meta.duration = Some(65.0);
        assert_eq!(meta.duration_display().as_deref(), Some("1:05"));

        meta.duration = Some(3725.4);
        assert_eq!(meta.duration_display().as_deref(), Some("1:02:05"));
    }
}
