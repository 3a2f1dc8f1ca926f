//! yt-dlp extraction engine adapter

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::application::ports::{ExtractionError, MediaExtractor, OutputCallback};
use crate::domain::config::DEFAULT_YT_DLP;
use crate::domain::media::MediaMetadata;
use crate::domain::request::{RequestShape, RetrievalRequest};

/// Drives the `yt-dlp` binary as a subprocess
#[derive(Debug, Clone)]
pub struct YtDlpExtractor {
    binary: PathBuf,
    /// Passed through as `--ffmpeg-location`
    ffmpeg_location: Option<PathBuf>,
}

impl YtDlpExtractor {
    /// Use `yt-dlp` from PATH
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_YT_DLP)
    }

    /// Use a specific yt-dlp binary
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            ffmpeg_location: None,
        }
    }

    /// Point the engine's postprocessors at a specific ffmpeg binary or directory
    pub fn ffmpeg_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.ffmpeg_location = Some(location.into());
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Build engine arguments for a request
    pub fn build_args(&self, request: &RetrievalRequest) -> Vec<String> {
        let mut args = vec![
            // Only the flags below shape the request, never a user's yt-dlp config files
            "--ignore-config".to_string(),
            "--no-warnings".to_string(),
            "--newline".to_string(),
            "--progress".to_string(),
            // Print the info document once the download finished
            "--dump-single-json".to_string(),
            "--no-simulate".to_string(),
            "-f".to_string(),
            request.format_selection(),
            "-o".to_string(),
            request.output_template().to_string(),
        ];

        match request.shape() {
            RequestShape::Audio(audio) => {
                args.extend([
                    "-x".to_string(),
                    "--audio-format".to_string(),
                    audio.codec.clone(),
                    "--audio-quality".to_string(),
                    audio.quality.clone(),
                ]);
            }
            RequestShape::Video(video) => {
                args.extend([
                    "--merge-output-format".to_string(),
                    video.container_format.to_string(),
                ]);
            }
        }

        if let Some(ref location) = self.ffmpeg_location {
            args.push("--ffmpeg-location".to_string());
            args.push(location.to_string_lossy().to_string());
        }

        // URL goes after `--` so it is never read as an option
        args.push("--".to_string());
        args.push(request.target_url().to_string());

        args
    }

    /// Full command line, binary first
    pub fn command_line(&self, request: &RetrievalRequest) -> Vec<String> {
        let mut line = vec![self.binary.to_string_lossy().to_string()];
        line.extend(self.build_args(request));
        line
    }
}

impl Default for YtDlpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Map the engine's final error line onto the failure taxonomy
pub fn classify_failure(code: Option<i32>, message: &str) -> ExtractionError {
    let message = message
        .trim()
        .strip_prefix("ERROR:")
        .unwrap_or(message)
        .trim()
        .to_string();
    let lower = message.to_lowercase();

    const POSTPROCESSING: &[&str] = &["postprocessing", "ffmpeg", "ffprobe"];
    const RESOLUTION: &[&str] = &[
        "unsupported url",
        "is not a valid url",
        "video unavailable",
        "private video",
        "requested format is not available",
        "no video formats found",
        "unable to extract",
    ];
    const TRANSFER: &[&str] = &[
        "unable to download",
        "http error",
        "timed out",
        "connection",
        "network is unreachable",
        "name resolution",
        "getaddrinfo",
        "ssl",
    ];

    let has_any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if has_any(POSTPROCESSING) {
        ExtractionError::Postprocessing(message)
    } else if has_any(RESOLUTION) {
        ExtractionError::Resolution(message)
    } else if has_any(TRANSFER) {
        ExtractionError::Transfer(message)
    } else {
        ExtractionError::EngineFailed { code, message }
    }
}

/// What the engine wrote to stderr
#[derive(Debug, Default)]
struct Diagnostics {
    errors: Vec<String>,
    last_line: Option<String>,
}

impl Diagnostics {
    fn failure_message(&self) -> String {
        self.errors
            .last()
            .or(self.last_line.as_ref())
            .cloned()
            .unwrap_or_else(|| "unknown error".to_string())
    }

    /// Every `ERROR:` line except the one the failure is classified from
    fn earlier_errors(&self) -> &[String] {
        let end = self.errors.len().saturating_sub(1);
        &self.errors[..end]
    }
}

#[async_trait]
impl MediaExtractor for YtDlpExtractor {
    async fn resolve_and_fetch(
        &self,
        request: &RetrievalRequest,
        on_output: Option<OutputCallback>,
    ) -> Result<MediaMetadata, ExtractionError> {
        let args = self.build_args(request);
        debug!(binary = %self.binary.display(), ?args, "spawning yt-dlp");

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExtractionError::EngineNotFound(self.binary.display().to_string())
                } else {
                    ExtractionError::StartFailed(e.to_string())
                }
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ExtractionError::Io("engine stdout not captured".to_string()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| ExtractionError::Io("engine stderr not captured".to_string()))?;

        let stdout_progress = on_output.clone();
        let read_stdout = async move {
            let mut lines = BufReader::new(stdout).lines();
            let mut info = None;
            while let Some(line) = lines.next_line().await? {
                let line = line.trim();
                if line.starts_with('{') {
                    info = Some(line.to_string());
                } else if !line.is_empty() {
                    if let Some(ref cb) = stdout_progress {
                        cb(line);
                    }
                }
            }
            Ok::<_, std::io::Error>(info)
        };

        let read_stderr = async move {
            let mut lines = BufReader::new(stderr).lines();
            let mut diagnostics = Diagnostics::default();
            while let Some(line) = lines.next_line().await? {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!("yt-dlp: {}", line);
                if line.starts_with("ERROR:") {
                    diagnostics.errors.push(line.to_string());
                } else if let Some(ref cb) = on_output {
                    cb(line);
                }
                diagnostics.last_line = Some(line.to_string());
            }
            Ok::<_, std::io::Error>(diagnostics)
        };

        let (info, diagnostics, status) = tokio::join!(read_stdout, read_stderr, child.wait());

        let status = status.map_err(|e| ExtractionError::Io(e.to_string()))?;
        let diagnostics = diagnostics.map_err(|e| ExtractionError::Io(e.to_string()))?;
        let info = info.map_err(|e| ExtractionError::Io(e.to_string()))?;

        if !status.success() {
            // The last error is reported by the caller; surface the ones before it
            for line in diagnostics.earlier_errors() {
                warn!("yt-dlp: {}", line);
            }
            return Err(classify_failure(
                status.code(),
                &diagnostics.failure_message(),
            ));
        }

        let info = info.ok_or_else(|| {
            ExtractionError::InvalidMetadata("engine printed no info document".to_string())
        })?;

        MediaMetadata::from_json(&info).map_err(|e| ExtractionError::InvalidMetadata(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/watch?v=abc";

    fn audio_request() -> RetrievalRequest {
        RetrievalRequest::audio(URL, "downloads", "aac", "128").unwrap()
    }

    fn video_request(height: u32) -> RetrievalRequest {
        RetrievalRequest::video(URL, "downloads", height).unwrap()
    }

    fn value_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .map(String::as_str)
    }

    #[test]
    fn audio_args_request_extraction() {
        let args = YtDlpExtractor::new().build_args(&audio_request());

        assert_eq!(value_after(&args, "-f"), Some("bestaudio/best"));
        assert!(args.contains(&"-x".to_string()));
        assert_eq!(value_after(&args, "--audio-format"), Some("aac"));
        assert_eq!(value_after(&args, "--audio-quality"), Some("128"));
        assert!(!args.contains(&"--merge-output-format".to_string()));
    }

    #[test]
    fn video_args_merge_into_mp4() {
        let args = YtDlpExtractor::new().build_args(&video_request(720));

        assert_eq!(
            value_after(&args, "-f"),
            Some("bestvideo[height<=720]+bestaudio/best")
        );
        assert_eq!(value_after(&args, "--merge-output-format"), Some("mp4"));
        assert!(!args.contains(&"-x".to_string()));
    }

    #[test]
    fn args_carry_template_and_end_with_url() {
        let request = audio_request();
        let args = YtDlpExtractor::new().build_args(&request);

        assert_eq!(value_after(&args, "-o"), Some(request.output_template()));
        assert_eq!(args[0], "--ignore-config");
        assert!(args.contains(&"--no-warnings".to_string()));
        assert_eq!(args[args.len() - 2], "--");
        assert_eq!(args.last().map(String::as_str), Some(URL));
    }

    #[test]
    fn ffmpeg_location_is_passed_through() {
        let extractor = YtDlpExtractor::new().ffmpeg_location("/opt/ffmpeg/bin");
        let args = extractor.build_args(&video_request(1080));
        assert_eq!(value_after(&args, "--ffmpeg-location"), Some("/opt/ffmpeg/bin"));

        let args = YtDlpExtractor::new().build_args(&video_request(1080));
        assert!(!args.contains(&"--ffmpeg-location".to_string()));
    }

    #[test]
    fn command_line_starts_with_binary() {
        let line = YtDlpExtractor::with_binary("/usr/local/bin/yt-dlp").command_line(&audio_request());
        assert_eq!(line[0], "/usr/local/bin/yt-dlp");
    }

    #[test]
    fn classifies_postprocessing() {
        let err = classify_failure(Some(1), "ERROR: Postprocessing: ffprobe and ffmpeg not found");
        assert!(matches!(err, ExtractionError::Postprocessing(ref m) if m.starts_with("Postprocessing")));
    }

    #[test]
    fn classifies_resolution() {
        assert!(matches!(
            classify_failure(Some(1), "ERROR: Unsupported URL: https://example.com/"),
            ExtractionError::Resolution(_)
        ));
        assert!(matches!(
            classify_failure(Some(1), "ERROR: [youtube] abc: Video unavailable"),
            ExtractionError::Resolution(_)
        ));
        assert!(matches!(
            classify_failure(Some(1), "ERROR: [youtube] abc: Requested format is not available"),
            ExtractionError::Resolution(_)
        ));
    }

    #[test]
    fn classifies_transfer() {
        assert!(matches!(
            classify_failure(Some(1), "ERROR: Unable to download webpage: <urlopen error timed out>"),
            ExtractionError::Transfer(_)
        ));
    }

    #[test]
    fn unknown_failures_keep_exit_code() {
        let err = classify_failure(Some(2), "something odd");
        assert!(matches!(
            err,
            ExtractionError::EngineFailed { code: Some(2), ref message } if message == "something odd"
        ));
    }

    #[test]
    fn failure_message_prefers_error_lines() {
        let diagnostics = Diagnostics {
            errors: vec!["ERROR: first".to_string(), "ERROR: second".to_string()],
            last_line: Some("trailing noise".to_string()),
        };
        assert_eq!(diagnostics.failure_message(), "ERROR: second");

        assert_eq!(diagnostics.earlier_errors(), ["ERROR: first".to_string()]);

        let quiet = Diagnostics::default();
        assert_eq!(quiet.failure_message(), "unknown error");
        assert!(quiet.earlier_errors().is_empty());
    }

    #[test]
    fn user_config_files_are_ignored_in_both_modes() {
        let extractor = YtDlpExtractor::new();
        for request in [audio_request(), video_request(1080)] {
            let args = extractor.build_args(&request);
            assert_eq!(args.first().map(String::as_str), Some("--ignore-config"));
        }
    }

    #[tokio::test]
    async fn missing_binary_is_engine_not_found() {
        let extractor = YtDlpExtractor::with_binary("/nonexistent/tubegrab-test-yt-dlp");
        let err = extractor
            .resolve_and_fetch(&audio_request(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::EngineNotFound(_)));
    }
}
