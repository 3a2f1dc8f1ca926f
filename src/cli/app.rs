//! Main app runner for one-shot fetches

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ports::{ConfigStore, OutputCallback};
use crate::application::{FetchCallbacks, FetchMediaUseCase, FetchOutput, RetrievalRequestBuilder};
use crate::domain::config::AppConfig;
use crate::domain::request::RetrievalRequest;
use crate::infrastructure::{XdgConfigStore, YtDlpExtractor};

use super::args::FetchOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Build the request, invoke the engine once and report the result
pub async fn run_fetch(options: FetchOptions) -> ExitCode {
    let mut presenter = Presenter::new();
    let builder = RetrievalRequestBuilder::new(&options.output_dir);

    let mut extractor = YtDlpExtractor::with_binary(&options.yt_dlp);
    if let Some(ref location) = options.ffmpeg_location {
        extractor = extractor.ffmpeg_location(location);
    }

    if options.dry_run {
        return match builder.prepare(&options.url, options.mode, &options.audio, options.video) {
            Ok(request) => {
                presenter.output(&presenter.format_command(&extractor.command_line(&request)));
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_USAGE_ERROR)
            }
        };
    }

    let request = match builder
        .build(&options.url, options.mode, &options.audio, options.video)
        .await
    {
        Ok(request) => request,
        Err(e) => {
            presenter.error(&e.to_string());
            let code = if e.is_invalid_input() {
                EXIT_USAGE_ERROR
            } else {
                EXIT_ERROR
            };
            return ExitCode::from(code);
        }
    };

    presenter.start_spinner(&format!("Fetching {}...", request.target_url()));

    let on_output: Option<OutputCallback> = presenter.spinner_handle().map(|spinner| {
        Arc::new(move |line: &str| spinner.set_message(line.to_string())) as OutputCallback
    });

    let callbacks = FetchCallbacks {
        on_output,
        on_fetch_start: Some(Box::new(|request: &RetrievalRequest| {
            debug!(
                template = request.output_template(),
                extension = request.expected_extension(),
                "fetch started"
            );
        })),
        on_fetch_end: Some(Box::new(|output: &FetchOutput| {
            if let Some(duration) = output.metadata.duration_display() {
                debug!(duration = %duration, "media duration");
            }
        })),
    };

    let use_case = FetchMediaUseCase::new(extractor);

    match use_case.execute(&request, callbacks).await {
        Ok(output) => {
            presenter.stop_spinner();
            presenter.output(&output.confirmation());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Fetch failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration: defaults < file < env/cli
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %store.path().display(), "ignoring config file: {}", e);
            AppConfig::empty()
        }
    };

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Convenience wrapper using the XDG store
pub async fn load_config_from_xdg(cli_config: AppConfig) -> AppConfig {
    load_merged_config(&XdgConfigStore::new(), cli_config).await
}
