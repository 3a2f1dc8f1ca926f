//! Tubegrab CLI entry point

use std::process::ExitCode;

use clap::Parser;

use tubegrab::application::{AudioOptions, VideoOptions};
use tubegrab::cli::{
    app::{load_config_from_xdg, run_fetch, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging,
    presenter::Presenter,
    FetchOptions,
};
use tubegrab::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    logging::init(cli.verbose);
    let presenter = Presenter::new();

    if let Some(Commands::Config { action }) = cli.command.take() {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let Some(url) = cli.url.clone() else {
        presenter.error("Missing URL");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    // Merge: defaults < file < env/cli
    let config = load_config_from_xdg(cli.to_config()).await;

    let mode = match config.mode_or_default() {
        Ok(mode) => mode,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = FetchOptions {
        url,
        mode,
        audio: AudioOptions {
            codec: config.codec_or_default().to_string(),
            quality: config.quality_or_default().to_string(),
        },
        video: VideoOptions {
            max_height: config.resolution_or_default(),
        },
        output_dir: config.output_dir_or_default(),
        yt_dlp: config.yt_dlp_path_or_default().to_string(),
        ffmpeg_location: config.ffmpeg_path.clone(),
        dry_run: cli.dry_run,
    };

    run_fetch(options).await
}
