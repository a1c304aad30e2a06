use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use voicelaunch::cli::{
    config_cmd, load_merged_config, run_dispatch, run_interactive, Cli, Commands, Presenter,
    RunOptions, EXIT_ERROR,
};
use voicelaunch::domain::config::AppConfig;
use voicelaunch::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            let presenter = Presenter::new();
            let store = XdgConfigStore::new();
            match config_cmd::handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Some(Commands::Dispatch { ref text }) => {
            let options = resolve_options(&cli).await;
            run_dispatch(text, options).await
        }
        None => {
            let options = resolve_options(&cli).await;
            run_interactive(options).await
        }
    }
}

/// Merge config sources and build runner options from the result.
async fn resolve_options(cli: &Cli) -> RunOptions {
    let cli_config = AppConfig {
        locale: cli.locale.clone(),
        pitch: cli.pitch,
        rate: cli.rate,
        engine_init_delay_ms: cli.engine_init_delay_ms,
        speech: cli.no_speech.then_some(false),
        cue: cli.cue_override(),
        notify: cli.notify_override(),
    };

    let config = load_merged_config(cli_config).await;

    RunOptions {
        settings: config.voice_settings(),
        engine_init_delay: Duration::from_millis(config.engine_init_delay_ms_or_default()),
        speech: config.speech_or_default(),
        cue: config.cue_or_default(),
        notify: config.notify_or_default(),
    }
}
