//! Runner wiring for the interactive session and one-shot dispatch

use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::ConfigStore;
use crate::application::VoiceAssistant;
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    create_audio_cue, create_display, create_synthesizer, ConsoleRecognizer, DesktopLauncher,
    XdgConfigStore,
};

use super::args::RunOptions;
use super::presenter::Presenter;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Load config from disk and merge with CLI overrides.
/// Precedence: defaults < config file < environment/CLI flags.
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            log::warn!("failed to load config, using defaults: {e}");
            AppConfig::empty()
        }
    };
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Run the interactive touch-to-talk loop.
///
/// An empty line on stdin is the touch trigger; the next non-empty line
/// is treated as the recognized utterance for the pending session.
pub async fn run_interactive(options: RunOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let (recognizer, mut results) = ConsoleRecognizer::new();
    let recognizer = Arc::new(recognizer);

    let assistant = VoiceAssistant::new(
        Arc::clone(&recognizer),
        create_synthesizer(options.speech),
        DesktopLauncher::new(),
        create_display(options.notify),
        create_audio_cue(options.cue),
        options.settings.clone(),
    );
    let assistant = Arc::new(assistant);

    assistant.startup().await;

    // Mirrors the host platform's delayed engine bring-up.
    let init_assistant = Arc::clone(&assistant);
    let init_delay = options.engine_init_delay;
    tokio::spawn(async move {
        tokio::time::sleep(init_delay).await;
        init_assistant.init_engine().await;
    });

    presenter.info("Press Enter to talk, type an utterance to answer, Ctrl+C to quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    log::warn!("signal handler failed: {e}");
                }
                presenter.stop_listening();
                presenter.info("Shutting down");
                break;
            }
            event = results.recv() => {
                let Some(event) = event else { break };
                presenter.stop_listening();
                assistant.on_recognition_result(event).await;
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        let line = line.trim();
                        if line.is_empty() {
                            assistant.on_touch().await;
                            if recognizer.is_listening() {
                                presenter.start_listening("Dinleniyor...");
                            }
                        } else if !recognizer.submit_utterance(line) {
                            presenter.warn("No listening session; press Enter first");
                        }
                    }
                    Ok(None) => {
                        // stdin closed
                        recognizer.cancel_pending();
                        break;
                    }
                    Err(e) => {
                        presenter.error(&format!("stdin read failed: {e}"));
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
            }
        }
    }

    // Drain any result produced just before shutdown.
    while let Ok(event) = results.try_recv() {
        assistant.on_recognition_result(event).await;
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Interpret a single transcript and run the matching action, then exit.
pub async fn run_dispatch(text: &str, options: RunOptions) -> ExitCode {
    let (recognizer, _results) = ConsoleRecognizer::new();

    let assistant = VoiceAssistant::new(
        Arc::new(recognizer),
        create_synthesizer(options.speech),
        DesktopLauncher::new(),
        create_display(options.notify),
        create_audio_cue(options.cue),
        options.settings.clone(),
    );

    // No deferral in one-shot mode; speak immediately if possible.
    assistant.init_engine().await;
    assistant.dispatch(text).await;

    ExitCode::from(EXIT_SUCCESS)
}
