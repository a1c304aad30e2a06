//! Voice assistant use case
//!
//! The single interaction flow of the launcher: a trigger event starts
//! a recognition session, the host delivers a result event, the top
//! transcript candidate is interpreted against the command table, and
//! the matching action speaks a confirmation and launches an app (or
//! speaks a fallback phrase).
//!
//! Every host call is attempted at most once and every host error is
//! caught here: logged to the diagnostic channel and converted into
//! silence or a spoken fallback, never propagated. The entry points
//! make no assumptions about which task or thread invokes them.

use tokio::sync::Mutex;

use crate::domain::command::{CommandTable, Interpretation, LaunchTarget, MSG_NOT_UNDERSTOOD, TOUCH_PROMPT};
use crate::domain::session::{EngineLifecycle, EngineState, ListeningSession, VoiceSettings};
use crate::domain::transcript::{RecognitionEvent, RequestToken};

use super::ports::{
    AppLauncher, AudioCue, AudioCueType, LabelDisplay, RecognitionRequest, SpeechRecognizer,
    SpeechSynthesizer,
};

/// The touch-to-listen-to-command flow, generic over its host ports
pub struct VoiceAssistant<R, S, L, D, Q>
where
    R: SpeechRecognizer,
    S: SpeechSynthesizer,
    L: AppLauncher,
    D: LabelDisplay,
    Q: AudioCue,
{
    recognizer: R,
    synthesizer: S,
    launcher: L,
    display: D,
    cue: Q,
    table: CommandTable,
    settings: VoiceSettings,
    session: Mutex<ListeningSession>,
    engine: Mutex<EngineLifecycle>,
}

impl<R, S, L, D, Q> VoiceAssistant<R, S, L, D, Q>
where
    R: SpeechRecognizer,
    S: SpeechSynthesizer,
    L: AppLauncher,
    D: LabelDisplay,
    Q: AudioCue,
{
    /// Create a new assistant with the built-in command table
    pub fn new(recognizer: R, synthesizer: S, launcher: L, display: D, cue: Q, settings: VoiceSettings) -> Self {
        Self {
            recognizer,
            synthesizer,
            launcher,
            display,
            cue,
            table: CommandTable::builtin(),
            settings,
            session: Mutex::new(ListeningSession::new()),
            engine: Mutex::new(EngineLifecycle::new()),
        }
    }

    /// Current speech engine state
    pub async fn engine_state(&self) -> EngineState {
        self.engine.lock().await.state()
    }

    /// Startup sequence: show the initial label and request microphone
    /// permission. Denial has no dedicated handling; later recognition
    /// requests will simply fail and be logged.
    pub async fn startup(&self) {
        if let Err(e) = self.display.set_label(TOUCH_PROMPT).await {
            log::warn!("label update failed: {e}");
        }
        if let Err(e) = self.recognizer.request_permission().await {
            log::warn!("microphone permission request failed: {e}");
        }
    }

    /// Initialize the speech engine. Called once, deferred by the
    /// caller to give the host synthesis service time to become ready.
    /// On failure the engine stays unavailable and all later speech
    /// degrades to label-only output.
    pub async fn init_engine(&self) {
        {
            let mut engine = self.engine.lock().await;
            if let Err(e) = engine.begin_init() {
                log::debug!("engine init skipped: {e}");
                return;
            }
        }

        let result = self.synthesizer.configure(&self.settings).await;

        let mut engine = self.engine.lock().await;
        match result {
            Ok(()) => {
                if let Err(e) = engine.mark_ready() {
                    log::error!("engine lifecycle error: {e}");
                }
            }
            Err(e) => {
                log::warn!("speech engine init failed: {e}");
                if let Err(e) = engine.mark_failed() {
                    log::error!("engine lifecycle error: {e}");
                }
            }
        }
    }

    /// Trigger a listening session.
    ///
    /// Issues a fresh correlation token and requests one recognition
    /// session. A new trigger while a session is pending issues another
    /// request; the newer token supersedes the old one. Request errors
    /// are logged and the flow proceeds silently.
    pub async fn on_touch(&self) -> RequestToken {
        let token = self.session.lock().await.issue();

        if let Err(e) = self.cue.play(AudioCueType::ListeningStart).await {
            log::debug!("listening cue failed: {e}");
        }

        let request = RecognitionRequest {
            token,
            locale: self.settings.locale.clone(),
            language_model: Default::default(),
        };
        if let Err(e) = self.recognizer.request_recognition(request).await {
            log::warn!("recognition request failed: {e}");
        }

        token
    }

    /// Result-received entry point for host adapters.
    ///
    /// A stale or unknown token, a non-success status, or an empty
    /// candidate list makes the callback a no-op. Otherwise the top
    /// candidate is forwarded to command interpretation.
    pub async fn on_recognition_result(&self, event: RecognitionEvent) {
        {
            let mut session = self.session.lock().await;
            if !session.complete(event.token()) {
                log::debug!("ignoring result for stale token {}", event.token());
                return;
            }
        }

        if !event.status().is_success() {
            log::debug!(
                "recognition session {} ended without success: {:?}",
                event.token(),
                event.status()
            );
            return;
        }

        match event.top_candidate() {
            Some(text) => self.dispatch(text).await,
            None => log::debug!("recognition session {} returned no candidates", event.token()),
        }
    }

    /// Interpret a transcript and run the matching action
    pub async fn dispatch(&self, text: &str) {
        match self.table.interpret(text) {
            Interpretation::Launch(target) => {
                let target = target.clone();
                if let Err(e) = self.cue.play(AudioCueType::CommandAccepted).await {
                    log::debug!("command cue failed: {e}");
                }
                self.speak(&target.opening_message()).await;
                self.launch(&target).await;
            }
            Interpretation::NotUnderstood => {
                self.speak(MSG_NOT_UNDERSTOOD).await;
            }
        }
    }

    /// Query a launch intent and start it. The only stage with two
    /// distinct user-visible failure phrases: not-installed when the
    /// query finds nothing, could-not-open when the query or the start
    /// call errors.
    async fn launch(&self, target: &LaunchTarget) {
        match self.launcher.find_launch_intent(target.package()).await {
            Ok(Some(intent)) => {
                if let Err(e) = self.launcher.start(&intent).await {
                    log::warn!("failed to start {}: {e}", target.package());
                    self.speak(&target.launch_failed_message()).await;
                }
            }
            Ok(None) => {
                self.speak(&target.not_installed_message()).await;
            }
            Err(e) => {
                log::warn!("launch intent query for {} failed: {e}", target.package());
                self.speak(&target.launch_failed_message()).await;
            }
        }
    }

    /// Update the label and, when the engine is ready, speak the text.
    /// The label updates regardless of engine availability.
    pub async fn speak(&self, text: &str) {
        if let Err(e) = self.display.set_label(text).await {
            log::warn!("label update failed: {e}");
        }

        if self.engine.lock().await.is_ready() {
            if let Err(e) = self.synthesizer.speak(text).await {
                log::warn!("speak request failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        AudioCueError, DisplayError, LaunchError, LaunchIntent, RecognizerError, SynthesizerError,
    };
    use crate::domain::transcript::RecognitionStatus;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    // Recording fakes for the host ports

    #[derive(Default)]
    struct FakeRecognizer {
        requests: StdMutex<Vec<RecognitionRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl SpeechRecognizer for FakeRecognizer {
        async fn request_permission(&self) -> Result<(), RecognizerError> {
            Ok(())
        }

        async fn request_recognition(
            &self,
            request: RecognitionRequest,
        ) -> Result<(), RecognizerError> {
            if self.fail {
                return Err(RecognizerError::HostUnreachable("down".into()));
            }
            self.requests.lock().unwrap().push(request);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeSynthesizer {
        spoken: StdMutex<Vec<String>>,
        fail_configure: bool,
    }

    #[async_trait]
    impl SpeechSynthesizer for FakeSynthesizer {
        async fn configure(&self, _settings: &VoiceSettings) -> Result<(), SynthesizerError> {
            if self.fail_configure {
                return Err(SynthesizerError::EngineNotFound);
            }
            Ok(())
        }

        async fn speak(&self, text: &str) -> Result<(), SynthesizerError> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    /// What the fake launcher should answer for a query
    #[derive(Clone, Copy)]
    enum LaunchBehavior {
        Installed,
        NotInstalled,
        QueryError,
        StartError,
    }

    struct FakeLauncher {
        behavior: LaunchBehavior,
        queries: StdMutex<Vec<String>>,
        started: StdMutex<Vec<String>>,
    }

    impl FakeLauncher {
        fn new(behavior: LaunchBehavior) -> Self {
            Self {
                behavior,
                queries: StdMutex::new(Vec::new()),
                started: StdMutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AppLauncher for FakeLauncher {
        async fn find_launch_intent(
            &self,
            package: &str,
        ) -> Result<Option<LaunchIntent>, LaunchError> {
            self.queries.lock().unwrap().push(package.to_string());
            match self.behavior {
                LaunchBehavior::NotInstalled => Ok(None),
                LaunchBehavior::QueryError => Err(LaunchError::QueryFailed("pm died".into())),
                _ => Ok(Some(LaunchIntent::new(package))),
            }
        }

        async fn start(&self, intent: &LaunchIntent) -> Result<(), LaunchError> {
            if matches!(self.behavior, LaunchBehavior::StartError) {
                return Err(LaunchError::StartFailed("exec failed".into()));
            }
            self.started.lock().unwrap().push(intent.id().to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeDisplay {
        labels: StdMutex<Vec<String>>,
    }

    impl FakeDisplay {
        fn last_label(&self) -> Option<String> {
            self.labels.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl LabelDisplay for FakeDisplay {
        async fn set_label(&self, text: &str) -> Result<(), DisplayError> {
            self.labels.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct FakeCue;

    #[async_trait]
    impl AudioCue for FakeCue {
        async fn play(&self, _cue_type: AudioCueType) -> Result<(), AudioCueError> {
            Ok(())
        }
    }

    type TestAssistant =
        VoiceAssistant<FakeRecognizer, FakeSynthesizer, FakeLauncher, FakeDisplay, FakeCue>;

    fn assistant(behavior: LaunchBehavior) -> TestAssistant {
        VoiceAssistant::new(
            FakeRecognizer::default(),
            FakeSynthesizer::default(),
            FakeLauncher::new(behavior),
            FakeDisplay::default(),
            FakeCue,
            VoiceSettings::default(),
        )
    }

    async fn ready(assistant: &TestAssistant) {
        assistant.init_engine().await;
        assert_eq!(assistant.engine_state().await, EngineState::Ready);
    }

    #[tokio::test]
    async fn startup_shows_touch_prompt() {
        let assistant = assistant(LaunchBehavior::Installed);
        assistant.startup().await;
        assert_eq!(assistant.display.last_label().as_deref(), Some(TOUCH_PROMPT));
    }

    #[tokio::test]
    async fn youtube_transcript_launches_youtube() {
        let assistant = assistant(LaunchBehavior::Installed);
        ready(&assistant).await;

        assistant.dispatch("YouTube'u aç").await;

        assert_eq!(
            assistant.display.last_label().as_deref(),
            Some("YouTube açılıyor")
        );
        assert_eq!(
            assistant.launcher.started.lock().unwrap().as_slice(),
            ["com.google.android.youtube"]
        );
        assert_eq!(
            assistant.synthesizer.spoken.lock().unwrap().as_slice(),
            ["YouTube açılıyor"]
        );
    }

    #[tokio::test]
    async fn youtube_wins_over_instagram() {
        let assistant = assistant(LaunchBehavior::Installed);
        ready(&assistant).await;

        assistant.dispatch("instagram ve youtube aç").await;

        assert_eq!(
            assistant.launcher.started.lock().unwrap().as_slice(),
            ["com.google.android.youtube"]
        );
    }

    #[tokio::test]
    async fn instagram_only_transcript_launches_instagram() {
        let assistant = assistant(LaunchBehavior::Installed);
        ready(&assistant).await;

        assistant.dispatch("Instagram'ı başlat lütfen").await;

        assert_eq!(
            assistant.display.last_label().as_deref(),
            Some("Instagram açılıyor")
        );
        assert_eq!(
            assistant.launcher.started.lock().unwrap().as_slice(),
            ["com.instagram.android"]
        );
    }

    #[tokio::test]
    async fn unknown_transcript_speaks_fallback_without_launch() {
        let assistant = assistant(LaunchBehavior::Installed);
        ready(&assistant).await;

        assistant.dispatch("bugün hava nasıl").await;

        assert_eq!(
            assistant.display.last_label().as_deref(),
            Some(MSG_NOT_UNDERSTOOD)
        );
        assert!(assistant.launcher.queries.lock().unwrap().is_empty());
        assert!(assistant.launcher.started.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_transcript_speaks_fallback() {
        let assistant = assistant(LaunchBehavior::Installed);
        ready(&assistant).await;

        assistant.dispatch("").await;

        assert_eq!(
            assistant.display.last_label().as_deref(),
            Some(MSG_NOT_UNDERSTOOD)
        );
    }

    #[tokio::test]
    async fn not_installed_speaks_exact_phrase_and_does_not_start() {
        let assistant = assistant(LaunchBehavior::NotInstalled);
        ready(&assistant).await;

        assistant.dispatch("youtube aç").await;

        assert_eq!(
            assistant.display.last_label().as_deref(),
            Some("YouTube yüklü değil")
        );
        assert!(assistant.launcher.started.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn query_error_speaks_could_not_open() {
        let assistant = assistant(LaunchBehavior::QueryError);
        ready(&assistant).await;

        assistant.dispatch("instagram aç").await;

        assert_eq!(
            assistant.display.last_label().as_deref(),
            Some("Instagram açılamadı")
        );
    }

    #[tokio::test]
    async fn start_error_speaks_could_not_open() {
        let assistant = assistant(LaunchBehavior::StartError);
        ready(&assistant).await;

        assistant.dispatch("youtube aç").await;

        assert_eq!(
            assistant.display.last_label().as_deref(),
            Some("YouTube açılamadı")
        );
    }

    #[tokio::test]
    async fn label_updates_without_speech_engine() {
        let assistant = assistant(LaunchBehavior::Installed);
        // Engine never initialized: spoken output skipped, label still set
        assistant.dispatch("youtube aç").await;

        assert_eq!(
            assistant.display.last_label().as_deref(),
            Some("YouTube açılıyor")
        );
        assert!(assistant.synthesizer.spoken.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_engine_degrades_to_label_only() {
        let assistant = VoiceAssistant::new(
            FakeRecognizer::default(),
            FakeSynthesizer {
                fail_configure: true,
                ..Default::default()
            },
            FakeLauncher::new(LaunchBehavior::Installed),
            FakeDisplay::default(),
            FakeCue,
            VoiceSettings::default(),
        );

        assistant.init_engine().await;
        assert_eq!(assistant.engine_state().await, EngineState::Failed);

        assistant.speak("merhaba").await;
        assert_eq!(assistant.display.last_label().as_deref(), Some("merhaba"));
        assert!(assistant.synthesizer.spoken.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn engine_init_happens_at_most_once() {
        let assistant = assistant(LaunchBehavior::Installed);
        assistant.init_engine().await;
        assistant.init_engine().await;
        assert_eq!(assistant.engine_state().await, EngineState::Ready);
    }

    #[tokio::test]
    async fn touch_issues_recognition_request_with_locale() {
        let assistant = assistant(LaunchBehavior::Installed);
        let token = assistant.on_touch().await;

        let requests = assistant.recognizer.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].token, token);
        assert_eq!(requests[0].locale, "tr-TR");
    }

    #[tokio::test]
    async fn overlapping_touches_issue_fresh_tokens() {
        let assistant = assistant(LaunchBehavior::Installed);
        let first = assistant.on_touch().await;
        let second = assistant.on_touch().await;
        assert_ne!(first, second);
        assert_eq!(assistant.recognizer.requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn recognizer_failure_is_swallowed() {
        let assistant = VoiceAssistant::new(
            FakeRecognizer {
                fail: true,
                ..Default::default()
            },
            FakeSynthesizer::default(),
            FakeLauncher::new(LaunchBehavior::Installed),
            FakeDisplay::default(),
            FakeCue,
            VoiceSettings::default(),
        );

        // No panic, no label change
        assistant.on_touch().await;
        assert!(assistant.display.labels.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn result_for_current_token_dispatches() {
        let assistant = assistant(LaunchBehavior::Installed);
        ready(&assistant).await;

        let token = assistant.on_touch().await;
        assistant
            .on_recognition_result(RecognitionEvent::success(
                token,
                vec!["youtube aç".to_string()],
            ))
            .await;

        assert_eq!(
            assistant.launcher.started.lock().unwrap().as_slice(),
            ["com.google.android.youtube"]
        );
    }

    #[tokio::test]
    async fn result_for_stale_token_is_no_op() {
        let assistant = assistant(LaunchBehavior::Installed);
        ready(&assistant).await;

        let stale = assistant.on_touch().await;
        let current = assistant.on_touch().await;

        assistant
            .on_recognition_result(RecognitionEvent::success(
                stale,
                vec!["youtube aç".to_string()],
            ))
            .await;

        // No label change, no launch
        assert!(assistant.display.labels.lock().unwrap().is_empty());
        assert!(assistant.launcher.started.lock().unwrap().is_empty());

        // The current session still works
        assistant
            .on_recognition_result(RecognitionEvent::success(
                current,
                vec!["instagram aç".to_string()],
            ))
            .await;
        assert_eq!(
            assistant.launcher.started.lock().unwrap().as_slice(),
            ["com.instagram.android"]
        );
    }

    #[tokio::test]
    async fn non_success_status_is_no_op() {
        let assistant = assistant(LaunchBehavior::Installed);
        ready(&assistant).await;

        let token = assistant.on_touch().await;
        assistant
            .on_recognition_result(RecognitionEvent::failure(
                token,
                RecognitionStatus::Cancelled,
            ))
            .await;

        assert!(assistant.display.labels.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_candidate_list_is_no_op() {
        let assistant = assistant(LaunchBehavior::Installed);
        ready(&assistant).await;

        let token = assistant.on_touch().await;
        assistant
            .on_recognition_result(RecognitionEvent::success(token, Vec::new()))
            .await;

        assert!(assistant.display.labels.lock().unwrap().is_empty());
        assert!(assistant.launcher.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_result_delivery_is_no_op() {
        let assistant = assistant(LaunchBehavior::Installed);
        ready(&assistant).await;

        let token = assistant.on_touch().await;
        let event = RecognitionEvent::success(token, vec!["youtube aç".to_string()]);
        assistant.on_recognition_result(event.clone()).await;
        assistant.on_recognition_result(event).await;

        // Dispatched exactly once
        assert_eq!(assistant.launcher.started.lock().unwrap().len(), 1);
    }
}
