//! Speech synthesis infrastructure adapters

mod espeak;
mod noop;

pub use espeak::EspeakSynthesizer;
pub use noop::NoOpSynthesizer;

use crate::application::ports::SpeechSynthesizer;

/// Create a synthesizer adapter based on whether speech is enabled
pub fn create_synthesizer(enabled: bool) -> Box<dyn SpeechSynthesizer> {
    if enabled {
        Box::new(EspeakSynthesizer::new())
    } else {
        Box::new(NoOpSynthesizer::new())
    }
}
