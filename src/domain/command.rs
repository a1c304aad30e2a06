//! Command keyword table and interpretation
//!
//! The table is fixed at build time: an ordered list of
//! (keyword substring -> launch target) pairs, checked in order,
//! first match wins. Interpretation is pure and does not touch
//! any host service.

/// Initial label shown before the first interaction ("touch and speak")
pub const TOUCH_PROMPT: &str = "Dokun ve konuş";

/// Spoken when the transcript matches no keyword
pub const MSG_NOT_UNDERSTOOD: &str = "Komutu anlamadım";

/// An application that a keyword resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    package: &'static str,
    display_name: &'static str,
}

impl LaunchTarget {
    /// Package identifier used for the launch query
    pub fn package(&self) -> &str {
        self.package
    }

    /// Human-readable name used in spoken messages
    pub fn display_name(&self) -> &str {
        self.display_name
    }

    /// "{name} açılıyor" - spoken when the command is recognized
    pub fn opening_message(&self) -> String {
        format!("{} açılıyor", self.display_name)
    }

    /// "{name} yüklü değil" - spoken when no launch intent exists
    pub fn not_installed_message(&self) -> String {
        format!("{} yüklü değil", self.display_name)
    }

    /// "{name} açılamadı" - spoken when the launch query or start fails
    pub fn launch_failed_message(&self) -> String {
        format!("{} açılamadı", self.display_name)
    }
}

/// One (keyword -> target) pair
#[derive(Debug, Clone)]
struct CommandEntry {
    keyword: &'static str,
    target: LaunchTarget,
}

/// Result of interpreting one transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation<'a> {
    /// A keyword matched; speak the opening message and launch the target
    Launch(&'a LaunchTarget),
    /// No keyword matched; speak the fallback and do nothing else
    NotUnderstood,
}

/// Ordered keyword table. Order is significant: when a transcript
/// contains several keywords, the earliest entry wins unconditionally.
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    /// The built-in table of the launcher
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                CommandEntry {
                    keyword: "youtube",
                    target: LaunchTarget {
                        package: "com.google.android.youtube",
                        display_name: "YouTube",
                    },
                },
                CommandEntry {
                    keyword: "instagram",
                    target: LaunchTarget {
                        package: "com.instagram.android",
                        display_name: "Instagram",
                    },
                },
            ],
        }
    }

    /// Interpret a transcript.
    ///
    /// Normalization is lower-casing only; no trimming, no punctuation
    /// stripping. Containment check per entry, first match wins.
    pub fn interpret(&self, transcript: &str) -> Interpretation<'_> {
        let lowered = transcript.to_lowercase();
        for entry in &self.entries {
            if lowered.contains(entry.keyword) {
                return Interpretation::Launch(&entry.target);
            }
        }
        Interpretation::NotUnderstood
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}
