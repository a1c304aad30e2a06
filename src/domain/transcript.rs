//! Recognition result value objects

/// Correlation token attached to a recognition request so the
/// asynchronous result can be matched back to the request that
/// caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Create a token with an explicit value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw token value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Completion status of one recognition session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionStatus {
    /// The host's canonical "ok" value; candidates are meaningful
    Success,
    /// The session was cancelled before producing a result
    Cancelled,
    /// The host reported a failure
    Failed,
}

impl RecognitionStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// One completed (or cancelled) recognition session, as delivered by
/// a host adapter. Candidates are ordered by recognizer confidence,
/// highest first.
#[derive(Debug, Clone)]
pub struct RecognitionEvent {
    token: RequestToken,
    status: RecognitionStatus,
    candidates: Vec<String>,
}

impl RecognitionEvent {
    /// A successful session carrying transcript candidates
    pub fn success(token: RequestToken, candidates: Vec<String>) -> Self {
        Self {
            token,
            status: RecognitionStatus::Success,
            candidates,
        }
    }

    /// A session that ended without a usable result
    pub fn failure(token: RequestToken, status: RecognitionStatus) -> Self {
        Self {
            token,
            status,
            candidates: Vec::new(),
        }
    }

    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn status(&self) -> RecognitionStatus {
        self.status
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Highest-confidence candidate, if any
    pub fn top_candidate(&self) -> Option<&str> {
        self.candidates.first().map(String::as_str)
    }
}
