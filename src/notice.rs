use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Danger,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert-success",
            NoticeKind::Warning => "alert alert-warning",
            NoticeKind::Danger => "alert alert-danger",
        }
    }
}

pub const BANNER_LIFETIME: Duration = Duration::from_secs(3);

/// A message that stops showing once its deadline passes.
#[derive(Clone, Debug)]
pub struct Banner {
    pub kind: NoticeKind,
    pub text: String,
    expires_at: Instant,
}

impl Banner {
    pub fn raise<S: ToString>(kind: NoticeKind, text: S, now: Instant) -> Self {
        Self {
            kind,
            text: text.to_string(),
            expires_at: now + BANNER_LIFETIME,
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        now < self.expires_at
    }

    /// Zero once expired.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}
