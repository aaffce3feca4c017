use crate::constant::STATUS_TIMEOUT_SECS;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// A short-lived notice shown in the title bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    shown_at: Instant,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, StatusKind::Success, Instant::now())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, StatusKind::Error, Instant::now())
    }

    fn new(text: impl Into<String>, kind: StatusKind, shown_at: Instant) -> Self {
        Self {
            text: text.into(),
            kind,
            shown_at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= Duration::from_secs(STATUS_TIMEOUT_SECS)
    }

    /// Time left before the message should disappear.
    pub fn remaining(&self, now: Instant) -> Duration {
        Duration::from_secs(STATUS_TIMEOUT_SECS)
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}

impl<T: Into<String>, E: std::fmt::Display> From<Result<T, E>> for StatusMessage {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(text) => Self::success(text),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

/// Holds at most one message; a newer one replaces the old.
#[derive(Debug, Default)]
pub struct StatusLine {
    current: Option<StatusMessage>,
}

impl StatusLine {
    pub fn set(&mut self, message: StatusMessage) {
        self.current = Some(message);
    }

    /// The live message, clearing it once expired.
    pub fn current(&mut self, now: Instant) -> Option<&StatusMessage> {
        if self.current.as_ref().is_some_and(|m| m.is_expired(now)) {
            self.current = None;
        }
        self.current.as_ref()
    }
}
