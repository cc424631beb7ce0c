//! User-visible notices raised by the adapters.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::AssistiveError;

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

const MAX_NOTICES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub raised_at: Instant,
}

/// Short queue of recent notices, oldest first.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message.into());
    }

    /// Surface an adapter failure.
    pub fn error(&mut self, err: &AssistiveError) {
        tracing::warn!("Assistive capability error: {}", err);
        self.push(NoticeLevel::Error, err.to_string());
    }

    fn push(&mut self, level: NoticeLevel, message: String) {
        if self.notices.len() == MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice {
            level,
            message,
            raised_at: Instant::now(),
        });
    }

    /// Drop notices older than `ttl`.
    pub fn expire(&mut self, ttl: Duration) {
        self.notices.retain(|n| n.raised_at.elapsed() < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}
