//! Transient copy acknowledgment.

use serde::{Deserialize, Serialize};

/// How long an acknowledgment stays visible.
pub const TOAST_DURATION_MS: u64 = 2000;

pub const COPIED_MESSAGE: &str = "Copied to clipboard";

/// A message that dismisses itself once its display window has passed.
///
/// Times are milliseconds on the caller's clock so the state stays
/// serializable and tests stay deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub shown_at_ms: u64,
    pub duration_ms: u64,
}

impl Toast {
    pub fn copied(now_ms: u64) -> Self {
        Self {
            message: COPIED_MESSAGE.to_string(),
            shown_at_ms: now_ms,
            duration_ms: TOAST_DURATION_MS,
        }
    }

    pub fn expires_at_ms(&self) -> u64 {
        self.shown_at_ms.saturating_add(self.duration_ms)
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at_ms()
    }
}
