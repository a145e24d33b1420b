//! Clipboard backends.

use std::time::Duration;

use crate::error::Result;

/// Destination for copy actions.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, opened lazily on first write.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard for short-lived processes.
    ///
    /// On Linux the contents disappear with the owning process unless a
    /// clipboard manager takes them over, so each write blocks until another
    /// program owns the selection or `hold` elapses. Other platforms ignore
    /// `hold`.
    pub fn holding(hold: Duration) -> Self {
        Self {
            inner: None,
            hold: Some(hold),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        set_text(self.inner.insert(clipboard), text, self.hold)
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str, hold: Option<Duration>) -> Result<()> {
    use arboard::SetExtLinux;

    match hold {
        Some(hold) => {
            tracing::debug!(?hold, "Holding clipboard selection");
            clipboard
                .set()
                .wait_until(std::time::Instant::now() + hold)
                .text(text.to_owned())?;
        }
        None => clipboard.set_text(text.to_owned())?,
    }
    Ok(())
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str, _hold: Option<Duration>) -> Result<()> {
    clipboard.set_text(text.to_owned())?;
    Ok(())
}

/// In-memory clipboard that records every write.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writes.push(text.to_owned());
        Ok(())
    }
}
