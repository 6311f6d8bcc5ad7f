//! Clipboard access
//!
//! The native system clipboard is tried first. When no display server is
//! reachable (SSH sessions, bare consoles) the text is handed to the terminal
//! emulator with an OSC 52 escape sequence instead.

use arboard::Clipboard;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{self, Stdout, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),

    #[error("{primary}; fallback also failed: {fallback}")]
    AllFailed {
        primary: Box<ClipboardError>,
        fallback: Box<ClipboardError>,
    },
}

/// Something that can place text on the system clipboard
pub trait ClipboardSink {
    fn name(&self) -> &'static str;
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard through arboard
#[derive(Debug, Default)]
pub struct NativeClipboard;

impl ClipboardSink for NativeClipboard {
    fn name(&self) -> &'static str {
        "native"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

/// Terminal clipboard via the OSC 52 escape sequence
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl Osc52Clipboard<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writer.write_all(osc52_sequence(text).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// `ESC ] 52 ; c ; <base64> BEL` targets the system clipboard selection
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Copy through `primary`, falling back to `fallback` if it fails.
///
/// Returns the name of the sink that accepted the text.
pub fn copy_with_fallback(
    text: &str,
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
) -> Result<&'static str, ClipboardError> {
    match primary.set_text(text) {
        Ok(()) => Ok(primary.name()),
        Err(primary_err) => {
            tracing::warn!(
                sink = primary.name(),
                error = %primary_err,
                "primary clipboard failed, trying {}",
                fallback.name()
            );
            match fallback.set_text(text) {
                Ok(()) => Ok(fallback.name()),
                Err(fallback_err) => Err(ClipboardError::AllFailed {
                    primary: Box::new(primary_err),
                    fallback: Box::new(fallback_err),
                }),
            }
        }
    }
}
