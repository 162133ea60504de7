//! Per-path character data buffering
//!
//! Character data can arrive in several chunks between an element's open
//! and close, and the same element name can recur at different depths
//! (nested `names` elements, for example). Buffering against the full
//! open-element path keeps those instances separate and guarantees each
//! element's accumulated text is delivered exactly once, on close.

use std::collections::HashMap;

// Unit separator, not a valid character in an XML name.
const PATH_SEPARATOR: &str = "\u{1f}";

/// Accumulates character data keyed by the full open-element path
#[derive(Debug, Default)]
pub struct ContentBuffer {
    buffers: HashMap<String, String>,
}

impl ContentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(path: &[&str]) -> String {
        path.join(PATH_SEPARATOR)
    }

    /// Append a chunk of character data for the current path.
    /// Text outside any element (prolog whitespace) is dropped.
    pub fn append(&mut self, path: &[&str], text: &str) {
        if path.is_empty() || text.is_empty() {
            return;
        }
        self.buffers
            .entry(Self::key(path))
            .or_default()
            .push_str(text);
    }

    /// Remove and return the accumulated text for the exact path,
    /// trimmed of surrounding whitespace; empty for elements that
    /// received no characters
    pub fn flush(&mut self, path: &[&str]) -> String {
        self.buffers
            .remove(&Self::key(path))
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Discard all buffered text, typically leftovers of an aborted
    /// document
    pub fn clear(&mut self) {
        self.buffers.clear();
    }
}
