//! Element path tracking for the streaming parser
//!
//! Keeps the stack of currently open elements together with their
//! attribute sets, and answers "what are the attributes of the innermost
//! open element named X". Names are stored in canonical form, so lookups
//! for legacy-aliased tags always use the canonical scope name.

use psitab_common::{PsitabError, Result};
use std::collections::HashMap;

/// Attribute mapping of one element
pub type AttrMap = HashMap<String, String>;

/// One open element on the document path
#[derive(Debug, Clone)]
struct Frame {
    name: String,
    attrs: AttrMap,
}

/// Stack of open elements with innermost-by-name attribute lookup
#[derive(Debug, Default)]
pub struct PathTracker {
    frames: Vec<Frame>,
}

impl PathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an element and record it as currently open
    pub fn open(&mut self, name: impl Into<String>, attrs: AttrMap) {
        self.frames.push(Frame {
            name: name.into(),
            attrs,
        });
    }

    /// Pop the most recently opened occurrence of `name`, returning its
    /// attributes
    pub fn close(&mut self, name: &str) -> Result<AttrMap> {
        let index = self
            .frames
            .iter()
            .rposition(|frame| frame.name == name)
            .ok_or_else(|| PsitabError::NotOpen(name.to_string()))?;
        Ok(self.frames.remove(index).attrs)
    }

    /// Attributes of the innermost currently open element named `name`
    pub fn attributes_of(&self, name: &str) -> Result<&AttrMap> {
        self.frames
            .iter()
            .rev()
            .find(|frame| frame.name == name)
            .map(|frame| &frame.attrs)
            .ok_or_else(|| PsitabError::NotOpen(name.to_string()))
    }

    /// Whether any element named `name` is currently open
    pub fn is_open(&self, name: &str) -> bool {
        self.frames.iter().any(|frame| frame.name == name)
    }

    /// Names of the open elements, outermost first
    pub fn names(&self) -> Vec<&str> {
        self.frames.iter().map(|frame| frame.name.as_str()).collect()
    }

    /// Name of the innermost open element, if any
    pub fn innermost_name(&self) -> Option<&str> {
        self.frames.last().map(|frame| frame.name.as_str())
    }

    /// Name and attributes of the innermost open element, if any
    pub fn innermost(&self) -> Option<(&str, &AttrMap)> {
        self.frames
            .last()
            .map(|frame| (frame.name.as_str(), &frame.attrs))
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Drop every open frame, typically leftovers of an aborted document
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
