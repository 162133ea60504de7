//! Streaming PSI MI XML parser
//!
//! Consumes one forward pass of element events per document, with no
//! backtracking and no document object model. Each completed element is
//! resolved against the current path to decide which relation it feeds
//! and whether the relationship it documents is implicit or explicit.
//!
//! PSI MI XML files can provide separate experiment, interaction and
//! interactor lists, cross-linked through `*Ref` elements, or nest the
//! experiment and interactor definitions directly inside interactions.
//! Both forms are captured; nesting makes the relationship implicit.
//!
//! quick-xml never loads external DTDs or resolves external entities,
//! so untrusted documents cannot trigger any fetch.

pub mod content;
pub mod extract;
pub mod identity;
pub mod path;
pub mod scope;

pub use extract::{Record, Relation};
pub use path::AttrMap;

use psitab_common::{PsitabError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

use crate::writer::RecordSink;

/// Event-driven converter from PSI MI XML to relation records.
///
/// One instance drives a whole batch: transient identifier counters
/// persist across documents so synthesized identifiers never collide
/// within the same output tables.
#[derive(Debug, Default)]
pub struct PsiParser {
    path: path::PathTracker,
    content: content::ContentBuffer,
    identifiers: identity::IdentityAssigner,
}

impl PsiParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one file, appending every extracted record to `sink`
    pub fn parse_file<S: RecordSink>(&mut self, file: &Path, sink: &mut S) -> Result<()> {
        let handle = std::fs::File::open(file)?;
        self.parse_reader(std::io::BufReader::new(handle), sink)
    }

    /// Parse a document from any buffered reader
    pub fn parse_reader<R: BufRead, S: RecordSink>(
        &mut self,
        reader: R,
        sink: &mut S,
    ) -> Result<()> {
        // A document that aborted mid-element leaves open frames and
        // buffered text behind; the next document must not inherit
        // them. Identifier counters do carry over.
        self.path.clear();
        self.content.clear();

        let mut xml = Reader::from_reader(reader);
        let mut buf = Vec::new();

        loop {
            match xml.read_event_into(&mut buf) {
                Ok(Event::Start(ref element)) => {
                    self.handle_start(element)?;
                },
                Ok(Event::Empty(ref element)) => {
                    // A self-closing tag opens and immediately closes
                    let name = self.handle_start(element)?;
                    self.handle_end(&name, sink)?;
                },
                Ok(Event::Text(ref text)) => {
                    let chunk = text
                        .unescape()
                        .map_err(|e| PsitabError::Xml(e.to_string()))?;
                    self.content.append(&self.path.names(), &chunk);
                },
                Ok(Event::CData(ref cdata)) => {
                    let chunk = String::from_utf8_lossy(cdata);
                    self.content.append(&self.path.names(), &chunk);
                },
                Ok(Event::End(ref element)) => {
                    let raw = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                    let name = scope::canonical_name(&raw).to_string();
                    self.handle_end(&name, sink)?;
                },
                Ok(Event::Eof) => break,
                // Declarations, comments, processing instructions
                Ok(_) => {},
                Err(e) => return Err(PsitabError::Xml(e.to_string())),
            }
            buf.clear();
        }

        debug!(
            depth = self.path.depth(),
            drained = self.content.is_empty(),
            "Document drained"
        );
        Ok(())
    }

    /// Open an element: canonicalize its name, resolve its identifier,
    /// then push it. Returns the canonical name.
    fn handle_start(&mut self, element: &BytesStart) -> Result<String> {
        let raw = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
        let name = scope::canonical_name(&raw).to_string();

        let mut attrs = AttrMap::new();
        for attribute in element.attributes() {
            let attribute = attribute.map_err(|e| PsitabError::Xml(e.to_string()))?;
            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|e| PsitabError::Xml(e.to_string()))?
                .into_owned();
            attrs.insert(key, value);
        }

        // Identifier resolution must happen before the push so all
        // lookups against this element see the resolved id
        self.identifiers
            .resolve(&name, self.path.innermost_name(), &mut attrs);

        self.path.open(name.clone(), attrs);
        Ok(name)
    }

    /// Close an element: flush its character data, build its record
    /// while the element is still on the path, then pop it.
    fn handle_end<S: RecordSink>(&mut self, name: &str, sink: &mut S) -> Result<()> {
        let text = self.content.flush(&self.path.names());
        let record = extract::extract(&self.path, &text);
        self.path.close(name)?;

        if let Some(record) = record {
            sink.append(&record)?;
        }
        Ok(())
    }
}
