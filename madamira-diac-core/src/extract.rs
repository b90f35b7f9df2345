//! Streaming extraction of diacritized sentences from a MADAMIRA response
//!
//! The response document scales with the size of the input batch, so it is
//! never materialized as a tree. [`Sentences`] pull-parses the byte stream
//! and yields one diacritized sentence per `out_seg` element as soon as that
//! segment closes.
//!
//! Three element kinds drive the state machine, matched by local name so any
//! namespace prefix on the response is tolerated:
//!
//! - `out_seg` opens a segment (clearing the token accumulator) and yields
//!   the accumulated tokens, joined by single spaces, when it closes.
//! - `morph_feature_set` carries a candidate diacritized form in its `diac`
//!   attribute; the most recently seen value is remembered.
//! - `svm_prediction` commits the remembered diacritic as the next token of
//!   the open segment.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};

/// Start extracting sentences from a response byte stream.
///
/// The returned iterator is lazy and finite; it is consumed by iteration and
/// cannot be restarted. Malformed XML surfaces as an `Err` item, after which
/// iteration ends. Segments that closed before the malformed region may
/// already have been yielded.
pub fn extract<R: BufRead>(reader: R) -> Sentences<R> {
    Sentences {
        reader: Reader::from_reader(reader),
        buf: Vec::new(),
        tokens: Vec::new(),
        diac: String::new(),
        depth: 0,
        done: false,
    }
}

/// Lazy iterator over the diacritized sentences of one response stream.
pub struct Sentences<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    tokens: Vec<String>,
    diac: String,
    depth: usize,
    done: bool,
}

impl<R: BufRead> Sentences<R> {
    fn diac_attribute(element: &BytesStart) -> Result<String> {
        match element.try_get_attribute("diac")? {
            Some(attr) => Ok(attr.unescape_value()?.into_owned()),
            None => Ok(String::new()),
        }
    }

    fn step(&mut self) -> Result<Option<String>> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => {
                    self.depth += 1;
                    match e.local_name().as_ref() {
                        b"out_seg" => self.tokens.clear(),
                        b"morph_feature_set" => self.diac = Self::diac_attribute(&e)?,
                        _ => {}
                    }
                }
                Event::Empty(e) => match e.local_name().as_ref() {
                    // <out_seg/> opens and closes at once: an empty sentence.
                    b"out_seg" => {
                        self.tokens.clear();
                        return Ok(Some(String::new()));
                    }
                    b"morph_feature_set" => self.diac = Self::diac_attribute(&e)?,
                    b"svm_prediction" => self.tokens.push(self.diac.clone()),
                    _ => {}
                },
                Event::End(e) => {
                    self.depth = self.depth.saturating_sub(1);
                    match e.local_name().as_ref() {
                        b"out_seg" => return Ok(Some(self.tokens.join(" "))),
                        b"svm_prediction" => self.tokens.push(self.diac.clone()),
                        _ => {}
                    }
                }
                Event::Eof => {
                    if self.depth > 0 {
                        return Err(Error::Truncated(self.depth));
                    }
                    return Ok(None);
                }
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for Sentences<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.step() {
            Ok(Some(sentence)) => Some(Ok(sentence)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
