//! Generic attributed tree for syndication documents.
//!
//! Elements are addressed by their qualified name (`yt:videoId`,
//! `media:group`). The tree keeps the loose shapes feed documents come in:
//! a text-only element collapses to [`XmlValue::Text`], an element with
//! attributes or children stays an [`XmlValue::Element`], and siblings that
//! share a name are gathered into one [`XmlValue::List`]. Callers smooth those
//! shapes over with [`pick_text`] and [`as_slice`].

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::FeedError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlValue {
    /// Element with neither attributes nor children.
    Text(String),
    Element(XmlElement),
    /// Repeated sibling elements, in document order.
    List(Vec<XmlValue>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    attributes: Vec<(String, String)>,
    children: Vec<(String, XmlValue)>,
    text: Option<String>,
}

impl XmlElement {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlValue> {
        self.children
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Follows `path` one child name at a time. Stops at lists.
    #[must_use]
    pub fn path(&self, path: &[&str]) -> Option<&XmlValue> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.child(first)?, |value, name| value.get(name))
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn insert(&mut self, name: String, value: XmlValue) {
        let Some(index) = self.children.iter().position(|(key, _)| *key == name) else {
            self.children.push((name, value));
            return;
        };

        match &mut self.children[index].1 {
            XmlValue::List(items) => items.push(value),
            single => {
                let first = std::mem::replace(single, XmlValue::List(Vec::new()));
                *single = XmlValue::List(vec![first, value]);
            }
        }
    }
}

impl XmlValue {
    /// Child element by name; `None` for text nodes and lists.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&XmlValue> {
        match self {
            XmlValue::Element(element) => element.child(name),
            XmlValue::Text(_) | XmlValue::List(_) => None,
        }
    }

    /// Attribute by name; `None` for text nodes and lists.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            XmlValue::Element(element) => element.attribute(name),
            XmlValue::Text(_) | XmlValue::List(_) => None,
        }
    }
}

/// Text content of a node that may be bare text or an element wrapping text.
///
/// Returns `None` for absent nodes, lists, and elements without text.
#[must_use]
pub fn pick_text(value: Option<&XmlValue>) -> Option<&str> {
    match value? {
        XmlValue::Text(text) => Some(text.as_str()),
        XmlValue::Element(element) => element.text(),
        XmlValue::List(_) => None,
    }
}

/// Views a node that may be absent, single, or repeated as a slice.
///
/// An empty text node counts as absent.
#[must_use]
pub fn as_slice(value: Option<&XmlValue>) -> &[XmlValue] {
    match value {
        None => &[],
        Some(XmlValue::Text(text)) if text.is_empty() => &[],
        Some(XmlValue::List(items)) => items.as_slice(),
        Some(single) => std::slice::from_ref(single),
    }
}

/// An element still being read.
struct Frame {
    name: String,
    element: XmlElement,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self, FeedError> {
        let mut element = XmlElement::default();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            element,
            text: String::new(),
        })
    }

    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn close(self) -> (String, XmlValue) {
        let Frame {
            name,
            mut element,
            text,
        } = self;

        let value = if element.attributes.is_empty() && element.children.is_empty() {
            XmlValue::Text(text)
        } else {
            element.text = (!text.is_empty()).then_some(text);
            XmlValue::Element(element)
        };
        (name, value)
    }
}

/// Parse an XML document into a tree.
///
/// The returned element is the document node: its single child is the root
/// element, so an Atom feed is reached with `document.child("feed")`.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] for markup quick-xml rejects (mismatched tags,
/// bad attributes, bad escapes) and [`FeedError::Malformed`] for documents
/// with unclosed elements or no root element.
pub fn parse_document(xml: &str) -> Result<XmlElement, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut document = XmlElement::default();
    let mut open: Vec<Frame> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => open.push(Frame::open(&e)?),
            Event::Empty(e) => {
                let (name, value) = Frame::open(&e)?.close();
                match open.last_mut() {
                    Some(parent) => parent.element.insert(name, value),
                    None => document.insert(name, value),
                }
            }
            Event::Text(e) => {
                if let Some(frame) = open.last_mut() {
                    frame.push_text(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(frame) = open.last_mut() {
                    frame.push_text(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::End(_) => {
                let Some(frame) = open.pop() else {
                    return Err(FeedError::Malformed("unexpected closing tag".to_string()));
                };
                let (name, value) = frame.close();
                match open.last_mut() {
                    Some(parent) => parent.element.insert(name, value),
                    None => document.insert(name, value),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(frame) = open.last() {
        return Err(FeedError::Malformed(format!(
            "unclosed element <{}>",
            frame.name
        )));
    }

    if document.children.is_empty() {
        return Err(FeedError::Malformed("document has no root element".to_string()));
    }

    Ok(document)
}
