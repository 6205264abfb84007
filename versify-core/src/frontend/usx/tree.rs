//! Owned element tree built from quick-xml events

use crate::error::{ConvertError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Node of the element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element with attributes and children
    Element(Element),
    /// Unescaped character data
    Text(String),
}

/// XML element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Qualified tag name
    pub name: String,
    /// Attributes in source order
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Value of an attribute, if present
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }
}

/// Parse a document into its root element
///
/// Fails on malformed XML, on unclosed elements, and on documents with no
/// root element. Whitespace is preserved; text outside the root is ignored.
pub fn parse_document(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| ConvertError::Xml {
            position: reader.buffer_position(),
            message: e.to_string(),
        })?;

        match event {
            Event::Start(ref e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(xml_error(&reader, "multiple root elements"));
                }
                stack.push(element_from_start(&reader, e)?);
            }
            Event::Empty(ref e) => {
                let element = element_from_start(&reader, e)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None if root.is_none() => root = Some(element),
                    None => return Err(xml_error(&reader, "multiple root elements")),
                }
            }
            Event::End(_) => {
                let Some(element) = stack.pop() else {
                    return Err(xml_error(&reader, "unexpected closing tag"));
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None => root = Some(element),
                }
            }
            Event::Text(ref e) => {
                if let Some(parent) = stack.last_mut() {
                    let text = e.unescape().map_err(|err| ConvertError::Xml {
                        position: reader.buffer_position(),
                        message: err.to_string(),
                    })?;
                    parent.children.push(Node::Text(text.into_owned()));
                }
            }
            Event::CData(ref e) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(e).into_owned();
                    parent.children.push(Node::Text(text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(xml_error(
            &reader,
            &format!("unexpected end of document inside <{}>", open.name),
        ));
    }

    root.ok_or(ConvertError::MissingRoot {
        expected: "usx",
        found: "no root element".to_string(),
    })
}

fn element_from_start(reader: &Reader<&[u8]>, start: &BytesStart) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| ConvertError::Xml {
            position: reader.buffer_position(),
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| ConvertError::Xml {
            position: reader.buffer_position(),
            message: e.to_string(),
        })?;
        attributes.push((key, value.into_owned()));
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn xml_error(reader: &Reader<&[u8]>, message: &str) -> ConvertError {
    ConvertError::Xml {
        position: reader.buffer_position(),
        message: message.to_string(),
    }
}
