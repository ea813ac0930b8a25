//! Documentation XML reader
//!
//! Documentation comments hold XML *fragments*: several roots, free text
//! between elements, and the occasional unclosed tag. The reader builds a
//! lenient tree with `quick_xml`: end-name checking is off, an end tag closes
//! the nearest open element with that name, and anything still open at the end
//! is closed implicitly.
//!
//! Reading never fails. Attributes are read HTML-style (unquoted values are
//! fine); a tag that still cannot be read is kept as text, and once the reader
//! itself gives up the rest of the input is kept as text.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::features::fragments::domain::{XmlElement, XmlNode};

/// Read an XML fragment into its top-level nodes, preserving order and
/// whitespace-only text
pub fn read_xml_fragment(xml: &str) -> Vec<XmlNode> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = false;

    let mut roots = Vec::new();
    let mut open: Vec<XmlElement> = Vec::new();
    let mut consumed = 0usize;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                debug!("Unreadable documentation XML at byte {}: {}", consumed, e);
                if let Some(rest) = xml.get(consumed..).filter(|rest| !rest.is_empty()) {
                    push_node(&mut open, &mut roots, XmlNode::Text(rest.to_string()));
                }
                break;
            }
        };
        match event {
            Event::Start(start) => match element_from(&start, false) {
                Some(element) => open.push(element),
                None => push_node(&mut open, &mut roots, raw_tag(&start, "<", ">")),
            },
            Event::Empty(start) => {
                let node = match element_from(&start, true) {
                    Some(element) => XmlNode::Element(element),
                    None => raw_tag(&start, "<", "/>"),
                };
                push_node(&mut open, &mut roots, node);
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                close_element(&mut open, &mut roots, &name);
            }
            Event::Text(text) => {
                let value = match text.unescape() {
                    Ok(value) => value.into_owned(),
                    Err(_) => String::from_utf8_lossy(&text).into_owned(),
                };
                if !value.is_empty() {
                    push_node(&mut open, &mut roots, XmlNode::Text(value));
                }
            }
            Event::CData(data) => {
                let value = String::from_utf8_lossy(&data).into_owned();
                push_node(&mut open, &mut roots, XmlNode::CData(value));
            }
            Event::Comment(comment) => {
                let value = String::from_utf8_lossy(&comment).into_owned();
                push_node(&mut open, &mut roots, XmlNode::Comment(value));
            }
            Event::Eof => break,
            // Declarations, processing instructions, doctypes
            _ => {}
        }
        consumed = usize::try_from(reader.buffer_position()).unwrap_or(xml.len());
    }

    while let Some(element) = open.pop() {
        push_node(&mut open, &mut roots, XmlNode::Element(element));
    }
    roots
}

/// `None` when the tag has no name or an attribute cannot be read
fn element_from(start: &BytesStart<'_>, self_closing: bool) -> Option<XmlElement> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    if name.is_empty() {
        return None;
    }
    let mut element = XmlElement::new(name);
    element.self_closing = self_closing;
    for attribute in start.html_attributes() {
        let attribute = attribute.ok()?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = match attribute.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attribute.value).into_owned(),
        };
        element.attributes.push((key, value));
    }
    Some(element)
}

/// A tag kept verbatim as text
fn raw_tag(start: &BytesStart<'_>, open: &str, close: &str) -> XmlNode {
    let inner: Cow<'_, str> = String::from_utf8_lossy(start);
    XmlNode::Text(format!("{open}{inner}{close}"))
}

fn push_node(open: &mut [XmlElement], roots: &mut Vec<XmlNode>, node: XmlNode) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

/// Close the innermost open element named `name`, implicitly closing anything
/// opened after it. A stray end tag is dropped.
fn close_element(open: &mut Vec<XmlElement>, roots: &mut Vec<XmlNode>, name: &str) {
    let Some(position) = open.iter().rposition(|element| element.name == name) else {
        return;
    };
    while open.len() > position {
        if let Some(element) = open.pop() {
            push_node(open, roots, XmlNode::Element(element));
        }
    }
}
