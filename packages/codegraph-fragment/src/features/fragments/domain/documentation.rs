//! XML documentation comments
//!
//! A documentation block is either a run of `///` comments on consecutive
//! lines or a single `/** ... */` comment. Its content, with the comment
//! markers stripped, is read as an XML fragment.

use super::syntax_node::SyntaxNode;
use crate::shared::models::Span;

/// One node of documentation XML content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    CData(String),
    Comment(String),
}

/// `<param name="x">text</param>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
    /// Written as `<see cref="X"/>`
    pub self_closing: bool,
}

impl XmlNode {
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated character data of this node and everything below it
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            XmlNode::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            XmlNode::Text(text) | XmlNode::CData(text) => out.push_str(text),
            XmlNode::Comment(_) => {}
        }
    }
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

/// A single documentation block and its parsed content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationComment {
    comments: Vec<SyntaxNode>,
    xml: String,
    content: Vec<XmlNode>,
}

impl DocumentationComment {
    pub fn new(comments: Vec<SyntaxNode>, xml: String, content: Vec<XmlNode>) -> Self {
        Self {
            comments,
            xml,
            content,
        }
    }

    /// The comment trivia making up this block, in source order
    pub fn comments(&self) -> &[SyntaxNode] {
        &self.comments
    }

    /// Source text of the block, markers included
    pub fn text(&self) -> &str {
        match (self.comments.first(), self.comments.last()) {
            (Some(first), Some(last)) => first
                .source()
                .get(first.byte_range().start..last.byte_range().end)
                .unwrap_or(""),
            _ => "",
        }
    }

    pub fn span(&self) -> Span {
        match (self.comments.first(), self.comments.last()) {
            (Some(first), Some(last)) => first.span().merge(&last.span()),
            _ => Span::zero(),
        }
    }

    /// Content with comment markers stripped, as handed to the XML reader
    pub fn xml(&self) -> &str {
        &self.xml
    }

    pub fn content(&self) -> &[XmlNode] {
        &self.content
    }

    pub fn into_content(self) -> Vec<XmlNode> {
        self.content
    }

    /// First top-level element with the given tag name
    pub fn element(&self, name: &str) -> Option<&XmlElement> {
        self.content
            .iter()
            .filter_map(XmlNode::as_element)
            .find(|element| element.name == name)
    }

    /// Trimmed text of `<summary>`
    pub fn summary(&self) -> Option<String> {
        self.element("summary")
            .map(|summary| summary.text_content().trim().to_string())
    }

    /// `(name, description)` for each `<param>`
    pub fn params(&self) -> Vec<(String, String)> {
        self.content
            .iter()
            .filter_map(XmlNode::as_element)
            .filter(|element| element.name == "param")
            .map(|param| {
                (
                    param.attribute("name").unwrap_or_default().to_string(),
                    param.text_content().trim().to_string(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str, children: Vec<XmlNode>) -> XmlNode {
        let mut element = XmlElement::new(name);
        element.children = children;
        XmlNode::Element(element)
    }

    #[test]
    fn test_text_content_skips_comments() {
        let node = element(
            "summary",
            vec![
                XmlNode::Text("a ".into()),
                XmlNode::Comment("ignored".into()),
                element("c", vec![XmlNode::Text("b".into())]),
            ],
        );
        assert_eq!(node.text_content(), "a b");
    }

    #[test]
    fn test_summary_and_params() {
        let mut param = XmlElement::new("param");
        param.attributes.push(("name".into(), "x".into()));
        param.children.push(XmlNode::Text(" the x ".into()));

        let doc = DocumentationComment::new(
            Vec::new(),
            String::new(),
            vec![
                XmlNode::Text(" ".into()),
                element("summary", vec![XmlNode::Text(" Adds. ".into())]),
                XmlNode::Element(param),
            ],
        );

        assert_eq!(doc.summary().as_deref(), Some("Adds."));
        assert_eq!(doc.params(), vec![("x".to_string(), "the x".to_string())]);
        assert_eq!(doc.text(), "");
        assert_eq!(doc.span(), Span::zero());
    }
}
