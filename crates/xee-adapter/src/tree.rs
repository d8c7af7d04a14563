//! XmlTree implementation for xot

use xot::{Node, Xot};
use xslview_traits::{
    error::{Error, Result},
    tree::XmlTree,
};

use crate::prepare::OutputMethod;

/// Wrapper around Xot that implements XmlTree trait
#[derive(Debug)]
pub struct XotTreeWrapper {
    pub(crate) xot: Xot,
}

impl XotTreeWrapper {
    /// Create a new XotTreeWrapper
    pub fn new() -> Self {
        Self { xot: Xot::new() }
    }

    pub(crate) fn serialize_node(&self, node: Node) -> Result<String> {
        self.xot
            .to_string(node)
            .map_err(|e| Error::Serialize(e.to_string()))
    }

    /// Serialize one node of a transformation result.
    ///
    /// Result nodes may have no parent, which xot's serializers cannot take
    /// for text, so text is escaped here and documents are split into their
    /// children. Elements go through the HTML5 serializer unless `method`
    /// asks for XML or text.
    pub(crate) fn serialize_result(&mut self, node: Node, method: OutputMethod) -> Result<String> {
        if let Some(text) = self.xot.text_str(node) {
            return Ok(escape_text(text));
        }
        if self.xot.is_document(node) {
            let children: Vec<Node> = self.xot.children(node).collect();
            let mut out = String::new();
            for child in children {
                out.push_str(&self.serialize_result(child, method)?);
            }
            return Ok(out);
        }

        match method {
            OutputMethod::Text => Ok(escape_text(&self.xot.string_value(node))),
            OutputMethod::Html if self.xot.is_element(node) => {
                let html = self
                    .xot
                    .html5()
                    .to_string(node)
                    .map_err(|e| Error::Serialize(e.to_string()))?;
                Ok(match html.strip_prefix("<!DOCTYPE html>") {
                    Some(rest) => rest.to_string(),
                    None => html,
                })
            }
            _ => self.serialize_node(node),
        }
    }
}

impl Default for XotTreeWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlTree for XotTreeWrapper {
    type Document = Node; // In xot, document is also a Node

    fn parse_xml(&mut self, xml: &str) -> Result<Self::Document> {
        self.xot
            .parse(xml)
            .map_err(|e| Error::XmlParse(e.to_string()))
    }

    fn serialize_document(&self, doc: &Self::Document) -> Result<String> {
        self.serialize_node(*doc)
    }
}

pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
