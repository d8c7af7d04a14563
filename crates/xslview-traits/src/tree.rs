//! XML tree abstraction trait

use crate::error::Result;
use std::fmt::Debug;

/// Trait for XML tree implementations.
///
/// Only the operations the renderer needs are exposed: getting text into a
/// tree and getting a tree back out as text.
pub trait XmlTree {
    /// Type representing a document handle in this tree
    type Document: Clone + Debug;

    /// Parse XML from a string and return a document handle
    fn parse_xml(&mut self, xml: &str) -> Result<Self::Document>;

    /// Serialize a document to an XML string
    fn serialize_document(&self, doc: &Self::Document) -> Result<String>;
}
