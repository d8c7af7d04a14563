//! Engine abstractions for the xslview renderer.
//!
//! An engine knows how to parse XML into its own tree, compile an XSLT
//! stylesheet and apply it. The renderer only talks to these traits, so a
//! backend can be swapped without touching path or session handling.

pub mod error;
pub mod tree;
pub mod xslt;

pub use error::{Error, Result};
pub use tree::XmlTree;
pub use xslt::{ExtendedXsltEngine, XsltEngine};
