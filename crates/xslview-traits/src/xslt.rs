//! XSLT engine abstraction trait

use std::path::Path;

use crate::error::Result;
use crate::tree::XmlTree;

/// Trait for XSLT transformation engines.
///
/// Engines are created per transformation and dropped afterwards, so any
/// arena or cache they hold is released together with the engine.
pub trait XsltEngine {
    /// The XML tree implementation this engine works with
    type Tree: XmlTree;

    /// Type representing a compiled stylesheet
    type Stylesheet;

    /// Get access to the underlying tree
    fn tree(&mut self) -> &mut Self::Tree;

    /// Compile an XSLT stylesheet from its source text.
    ///
    /// Relative `xsl:include` and `xsl:import` hrefs resolve against
    /// `base_dir`, or the working directory when it is `None`.
    fn compile_xslt(&mut self, xslt: &str, base_dir: Option<&Path>) -> Result<Self::Stylesheet>;

    /// Compile a stylesheet that has no location of its own
    fn compile_xslt_string(&mut self, xslt: &str) -> Result<Self::Stylesheet> {
        self.compile_xslt(xslt, None)
    }

    /// Transform a source document and serialize the principal result
    fn transform(
        &mut self,
        stylesheet: &Self::Stylesheet,
        source: &<Self::Tree as XmlTree>::Document,
    ) -> Result<String>;

    /// Short name used in logs
    fn engine_name(&self) -> &'static str;

    /// Get the XSLT version supported by this engine
    fn xslt_version(&self) -> &'static str;
}

/// Convenience operations available on every engine
pub trait ExtendedXsltEngine: XsltEngine {
    /// Parse, compile and apply in one step, all from strings
    fn transform_string(&mut self, xslt: &str, source_xml: &str) -> Result<String> {
        self.transform_with_base(xslt, None, source_xml)
    }

    /// Like [`transform_string`](Self::transform_string) for a stylesheet
    /// read from `base_dir`
    fn transform_with_base(
        &mut self,
        xslt: &str,
        base_dir: Option<&Path>,
        source_xml: &str,
    ) -> Result<String> {
        let source = self.tree().parse_xml(source_xml)?;
        let stylesheet = self.compile_xslt(xslt, base_dir)?;
        self.transform(&stylesheet, &source)
    }
}

// Blanket implementation for all XSLT engines
impl<T: XsltEngine> ExtendedXsltEngine for T {}
