//! Error types for XML engine operations

/// Result type for XML engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by an engine while parsing, compiling or transforming
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source document could not be parsed
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// Stylesheet could not be parsed or compiled
    #[error("XSLT compilation error: {0}")]
    XsltCompile(String),

    /// Stylesheet failed while being applied
    #[error("XSLT transformation error: {0}")]
    XsltTransform(String),

    /// Result tree could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Stylesheet uses something the engine cannot run
    #[error("unsupported XSLT feature: {0}")]
    Unsupported(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new XML parsing error
    pub fn xml_parse<S: Into<String>>(msg: S) -> Self {
        Error::XmlParse(msg.into())
    }

    /// Create a new XSLT compilation error
    pub fn xslt_compile<S: Into<String>>(msg: S) -> Self {
        Error::XsltCompile(msg.into())
    }

    /// Create a new unsupported-feature error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::Unsupported(msg.into())
    }

    /// Create a new XSLT transformation error
    pub fn xslt_transform<S: Into<String>>(msg: S) -> Self {
        Error::XsltTransform(msg.into())
    }
}
