//! xee engine adapter for the xslview renderer
//!
//! This adapter wraps xot (tree), the xee XSLT compiler and the xee
//! interpreter to implement the xslview-traits interfaces.

pub mod prepare;
pub mod tree;
pub mod xslt;

// Re-export main types
pub use prepare::OutputMethod;
pub use tree::XotTreeWrapper;
pub use xslt::{XeeStylesheet, XeeXsltEngine};

// Re-export key types for convenience
pub use xot::Node;
