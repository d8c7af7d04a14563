//! XsltEngine implementation for xee
//!
//! Supports:
//! - XML parsing via xot
//! - XSLT 3.0 template rules and modes, which covers the common 1.0 report
//!   stylesheets once `xsl:output` and includes are handled by [`prepare`]
//! - HTML5, XML or text serialization of the result, per `xsl:output method`
//!
//! [`prepare`]: crate::prepare

use std::fmt;
use std::path::Path;

use tracing::debug;
use xee_interpreter::context::StaticContext;
use xee_interpreter::error::{Error as XeeError, SpannedError};
use xee_interpreter::interpreter::Program;
use xee_interpreter::xml::Documents;
use xee_interpreter::Namespaces;
use xot::Node;
use xslview_traits::{
    error::{Error, Result},
    xslt::XsltEngine,
};

use crate::prepare::{prepare, OutputMethod};
use crate::tree::{escape_text, XotTreeWrapper};

/// Stylesheet compiled by [`XeeXsltEngine`]
pub struct XeeStylesheet {
    source: String,
    output: OutputMethod,
    program: Program,
}

impl XeeStylesheet {
    /// The stylesheet text handed to the xee compiler, includes inlined
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn output_method(&self) -> OutputMethod {
        self.output
    }
}

impl fmt::Debug for XeeStylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XeeStylesheet")
            .field("output", &self.output)
            .field("source_len", &self.source.len())
            .finish()
    }
}

/// xee XSLT engine adapter
#[derive(Debug, Default)]
pub struct XeeXsltEngine {
    tree: XotTreeWrapper,
}

impl XeeXsltEngine {
    /// Create a new xee engine with an empty arena
    pub fn new() -> Self {
        Self::default()
    }
}

impl XsltEngine for XeeXsltEngine {
    type Tree = XotTreeWrapper;
    type Stylesheet = XeeStylesheet;

    fn tree(&mut self) -> &mut Self::Tree {
        &mut self.tree
    }

    fn compile_xslt(&mut self, xslt: &str, base_dir: Option<&Path>) -> Result<Self::Stylesheet> {
        let prepared = prepare(&mut self.tree.xot, xslt, base_dir)?;

        let namespaces = Namespaces::new(
            Namespaces::default_namespaces(),
            String::new(),
            Namespaces::FN_NAMESPACE.to_string(),
        );
        let static_context = StaticContext::from_namespaces(namespaces);
        let program =
            xee_xslt_compiler::parse(static_context, &prepared.text).map_err(compile_error)?;
        debug!(output = ?prepared.output, "stylesheet compiled");

        Ok(XeeStylesheet {
            source: prepared.text,
            output: prepared.output,
            program,
        })
    }

    fn transform(&mut self, stylesheet: &Self::Stylesheet, source: &Node) -> Result<String> {
        let mut documents = Documents::new();
        documents
            .add_root(None, *source)
            .map_err(|e| Error::xslt_transform(e.to_string()))?;

        let mut builder = stylesheet.program.dynamic_context_builder();
        builder.context_node(*source);
        builder.documents(documents);
        let context = builder.build();

        let sequence = stylesheet
            .program
            .runnable(&context)
            .many(&mut self.tree.xot)
            .map_err(|e| Error::xslt_transform(e.to_string()))?;

        let mut result = String::new();
        let mut items = 0usize;
        let mut after_atomic = false;
        for item in sequence.iter() {
            match item.to_node() {
                Ok(node) => {
                    result.push_str(&self.tree.serialize_result(node, stylesheet.output)?);
                    after_atomic = false;
                }
                Err(_) => {
                    let text = item
                        .string_value(&self.tree.xot)
                        .map_err(|e| Error::Serialize(e.to_string()))?;
                    // adjacent atomic values are separated by a space
                    if after_atomic {
                        result.push(' ');
                    }
                    result.push_str(&escape_text(&text));
                    after_atomic = true;
                }
            }
            items += 1;
        }
        debug!(items, bytes = result.len(), "xee transformation finished");

        if stylesheet.output == OutputMethod::Text {
            return Ok(format!("<pre>{result}</pre>"));
        }
        Ok(result)
    }

    fn engine_name(&self) -> &'static str {
        "xee"
    }

    fn xslt_version(&self) -> &'static str {
        "3.0"
    }
}

fn compile_error(err: SpannedError) -> Error {
    match err.error {
        XeeError::Unsupported => Error::unsupported(
            "xee compiles template rules and modes only; \
             named templates, variables, keys and similar declarations are not available",
        ),
        _ => Error::xslt_compile(err.to_string()),
    }
}
