//! Stylesheet preparation for the xee compiler
//!
//! xee compiles template rules and modes only. Before compiling, top-level
//! serialization and whitespace declarations are taken out (the requested
//! output method is remembered) and `xsl:include` / `xsl:import` are replaced
//! by the declarations of the stylesheets they name.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use xot::{NameId, Node, Xot};
use xslview_traits::error::{Error, Result};

pub const XSLT_NAMESPACE: &str = "http://www.w3.org/1999/XSL/Transform";

const MAX_INCLUDE_DEPTH: usize = 16;

/// Serialization requested by `xsl:output method`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMethod {
    /// `html`, `xhtml`, or no `xsl:output` at all
    #[default]
    Html,
    Xml,
    Text,
}

impl OutputMethod {
    fn from_attribute(method: Option<&str>) -> Self {
        match method.map(str::trim) {
            Some("xml") => OutputMethod::Xml,
            Some("text") => OutputMethod::Text,
            _ => OutputMethod::Html,
        }
    }
}

/// Stylesheet text ready for the compiler
#[derive(Debug, Clone)]
pub(crate) struct Prepared {
    pub text: String,
    pub output: OutputMethod,
}

struct Names {
    output: NameId,
    include: NameId,
    import: NameId,
    strip_space: NameId,
    preserve_space: NameId,
    href: NameId,
    method: NameId,
}

impl Names {
    fn new(xot: &mut Xot) -> Self {
        let xsl = xot.add_namespace(XSLT_NAMESPACE);
        Self {
            output: xot.add_name_ns("output", xsl),
            include: xot.add_name_ns("include", xsl),
            import: xot.add_name_ns("import", xsl),
            strip_space: xot.add_name_ns("strip-space", xsl),
            preserve_space: xot.add_name_ns("preserve-space", xsl),
            href: xot.add_name("href"),
            method: xot.add_name("method"),
        }
    }
}

pub(crate) fn prepare(xot: &mut Xot, xslt: &str, base_dir: Option<&Path>) -> Result<Prepared> {
    let doc = xot.parse(xslt).map_err(|e| Error::xslt_compile(e.to_string()))?;
    let root = xot
        .document_element(doc)
        .map_err(|e| Error::xslt_compile(e.to_string()))?;

    let names = Names::new(xot);
    let mut expander = Expander {
        names,
        root,
        output: None,
        chain: Vec::new(),
    };
    expander.expand(xot, root, base_dir)?;

    let text = xot
        .to_string(doc)
        .map_err(|e| Error::xslt_compile(e.to_string()))?;
    Ok(Prepared {
        text,
        output: expander.output.unwrap_or_default(),
    })
}

struct Expander {
    names: Names,
    /// Document element of the main stylesheet
    root: Node,
    output: Option<OutputMethod>,
    /// Stylesheets currently being inlined, outermost first
    chain: Vec<PathBuf>,
}

impl Expander {
    fn expand(&mut self, xot: &mut Xot, stylesheet: Node, base_dir: Option<&Path>) -> Result<()> {
        // only elements: removing a node merges the text nodes around it
        let children: Vec<Node> = xot
            .children(stylesheet)
            .filter(|node| xot.is_element(*node))
            .collect();
        for child in children {
            let Some(name) = xot.element(child).map(|e| e.name()) else {
                continue;
            };

            if name == self.names.output {
                if self.output.is_none() {
                    let method = xot.get_attribute(child, self.names.method);
                    self.output = Some(OutputMethod::from_attribute(method));
                }
                remove(xot, child)?;
            } else if name == self.names.strip_space || name == self.names.preserve_space {
                remove(xot, child)?;
            } else if name == self.names.include || name == self.names.import {
                self.inline(xot, child, base_dir)?;
            }
        }
        Ok(())
    }

    fn inline(&mut self, xot: &mut Xot, reference: Node, base_dir: Option<&Path>) -> Result<()> {
        let href = xot
            .get_attribute(reference, self.names.href)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::xslt_compile("xsl:include or xsl:import without href"))?;
        let path = match base_dir {
            Some(dir) => dir.join(&href),
            None => PathBuf::from(&href),
        };
        let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());

        if self.chain.contains(&key) {
            return Err(Error::xslt_compile(format!(
                "stylesheet {} includes itself",
                path.display()
            )));
        }
        if self.chain.len() >= MAX_INCLUDE_DEPTH {
            return Err(Error::xslt_compile(format!(
                "stylesheets nested deeper than {MAX_INCLUDE_DEPTH} levels at {}",
                path.display()
            )));
        }

        let text = fs::read_to_string(&path).map_err(|e| {
            Error::xslt_compile(format!("cannot read {href} ({}): {e}", path.display()))
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        let doc = xot
            .parse(text)
            .map_err(|e| Error::xslt_compile(format!("{href}: {e}")))?;
        let included = xot
            .document_element(doc)
            .map_err(|e| Error::xslt_compile(format!("{href}: {e}")))?;
        debug!(href = %href, path = %path.display(), "inlining stylesheet");

        self.chain.push(key);
        let expanded = self.expand(xot, included, path.parent());
        self.chain.pop();
        expanded?;

        // prefixes used inside XPath expressions are not visible to the
        // serializer, so carry every declaration up to the main stylesheet
        for (prefix, namespace) in xot.namespace_declarations(included) {
            if xot.get_namespace(self.root, prefix).is_none() {
                xot.set_namespace(self.root, prefix, namespace);
            }
        }

        let declarations: Vec<Node> = xot
            .children(included)
            .filter(|node| xot.is_element(*node))
            .collect();
        for declaration in declarations {
            let copy = xot.clone_with_prefixes(declaration);
            xot.insert_before(reference, copy)
                .map_err(|e| Error::xslt_compile(e.to_string()))?;
        }
        remove(xot, reference)
    }
}

fn remove(xot: &mut Xot, node: Node) -> Result<()> {
    xot.remove(node)
        .map_err(|e| Error::xslt_compile(e.to_string()))
}
