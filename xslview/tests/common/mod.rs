//! Shared fixtures for xslview tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use xslview_traits::{Error, Result, XmlTree, XsltEngine};

pub const SIMPLE_XSL: &str = r#"<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
  <xsl:template match="/">
    <b><xsl:value-of select="root/v"/></b>
  </xsl:template>
</xsl:stylesheet>"#;

pub const REPORT_XML: &str = r#"<?xml version="1.0"?><?xml-stylesheet href="t.xsl"?><root><v>5</v></root>"#;

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Writes `report.xml` + `t.xsl` into `dir` and returns the XML path
pub fn write_report(dir: &Path) -> PathBuf {
    write_file(dir, "t.xsl", SIMPLE_XSL);
    write_file(dir, "report.xml", REPORT_XML)
}

/// Tree that keeps documents as text and rejects anything containing `<broken`
#[derive(Debug, Default)]
pub struct TextTree;

impl XmlTree for TextTree {
    type Document = String;

    fn parse_xml(&mut self, xml: &str) -> Result<String> {
        if xml.contains("<broken") {
            return Err(Error::xml_parse("unexpected <broken> element"));
        }
        Ok(xml.to_string())
    }

    fn serialize_document(&self, doc: &String) -> Result<String> {
        Ok(doc.clone())
    }
}

/// Engine that renders every document as `<p>rendered</p>`
#[derive(Debug, Default)]
pub struct FixedEngine {
    tree: TextTree,
}

impl XsltEngine for FixedEngine {
    type Tree = TextTree;
    type Stylesheet = String;

    fn tree(&mut self) -> &mut TextTree {
        &mut self.tree
    }

    fn compile_xslt(&mut self, xslt: &str, _base_dir: Option<&Path>) -> Result<String> {
        Ok(xslt.to_string())
    }

    fn transform(&mut self, _stylesheet: &String, _source: &String) -> Result<String> {
        Ok("<p>rendered</p>".to_string())
    }

    fn engine_name(&self) -> &'static str {
        "fixed"
    }

    fn xslt_version(&self) -> &'static str {
        "1.0"
    }
}

/// Engine that panics while transforming.
///
/// Stylesheets mentioning `xsl:key` panic with the message xee gives for
/// features it cannot compile.
#[derive(Debug, Default)]
pub struct PanickingEngine {
    tree: TextTree,
}

impl XsltEngine for PanickingEngine {
    type Tree = TextTree;
    type Stylesheet = String;

    fn tree(&mut self) -> &mut TextTree {
        &mut self.tree
    }

    fn compile_xslt(&mut self, xslt: &str, _base_dir: Option<&Path>) -> Result<String> {
        Ok(xslt.to_string())
    }

    fn transform(&mut self, stylesheet: &String, _source: &String) -> Result<String> {
        if stylesheet.contains("xsl:key") {
            panic!(
                "called `Result::unwrap()` on an `Err` value: SpannedError {{ error: Unsupported, span: None }}"
            );
        }
        panic!("stylesheet blew up");
    }

    fn engine_name(&self) -> &'static str {
        "panicking"
    }

    fn xslt_version(&self) -> &'static str {
        "1.0"
    }
}
