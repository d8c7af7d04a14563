//! Static views and inline failure markup

use crate::error::ViewError;
use crate::html::{escape, CHARSET_META};

/// Processing instruction shown to users whose document declares no stylesheet
pub const STYLESHEET_EXAMPLE: &str = r#"<?xml-stylesheet type="text/xsl" href="your_style.xsl"?>"#;

/// Content shown when no document is open
pub const WELCOME_HTML: &str = r#"<div class="xslview-welcome" style="text-align:center; color:#888; padding:40px 0;">
<h2>XML report viewer</h2>
<p>Open or drop an .xml report that declares an XSLT stylesheet.</p>
<p>Rendered reports can be selected and copied like any web page.</p>
</div>"#;

impl ViewError {
    /// Inline markup describing this failure, ready to drop into a content area
    pub fn to_html(&self) -> String {
        let kind = self.kind();
        let detail = match self {
            ViewError::NoStylesheetDeclared { .. } => {
                format!("<pre>{}</pre>", escape(STYLESHEET_EXAMPLE))
            }
            ViewError::StylesheetMissing { href, path } => format!(
                "<pre>declared: {}\nresolved: {}</pre>",
                escape(href),
                escape(&path.display().to_string())
            ),
            _ => String::new(),
        };

        format!(
            r#"<div class="xslview-error" data-kind="{}" style="padding:20px; color:red; font-family:Arial;"><h3>{}</h3><p>{}</p>{}</div>"#,
            kind.as_str(),
            escape(kind.title()),
            escape(&self.to_string()),
            detail
        )
    }
}

/// Wrap content in a complete viewer page, with an optional status line
pub fn frame(content: &str, status: Option<&str>) -> String {
    let status = status
        .map(|s| format!(r#"<div id="status">{}</div>"#, escape(s)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
{CHARSET_META}
<title>XML report viewer</title>
<style>
body {{ font-family: Arial; margin: 0; padding: 40px; background: #f5f5f5; }}
#status {{ color: #666; font-size: 12px; margin-bottom: 20px; }}
</style>
</head>
<body>
{status}
<div id="content">
{content}
</div>
</body>
</html>
"#
    )
}

/// Status line text for the document at `path`
pub fn status_line(path: &str) -> String {
    format!("Current file: {}", path.replace('\\', "/"))
}
