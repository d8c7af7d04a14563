//! Structural guarantees for transform output
//!
//! Renderers get a document with an `<html>` root, a `<head>` and a UTF-8
//! charset declaration, whatever the stylesheet produced.

use std::sync::LazyLock;

use regex::Regex;

/// Charset declaration inserted when the output has none
pub const CHARSET_META: &str = r#"<meta charset="utf-8"/>"#;

static XML_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*<\?xml\s[^>]*\?>\s*").unwrap());

static HTML_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<html(?:\s[^>]*)?>").unwrap());

static HEAD_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head(?:\s[^>]*)?/?>").unwrap());

static HEAD_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</head\s*>").unwrap());

static UTF8_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s[^>]*charset\s*=\s*["']?\s*utf-?8"#).unwrap()
});

static BASE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<base[\s/>]").unwrap());

/// Give transform output an `<html>` root, a `<head>` and a UTF-8 charset.
///
/// Output without an `<html>` element is wrapped in a minimal shell. A leading
/// XML declaration is dropped. Existing charset declarations are left alone.
pub fn ensure_html_shell(output: &str) -> String {
    let body = XML_DECL.replace(output, "");

    let Some(html) = HTML_OPEN.find(&body) else {
        return format!("<html><head>{CHARSET_META}</head><body>{body}</body></html>");
    };

    let Some(head) = HEAD_OPEN.find(&body) else {
        return insert_at(&body, html.end(), &format!("<head>{CHARSET_META}</head>"));
    };

    if head.as_str().ends_with("/>") {
        let open = head.as_str().trim_end_matches("/>").trim_end();
        let replacement = format!("{open}>{CHARSET_META}</head>");
        return format!(
            "{}{}{}",
            &body[..head.start()],
            replacement,
            &body[head.end()..]
        );
    }

    let head_end = HEAD_CLOSE
        .find_at(&body, head.end())
        .map_or(body.len(), |m| m.start());
    if UTF8_CHARSET.is_match(&body[head.end()..head_end]) {
        return body.into_owned();
    }

    insert_at(&body, head.end(), CHARSET_META)
}

/// Add a `<base href>` as the first child of `<head>` unless one exists.
///
/// Used by surfaces that show the document away from its own directory, so
/// relative images and CSS still resolve.
pub fn inject_base(html: &str, base_url: &str) -> String {
    if BASE_TAG.is_match(html) {
        return html.to_string();
    }
    match HEAD_OPEN.find(html) {
        Some(head) if !head.as_str().ends_with("/>") => insert_at(
            html,
            head.end(),
            &format!(r#"<base href="{}"/>"#, escape(base_url)),
        ),
        _ => html.to_string(),
    }
}

/// Escape text for use in element content or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn insert_at(text: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..at]);
    out.push_str(insert);
    out.push_str(&text[at..]);
    out
}
