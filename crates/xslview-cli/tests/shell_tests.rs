//! Tests for the viewer shell and the file surface

use std::fs;
use std::io::Cursor;
use std::path::Path;

use xslview::{OpenSource, Request, Viewer};
use xslview_cli::shell::{parse_command, run, ShellCommand};
use xslview_cli::surface::FileSurface;

const SIMPLE_XSL: &str = r#"<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
  <xsl:template match="/">
    <b><xsl:value-of select="root/v"/></b>
  </xsl:template>
</xsl:stylesheet>"#;

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn run_script(surface_file: &Path, script: &str) -> (String, String) {
    let mut viewer = Viewer::new(FileSurface::new(surface_file, Vec::new()));
    let mut prompt = Vec::new();
    run(&mut viewer, Cursor::new(script.to_string()), &mut prompt).unwrap();
    let status = String::from_utf8(viewer.surface().status().clone()).unwrap();
    (status, String::from_utf8(prompt).unwrap())
}

#[test]
fn test_parse_open_keeps_quotes_for_cleaning() {
    assert_eq!(
        parse_command(r#"open "C:\reports\a b.xml""#),
        Ok(ShellCommand::Request(Request::Open(OpenSource::Path(
            r#""C:\reports\a b.xml""#.to_string()
        ))))
    );
}

#[test]
fn test_parse_open_without_path() {
    assert_eq!(parse_command("open"), Err("usage: open <path>".to_string()));
}

#[test]
fn test_parse_drop_collects_paths() {
    assert_eq!(
        parse_command("drop a.xml b.xml"),
        Ok(ShellCommand::Request(Request::Open(OpenSource::Dropped(
            vec!["a.xml".to_string(), "b.xml".to_string()]
        ))))
    );
    assert_eq!(
        parse_command("drop"),
        Ok(ShellCommand::Request(Request::Open(OpenSource::Dropped(
            Vec::new()
        ))))
    );
}

#[test]
fn test_parse_drop_keeps_quoted_spaces() {
    assert_eq!(
        parse_command(r#"drop "/data/monthly report.xml" '/tmp/b c.xml' d.xml"#),
        Ok(ShellCommand::Request(Request::Open(OpenSource::Dropped(vec![
            "/data/monthly report.xml".to_string(),
            "/tmp/b c.xml".to_string(),
            "d.xml".to_string(),
        ]))))
    );
    assert!(parse_command(r#"drop "/data/monthly report.xml"#).is_err());
}

#[test]
fn test_parse_simple_commands() {
    assert_eq!(
        parse_command("  REFRESH "),
        Ok(ShellCommand::Request(Request::Refresh))
    );
    assert_eq!(parse_command("home"), Ok(ShellCommand::Request(Request::Home)));
    assert_eq!(parse_command("quit"), Ok(ShellCommand::Request(Request::Exit)));
    assert_eq!(parse_command("?"), Ok(ShellCommand::Help));
    assert_eq!(parse_command(""), Ok(ShellCommand::Nothing));
}

#[test]
fn test_parse_unknown_command() {
    let err = parse_command("print").unwrap_err();
    assert!(err.contains("`print`"), "{err}");
}

#[test]
fn test_missing_stylesheet_declaration_shows_error_page() {
    let dir = tempfile::tempdir().unwrap();
    let xml = write(dir.path(), "plain.xml", "<root/>");
    let view = dir.path().join("view.html");

    let (status, _) = run_script(&view, &format!("open {xml}\n"));

    assert!(status.starts_with("error [no_stylesheet_declared]"), "{status}");
    let page = fs::read_to_string(&view).unwrap();
    assert!(page.contains("xslview-error"), "{page}");
    assert!(page.contains("&lt;?xml-stylesheet"), "{page}");
}

#[test]
fn test_open_renders_with_base_url() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "t.xsl", SIMPLE_XSL);
    let xml = write(
        dir.path(),
        "report.xml",
        r#"<?xml version="1.0"?><?xml-stylesheet href="t.xsl"?><root><v>5</v></root>"#,
    );
    let view = dir.path().join("view.html");

    let (status, _) = run_script(&view, &format!("open {xml}\nrefresh\n"));

    let lines: Vec<&str> = status.lines().collect();
    assert_eq!(lines.len(), 2, "{status}");
    assert!(lines.iter().all(|l| l.starts_with("Current file: ")), "{status}");
    assert!(lines[0].ends_with("report.xml"), "{status}");

    let page = fs::read_to_string(&view).unwrap();
    assert!(page.contains("<b>5</b>"), "{page}");
    assert!(page.contains("<base href=\"file://"), "{page}");
}

#[test]
fn test_home_writes_welcome_page() {
    let dir = tempfile::tempdir().unwrap();
    let view = dir.path().join("view.html");

    let (status, _) = run_script(&view, "home\n");

    assert_eq!(status, "home\n");
    let page = fs::read_to_string(&view).unwrap();
    assert!(page.contains("xslview-welcome"), "{page}");
}

#[test]
fn test_refresh_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let view = dir.path().join("view.html");

    let (status, _) = run_script(&view, "refresh\n");

    assert!(status.starts_with("error [no_active_file]"), "{status}");
}

#[test]
fn test_exit_stops_reading() {
    let dir = tempfile::tempdir().unwrap();
    let view = dir.path().join("view.html");

    let (status, prompt) = run_script(&view, "help\nexit\nhome\n");

    assert!(status.is_empty(), "{status}");
    assert!(!view.exists());
    assert!(prompt.contains("commands:"), "{prompt}");
    assert!(prompt.starts_with("> commands:"), "{prompt}");
    assert!(prompt.ends_with("leave the viewer\n> "), "{prompt}");
}

#[test]
fn test_unknown_command_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let view = dir.path().join("view.html");

    let (status, prompt) = run_script(&view, "frobnicate\nhome\n");

    assert!(prompt.contains("unknown command `frobnicate`"), "{prompt}");
    assert_eq!(status, "home\n");
}

#[test]
fn test_dropped_file_with_spaces_is_opened() {
    let dir = tempfile::tempdir().unwrap();
    let xml = write(dir.path(), "monthly report.xml", "<root/>");
    let view = dir.path().join("view.html");

    let (status, _) = run_script(&view, &format!("drop \"{xml}\" other.xml\n"));

    // the file was found and read; it only lacks a stylesheet declaration
    assert!(status.starts_with("error [no_stylesheet_declared]"), "{status}");
}

#[test]
fn test_failure_page_shows_last_rendered_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "t.xsl", SIMPLE_XSL);
    let xml = write(
        dir.path(),
        "report.xml",
        r#"<?xml version="1.0"?><?xml-stylesheet href="t.xsl"?><root><v>5</v></root>"#,
    );
    let view = dir.path().join("view.html");

    run_script(&view, &format!("open {xml}\nopen missing.xml\n"));

    let page = fs::read_to_string(&view).unwrap();
    assert!(page.contains(r#"<div id="status">Current file: "#), "{page}");
    assert!(page.contains("report.xml</div>"), "{page}");
    assert!(page.contains("xslview-error"), "{page}");
}
