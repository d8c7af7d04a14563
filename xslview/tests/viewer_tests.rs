//! Request dispatch tests with a recording surface

mod common;

use std::io;
use std::ops::ControlFlow;

use common::{write_file, write_report, FixedEngine};
use xslview::{
    FailureKind, OpenSource, OutcomeReport, OutcomeStatus, Request, Session, SessionState,
    Surface, TransformResult, Viewer,
};

#[derive(Debug, PartialEq, Eq)]
enum Shown {
    Document(String),
    Failure(FailureKind),
    Welcome,
}

#[derive(Debug, Default)]
struct RecordingSurface {
    shown: Vec<Shown>,
}

impl Surface for RecordingSurface {
    fn render(&mut self, result: &TransformResult) -> io::Result<()> {
        self.shown.push(match result {
            Ok(doc) => Shown::Document(doc.source.to_string()),
            Err(err) => Shown::Failure(err.kind()),
        });
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.shown.push(Shown::Welcome);
        Ok(())
    }
}

fn viewer() -> Viewer<RecordingSurface, FixedEngine> {
    Viewer::with_session(Session::default(), RecordingSurface::default())
}

#[test]
fn start_without_file_shows_welcome() {
    let mut viewer = viewer();
    viewer.start(None).unwrap();
    assert_eq!(viewer.surface().shown, vec![Shown::Welcome]);
}

#[test]
fn start_with_file_opens_it() {
    let dir = tempfile::tempdir().unwrap();
    let xml = write_report(dir.path());
    let mut viewer = viewer();

    viewer.start(Some(xml.to_str().unwrap())).unwrap();
    assert_eq!(
        viewer.surface().shown,
        vec![Shown::Document(xml.display().to_string())]
    );
    assert_eq!(viewer.session().state(), SessionState::Active);
}

#[test]
fn start_with_bad_file_shows_failure() {
    let mut viewer = viewer();
    viewer.start(Some("notes.txt")).unwrap();
    assert_eq!(
        viewer.surface().shown,
        vec![Shown::Failure(FailureKind::InvalidInput)]
    );
}

#[test]
fn drop_opens_only_first_file() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_report(dir.path());
    let second = write_file(dir.path(), "other.xml", common::REPORT_XML);
    let mut viewer = viewer();

    let flow = viewer
        .handle(Request::Open(OpenSource::Dropped(vec![
            first.display().to_string(),
            second.display().to_string(),
        ])))
        .unwrap();

    assert_eq!(flow, ControlFlow::Continue(()));
    assert_eq!(
        viewer.surface().shown,
        vec![Shown::Document(first.display().to_string())]
    );
}

#[test]
fn empty_drop_is_invalid_input() {
    let mut viewer = viewer();
    viewer
        .handle(Request::Open(OpenSource::Dropped(Vec::new())))
        .unwrap();

    assert_eq!(
        viewer.surface().shown,
        vec![Shown::Failure(FailureKind::InvalidInput)]
    );
    assert_eq!(viewer.session().state(), SessionState::Idle);
}

#[test]
fn refresh_without_file_shows_failure() {
    let mut viewer = viewer();
    viewer.handle(Request::Refresh).unwrap();
    assert_eq!(
        viewer.surface().shown,
        vec![Shown::Failure(FailureKind::NoActiveFile)]
    );
}

#[test]
fn home_resets_session_and_shows_welcome() {
    let dir = tempfile::tempdir().unwrap();
    let xml = write_report(dir.path());
    let mut viewer = viewer();

    viewer
        .handle(Request::Open(OpenSource::Path(xml.display().to_string())))
        .unwrap();
    viewer.handle(Request::Home).unwrap();

    assert_eq!(viewer.session().state(), SessionState::Idle);
    assert_eq!(viewer.surface().shown.last(), Some(&Shown::Welcome));
}

#[test]
fn exit_breaks_without_rendering() {
    let mut viewer = viewer();
    let flow = viewer.handle(Request::Exit).unwrap();
    assert_eq!(flow, ControlFlow::Break(()));
    assert!(viewer.surface().shown.is_empty());
}

#[test]
fn report_summarises_rendered_document() {
    let dir = tempfile::tempdir().unwrap();
    let xml = write_report(dir.path());
    let mut session = Session::<FixedEngine>::default();

    let report = OutcomeReport::from_result(&session.open(xml.to_str().unwrap()));
    assert_eq!(report.status, OutcomeStatus::Rendered);
    assert_eq!(report.stylesheet_href.as_deref(), Some("t.xsl"));
    assert!(report.kind.is_none());

    let json = report.to_json();
    assert!(json.contains(r#""status": "rendered""#), "{json}");
    assert!(!json.contains("\"kind\""));
    assert!(report.to_text().starts_with("rendered "));
}

#[test]
fn report_summarises_failure() {
    let session = Session::<FixedEngine>::default();

    let report = OutcomeReport::from_result(&session.refresh());
    assert_eq!(report.status, OutcomeStatus::Failed);
    assert_eq!(report.kind, Some(FailureKind::NoActiveFile));

    let json = report.to_json();
    assert!(json.contains(r#""kind": "no_active_file""#), "{json}");
    assert!(report.to_text().starts_with("failed [no_active_file]"));
}
