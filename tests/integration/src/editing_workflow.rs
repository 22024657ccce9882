//! Editing scenarios: capture, replace, undo, and wire-level commands

use std::fs;

use ide_content::{Edit, Position, Range, read_range};
use ide_core::{Command, Response, Session, dispatch};
use ide_test_utils::{ManifestSpec, TestProject};
use pretty_assertions::assert_eq;
use serde_json::json;

const MAIN: &str = "module Main exposing (main)\r\n\r\nimport Html\r\n\r\nmain =\r\n    Html.text \"hi\"";

#[test]
fn captured_text_undoes_an_edit() {
    let project = TestProject::new();
    project.write_manifest(&ManifestSpec::application());
    let file = project.write("src/Main.elm", MAIN);
    let range = Range::new(Position::new(2, 7), Position::new(5, 7)).unwrap();

    let original = read_range(&file, &range).unwrap();
    Edit::new(range, "Browser").apply(&file).unwrap();

    let edited = fs::read_to_string(&file).unwrap();
    assert_eq!(edited, "module Main exposing (main)\r\n\r\nimport Browser.text \"hi\"");

    let inserted = Range::on_line(2, 7, 7 + "Browser".chars().count() - 1).unwrap();
    Edit::new(inserted, original).apply(&file).unwrap();

    assert_eq!(fs::read_to_string(&file).unwrap(), MAIN);
}

#[test]
fn host_json_edits_apply_in_sequence() {
    let project = TestProject::new();
    project.write_manifest(&ManifestSpec::application());
    project.write("src/Main.elm", "a = 1\nb = 2\nc = 3\n");
    let session = Session::default().with_project(project.root());

    let messages = [
        json!({ "tag": "ReplaceInFile", "data": {
            "path": "src/Main.elm",
            "from": { "line": 2, "column": 4 }, "to": { "line": 2, "column": 4 },
            "replacement": "30" } }),
        json!({ "tag": "ReplaceInFile", "data": {
            "path": "src/Main.elm",
            "from": { "line": 0, "column": 0 }, "to": { "line": 1, "column": 5 },
            "replacement": "ab = 12" } }),
    ];

    for message in messages {
        let command = Command::from_json(&message.to_string()).unwrap();
        assert_eq!(dispatch(&session, command), Response::FileReplaced);
    }

    assert_eq!(
        fs::read_to_string(project.root().join("src/Main.elm")).unwrap(),
        "ab = 12\nc = 30\n"
    );
}

#[test]
fn failed_edit_keeps_every_byte() {
    let project = TestProject::new();
    project.write_manifest(&ManifestSpec::application());
    let file = project.write("src/Main.elm", MAIN);
    let session = Session::default().with_project(project.root());

    let response = dispatch(
        &session,
        Command::ReplaceInFile {
            path: file.clone(),
            from: Position::new(5, 0),
            to: Position::new(6, 0),
            replacement: String::new(),
        },
    );

    assert!(matches!(response, Response::Failed { .. }), "{response:?}");
    assert_eq!(fs::read(&file).unwrap(), MAIN.as_bytes());
    let leftovers: Vec<_> = fs::read_dir(project.root().join("src"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 1, "{leftovers:?}");
}
