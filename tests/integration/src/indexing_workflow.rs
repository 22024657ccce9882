//! Indexing and listing scenarios across the whole stack
//!
//! Each test drives a host session the way an editor would: open a project,
//! send commands, change files on disk, send commands again.

use ide_core::{Command, ErrorKind, IdeConfig, Response, Session, dispatch};
use ide_project::IndexEntry;
use ide_test_utils::{ManifestSpec, TestProject};
use pretty_assertions::assert_eq;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn open(project: &TestProject) -> Session {
    let config = IdeConfig {
        elm_home: Some(project.elm_home()),
        ..IdeConfig::default()
    };
    let mut session = Session::new(config);
    session.open_project(project.root()).unwrap();
    session
}

fn index(session: &Session) -> Vec<IndexEntry> {
    match dispatch(session, Command::ListFilesForIndex { project_root: None }) {
        Response::FilesForIndex(entries) => entries,
        other => panic!("expected index entries, got {other:?}"),
    }
}

fn sources(project: &TestProject, session: &Session) -> Vec<String> {
    match dispatch(session, Command::ListUserSourceFiles { project_root: None }) {
        Response::UserSourceFiles(files) => project.display_all(files.iter().map(|p| p.as_path())),
        other => panic!("expected source files, got {other:?}"),
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn manifest_changes_are_picked_up_without_reopening() {
    let project = TestProject::new();
    project.write_manifest(&ManifestSpec::application());
    project.write_module("src/Main.elm");
    project.write_module("shared/Common.elm");
    let session = open(&project);

    assert_eq!(sources(&project, &session), vec!["project/src/Main.elm"]);

    project.write_manifest(&ManifestSpec::application().source_directories(&["src", "shared"]));

    assert_eq!(
        sources(&project, &session),
        vec!["project/shared/Common.elm", "project/src/Main.elm"]
    );
}

#[test]
fn upgrading_a_dependency_switches_indexed_version() {
    let project = TestProject::new();
    project.write_manifest(&ManifestSpec::application().direct("elm/core", "1.0.4"));
    project.write_module("src/Main.elm");
    project.add_package("elm/core", "1.0.4", &["Basics"]);
    project.add_package("elm/core", "1.0.5", &["Basics", "Bitwise"]);
    let session = open(&project);

    let before = index(&session);
    project.write_manifest(&ManifestSpec::application().direct("elm/core", "1.0.5"));
    let after = index(&session);

    let dependency_paths = |entries: &[IndexEntry]| -> Vec<String> {
        project
            .display_all(entries.iter().map(|e| e.path.as_path()))
            .into_iter()
            .filter(|p| p.starts_with("elm-home/"))
            .collect()
    };
    assert_eq!(
        dependency_paths(&before),
        vec![
            "elm-home/0.19.1/packages/elm/core/1.0.4/elm.json",
            "elm-home/0.19.1/packages/elm/core/1.0.4/src/Basics.elm",
        ]
    );
    assert_eq!(
        dependency_paths(&after),
        vec![
            "elm-home/0.19.1/packages/elm/core/1.0.5/elm.json",
            "elm-home/0.19.1/packages/elm/core/1.0.5/src/Basics.elm",
            "elm-home/0.19.1/packages/elm/core/1.0.5/src/Bitwise.elm",
        ]
    );
}

#[test]
fn index_content_matches_disk() {
    let project = TestProject::new();
    project.write_manifest(&ManifestSpec::application());
    project.write("src/Main.elm", "module Main exposing (main)\n\nmain = text \"héllo\"\n");
    let session = open(&project);

    let entries = index(&session);

    for entry in &entries {
        assert_eq!(entry.content, std::fs::read_to_string(&entry.path).unwrap());
    }
}

#[test]
fn sources_are_a_subset_of_the_index() {
    let project = TestProject::new();
    project.write_manifest(&ManifestSpec::application().source_directories(&["src", "lib"]));
    for module in ["src/Main.elm", "src/Page/Home.elm", "lib/Util.elm", "scripts/Gen.elm"] {
        project.write_module(module);
    }
    let session = open(&project);

    let listed = sources(&project, &session);
    let indexed: Vec<String> = project.display_all(index(&session).iter().map(|e| e.path.as_path()));

    assert!(listed.iter().all(|s| indexed.contains(s)));
    assert!(indexed.contains(&"project/scripts/Gen.elm".to_string()));
    assert!(!listed.contains(&"project/scripts/Gen.elm".to_string()));
}

#[test]
fn deleting_the_manifest_fails_both_listings() {
    let project = TestProject::new();
    let manifest = project.write_manifest(&ManifestSpec::application());
    project.write_module("src/Main.elm");
    let session = open(&project);

    std::fs::remove_file(manifest).unwrap();

    for command in [
        Command::ListFilesForIndex { project_root: None },
        Command::ListUserSourceFiles { project_root: None },
    ] {
        match dispatch(&session, command) {
            Response::Failed { kind, .. } => assert_eq!(kind, ErrorKind::ManifestMissing),
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
