//! Loading and saving IdeConfig in every supported format

use std::fs;
use std::path::PathBuf;

use ide_core::{ErrorKind, IdeConfig};
use ide_project::DependencyCache;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

#[rstest]
#[case::toml("config.toml", "elm_home = \"/opt/elm\"\nparallel_reads = false\n")]
#[case::json("config.json", r#"{ "elm_home": "/opt/elm", "parallel_reads": false }"#)]
#[case::yaml("config.yaml", "elm_home: /opt/elm\nparallel_reads: false\n")]
fn loads_each_format(#[case] name: &str, #[case] content: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();

    let config = IdeConfig::load(&path).unwrap();

    assert_eq!(
        config,
        IdeConfig {
            dependency_cache_root: None,
            elm_home: Some(PathBuf::from("/opt/elm")),
            parallel_reads: false,
        }
    );
    assert_eq!(
        config.dependency_cache(),
        DependencyCache::ElmHome(PathBuf::from("/opt/elm"))
    );
}

#[test]
fn omitted_keys_take_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(IdeConfig::load(&path).unwrap(), IdeConfig::default());
}

#[test]
fn absent_file_means_defaults() {
    let dir = TempDir::new().unwrap();

    let config = IdeConfig::load_or_default(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config, IdeConfig::default());
}

#[test]
fn saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let config = IdeConfig {
        dependency_cache_root: Some(PathBuf::from("/cache/packages")),
        elm_home: None,
        parallel_reads: true,
    };

    config.save(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(!written.contains("elm_home"), "{written}");
    assert_eq!(IdeConfig::load(&path).unwrap(), config);
}

#[test]
fn yaml_written_by_hand_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");
    let config = IdeConfig {
        dependency_cache_root: Some(PathBuf::from("/store")),
        ..IdeConfig::default()
    };
    fs::write(&path, serde_yaml::to_string(&config).unwrap()).unwrap();

    assert_eq!(IdeConfig::load(&path).unwrap(), config);
}

#[rstest]
#[case::bad_syntax("config.toml", "parallel_reads = ")]
#[case::wrong_type("config.json", r#"{ "parallel_reads": "yes" }"#)]
#[case::unknown_format("config.ini", "parallel_reads=true")]
fn bad_config_reports_config_kind(#[case] name: &str, #[case] content: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();

    let err = IdeConfig::load(&path).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Config);
}
