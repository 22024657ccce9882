//! [`TestProject`] builder for indexing and listing scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::manifest::ManifestSpec;

/// Elm version used for the package store layout.
pub const ELM_VERSION: &str = "0.19.1";

/// A temporary directory holding an Elm project at `project/` and an Elm
/// home at `elm-home/`.
///
/// # Example
///
/// ```rust,no_run
/// use ide_test_utils::{ManifestSpec, TestProject};
///
/// let project = TestProject::new();
/// project.write_manifest(&ManifestSpec::application().direct("x", "1.0.0"));
/// project.write("src/Main.elm", "module Main exposing (main)");
/// project.add_package("x", "1.0.0", &["X"]);
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    base: PathBuf,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project directory and an empty package store.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let base = dunce::canonicalize(temp_dir.path()).unwrap();
        let project = Self { temp_dir, base };
        fs::create_dir_all(project.root()).unwrap();
        fs::create_dir_all(project.packages_root()).unwrap();
        project
    }

    /// Canonical path of the temporary directory holding everything.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of the temp directory as created, before canonicalization.
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The project root.
    pub fn root(&self) -> PathBuf {
        self.base.join("project")
    }

    /// The Elm home (what `ELM_HOME` would point at).
    pub fn elm_home(&self) -> PathBuf {
        self.base.join("elm-home")
    }

    /// `<elm home>/0.19.1/packages`.
    pub fn packages_root(&self) -> PathBuf {
        self.elm_home().join(ELM_VERSION).join("packages")
    }

    /// Write `elm.json` at the project root.
    pub fn write_manifest(&self, manifest: &ManifestSpec) -> PathBuf {
        self.write("elm.json", &manifest.to_json())
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        write_file(&self.root().join(rel), content)
    }

    /// Write an Elm module relative to the project root with a matching
    /// module header.
    pub fn write_module(&self, rel: &str) -> PathBuf {
        let module = rel
            .trim_end_matches(".elm")
            .rsplit('/')
            .next()
            .unwrap_or(rel)
            .to_string();
        self.write(rel, &format!("module {module} exposing (..)\n"))
    }

    /// Create `<packages>/<name>/<version>/` with an `elm.json`, a README and
    /// one source file per module under `src/`.
    pub fn add_package(&self, name: &str, version: &str, modules: &[&str]) -> PathBuf {
        let dir = self.packages_root().join(name).join(version);
        write_file(
            &dir.join("elm.json"),
            &format!("{{\n    \"type\": \"package\",\n    \"name\": \"{name}\",\n    \"version\": \"{version}\"\n}}\n"),
        );
        write_file(&dir.join("README.md"), &format!("# {name}\n"));
        for module in modules {
            let rel = format!("{}.elm", module.replace('.', "/"));
            write_file(
                &dir.join("src").join(rel),
                &format!("module {module} exposing (..)\n"),
            );
        }
        dir
    }

    /// Render `path` relative to [`base`](Self::base) with `/` separators.
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.base)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// [`display`](Self::display) for a list of paths.
    pub fn display_all<'a>(&self, paths: impl IntoIterator<Item = &'a Path>) -> Vec<String> {
        paths.into_iter().map(|p| self.display(p)).collect()
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
    path.to_path_buf()
}
