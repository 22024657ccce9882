//! Builder for `elm.json` test content.

use serde_json::{Map, Value, json};

/// Declarative description of an application manifest.
#[derive(Debug, Clone)]
pub struct ManifestSpec {
    source_directories: Vec<String>,
    elm_version: Option<String>,
    direct: Vec<(String, String)>,
    indirect: Vec<(String, String)>,
    test_direct: Vec<(String, String)>,
    test_indirect: Vec<(String, String)>,
}

impl Default for ManifestSpec {
    fn default() -> Self {
        Self::application()
    }
}

impl ManifestSpec {
    /// An application with `src` as its only source directory on 0.19.1.
    pub fn application() -> Self {
        Self {
            source_directories: vec!["src".into()],
            elm_version: Some("0.19.1".into()),
            direct: Vec::new(),
            indirect: Vec::new(),
            test_direct: Vec::new(),
            test_indirect: Vec::new(),
        }
    }

    pub fn source_directories(mut self, dirs: &[&str]) -> Self {
        self.source_directories = dirs.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn without_elm_version(mut self) -> Self {
        self.elm_version = None;
        self
    }

    pub fn direct(mut self, name: &str, version: &str) -> Self {
        self.direct.push((name.into(), version.into()));
        self
    }

    pub fn indirect(mut self, name: &str, version: &str) -> Self {
        self.indirect.push((name.into(), version.into()));
        self
    }

    pub fn test_direct(mut self, name: &str, version: &str) -> Self {
        self.test_direct.push((name.into(), version.into()));
        self
    }

    pub fn test_indirect(mut self, name: &str, version: &str) -> Self {
        self.test_indirect.push((name.into(), version.into()));
        self
    }

    /// Render as pretty-printed `elm.json` text.
    pub fn to_json(&self) -> String {
        fn group(entries: &[(String, String)]) -> Value {
            let map: Map<String, Value> = entries
                .iter()
                .map(|(name, version)| (name.clone(), Value::String(version.clone())))
                .collect();
            Value::Object(map)
        }

        let mut manifest = json!({
            "type": "application",
            "source-directories": self.source_directories,
            "dependencies": {
                "direct": group(&self.direct),
                "indirect": group(&self.indirect),
            },
            "test-dependencies": {
                "direct": group(&self.test_direct),
                "indirect": group(&self.test_indirect),
            },
        });
        if let Some(version) = &self.elm_version {
            manifest["elm-version"] = Value::String(version.clone());
        }
        serde_json::to_string_pretty(&manifest).unwrap()
    }
}
