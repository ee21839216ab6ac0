//! Config patcher
//!
//! Makes a freshly generated `ng new --minimal` project runnable under Karma.
//! Every write is a full overwrite, so applying it twice yields the same tree.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::KarmaConfig;
use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use crate::error::{HarnessError, HarnessResult};

use super::templates;

/// Manifest written by the Angular CLI
pub const ANGULAR_JSON: &str = "angular.json";

/// Inject the Karma `test` target into the first project of `manifest`.
///
/// Returns the name of the patched project. Every other key keeps its value
/// and position.
pub fn patch_manifest(manifest: &mut Value, file: &Path) -> HarnessResult<String> {
    let invalid = |message: &str| HarnessError::ManifestInvalid {
        file: file.to_path_buf(),
        message: message.to_string(),
    };

    let projects = manifest
        .get_mut("projects")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| invalid("missing 'projects' object"))?;

    let (name, project) = projects
        .iter_mut()
        .next()
        .ok_or_else(|| invalid("'projects' is empty"))?;

    let project = project
        .as_object_mut()
        .ok_or_else(|| invalid(&format!("project '{}' is not an object", name)))?;

    let architect = project
        .entry("architect")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| invalid(&format!("'architect' of project '{}' is not an object", name)))?;

    architect.insert("test".to_string(), templates::test_architect_target());

    Ok(name.clone())
}

/// Serialize a JSON document the way the Angular CLI writes its own files
fn to_pretty_json(value: &Value) -> HarnessResult<String> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    Ok(content)
}

/// Writes the test configuration into a scaffold project
pub struct ConfigPatcher<'a> {
    karma: &'a KarmaConfig,
    project_name: &'a str,
}

impl<'a> ConfigPatcher<'a> {
    pub fn new(karma: &'a KarmaConfig, project_name: &'a str) -> Self {
        Self {
            karma,
            project_name,
        }
    }

    /// Patch `angular.json` and write the four test support files.
    ///
    /// Returns the written paths in write order.
    pub fn apply(
        &self,
        scaffold: &Path,
        sink: &dyn GenerateEventSink,
    ) -> HarnessResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(5);

        let manifest_path = scaffold.join(ANGULAR_JSON);
        let mut manifest: Value = serde_json::from_str(&fs::read_to_string(&manifest_path)?)
            .map_err(|e| HarnessError::ManifestInvalid {
                file: manifest_path.clone(),
                message: e.to_string(),
            })?;
        patch_manifest(&mut manifest, &manifest_path)?;
        fs::write(&manifest_path, to_pretty_json(&manifest)?)?;
        written.push(manifest_path);

        let tsconfig_path = scaffold.join(templates::TSCONFIG_SPEC);
        fs::write(&tsconfig_path, to_pretty_json(&templates::tsconfig_spec())?)?;
        written.push(tsconfig_path);

        let karma_path = scaffold.join(templates::KARMA_CONF);
        fs::write(
            &karma_path,
            templates::karma_conf(self.karma, self.project_name),
        )?;
        written.push(karma_path);

        let polyfills_path = scaffold.join(templates::POLYFILLS_ENTRY);
        write_creating_parent(&polyfills_path, templates::POLYFILLS_TS)?;
        written.push(polyfills_path);

        let test_path = scaffold.join(templates::TEST_ENTRY);
        write_creating_parent(&test_path, templates::TEST_TS)?;
        written.push(test_path);

        for path in &written {
            sink.on_event(GenerateEvent::ConfigWritten { path: path.clone() });
        }

        Ok(written)
    }
}

fn write_creating_parent(path: &Path, content: &str) -> HarnessResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
