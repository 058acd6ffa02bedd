//! Install manifest (installed_commands.json)
//!
//! The manifest is advisory bookkeeping of which command names are considered
//! installed in a configuration directory. It is not a source of truth for
//! file existence.
//!
//! Every operation reloads the file, applies a set operation and rewrites the
//! whole file. A missing or unparseable manifest is treated as empty. Fields
//! with unexpected types are dropped individually.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::paths::MANIFEST_FILE;
use crate::error::{Result, config_parse_failed, file_read_failed, file_write_failed};

/// Value recorded in `installationSource`
pub const INSTALLATION_SOURCE: &str = "claude-dev-toolkit";

/// Persisted manifest
///
/// Legacy snake_case keys are accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Installed command names (set semantics, written sorted)
    #[serde(default, alias = "installed_commands")]
    pub installed_commands: BTreeSet<String>,

    /// Seconds since the Unix epoch of the last merge
    #[serde(default, alias = "installation_timestamp")]
    pub installation_timestamp: f64,

    #[serde(default = "default_source", alias = "installation_source")]
    pub installation_source: String,

    /// Command type of the most recent install
    #[serde(default, alias = "command_type")]
    pub command_type: String,

    #[serde(default = "default_version", alias = "installer_version")]
    pub installer_version: String,

    /// Seconds since the Unix epoch of the last removal
    #[serde(
        default,
        alias = "last_updated",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<f64>,
}

fn default_source() -> String {
    INSTALLATION_SOURCE.to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            installed_commands: BTreeSet::new(),
            installation_timestamp: 0.0,
            installation_source: default_source(),
            command_type: String::new(),
            installer_version: default_version(),
            last_updated: None,
        }
    }
}

impl Manifest {
    /// Parse manifest from JSON string
    ///
    /// Valid JSON whose fields have unexpected types is salvaged field by
    /// field so recorded names survive. Only unparseable JSON is an error.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| config_parse_failed(MANIFEST_FILE, e.to_string()))?;

        match serde_json::from_value::<Self>(value.clone()) {
            Ok(manifest) => Ok(manifest),
            Err(e) => {
                log::warn!("Manifest has unexpected field types ({e}), salvaging known fields");
                Self::salvage(&value)
                    .ok_or_else(|| config_parse_failed(MANIFEST_FILE, e.to_string()))
            }
        }
    }

    /// Best-effort read of a JSON object, keeping every field of the right type
    fn salvage(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |camel: &str, snake: &str| object.get(camel).or_else(|| object.get(snake));
        let text = |camel: &str, snake: &str| {
            field(camel, snake)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let defaults = Self::default();
        Some(Self {
            installed_commands: field("installedCommands", "installed_commands")
                .and_then(Value::as_array)
                .map(|names| {
                    names
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            installation_timestamp: field("installationTimestamp", "installation_timestamp")
                .and_then(Value::as_f64)
                .unwrap_or_default(),
            installation_source: text("installationSource", "installation_source")
                .unwrap_or(defaults.installation_source),
            command_type: text("commandType", "command_type").unwrap_or_default(),
            installer_version: text("installerVersion", "installer_version")
                .unwrap_or(defaults.installer_version),
            last_updated: field("lastUpdated", "last_updated").and_then(Value::as_f64),
        })
    }

    /// Serialize manifest to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| config_parse_failed(MANIFEST_FILE, e.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.installed_commands.contains(name)
    }
}

/// Current time as fractional seconds since the Unix epoch
pub fn now_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

/// Reads and rewrites the manifest of one configuration directory
#[derive(Debug, Clone)]
pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    /// Store for `<config_dir>/installed_commands.json`
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            path: config_dir.as_ref().join(MANIFEST_FILE),
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the manifest; `Ok(None)` when the file does not exist
    pub fn load(&self) -> Result<Option<Manifest>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| file_read_failed(self.path.display().to_string(), e.to_string()))?;
        Manifest::from_json(&content).map(Some)
    }

    /// Load the manifest, treating a missing or corrupt file as empty
    pub fn load_or_default(&self) -> Manifest {
        match self.load() {
            Ok(Some(manifest)) => manifest,
            Ok(None) => Manifest::default(),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable manifest {}: {}",
                    self.path.display(),
                    e
                );
                Manifest::default()
            }
        }
    }

    /// Union `names` into the persisted set and stamp the installation time
    pub fn merge(&self, names: &[String], command_type: &str) -> Result<Manifest> {
        let mut manifest = self.load_or_default();

        manifest
            .installed_commands
            .extend(names.iter().cloned());
        manifest.installation_timestamp = now_timestamp();
        manifest.installation_source = INSTALLATION_SOURCE.to_string();
        manifest.command_type = command_type.to_string();
        manifest.installer_version = default_version();

        self.write(&manifest)?;
        log::debug!(
            "Manifest {} now lists {} command(s)",
            self.path.display(),
            manifest.installed_commands.len()
        );
        Ok(manifest)
    }

    /// Remove `names` from the persisted set and stamp `lastUpdated`
    ///
    /// Does nothing when no manifest file exists.
    pub fn remove_names(&self, names: &[String]) -> Result<Option<Manifest>> {
        if !self.path.exists() {
            log::debug!("No manifest at {}, nothing to update", self.path.display());
            return Ok(None);
        }

        let mut manifest = self.load_or_default();
        for name in names {
            manifest.installed_commands.remove(name);
        }
        manifest.last_updated = Some(now_timestamp());

        self.write(&manifest)?;
        Ok(Some(manifest))
    }

    /// Whole-file replace: write a sibling temp file, then rename over the target
    fn write(&self, manifest: &Manifest) -> Result<()> {
        let write_err = |e: &dyn std::fmt::Display| {
            file_write_failed(self.path.display().to_string(), e.to_string())
        };

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(|e| write_err(&e))?;

        let json = manifest.to_json()?;
        let mut tmp = tempfile::Builder::new()
            .prefix(".installed_commands")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| write_err(&e))?;
        tmp.write_all(json.as_bytes()).map_err(|e| write_err(&e))?;
        tmp.write_all(b"\n").map_err(|e| write_err(&e))?;
        tmp.persist(&self.path).map_err(|e| write_err(&e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_merge_creates_manifest() {
        let temp = TempDir::new().unwrap();
        let store = ManifestStore::new(temp.path());

        let manifest = store.merge(&names(&["xgit", "xtest"]), "active").unwrap();

        assert!(store.path().exists());
        assert_eq!(manifest.installed_commands.len(), 2);
        assert_eq!(manifest.command_type, "active");
        assert_eq!(manifest.installation_source, INSTALLATION_SOURCE);
        assert!(manifest.installation_timestamp > 0.0);
        assert_eq!(store.load().unwrap(), Some(manifest));
    }

    #[test]
    fn test_merge_is_union() {
        let temp = TempDir::new().unwrap();
        let store = ManifestStore::new(temp.path());

        store.merge(&names(&["xgit", "xtest"]), "active").unwrap();
        let manifest = store
            .merge(&names(&["xtest", "xaws"]), "experimental")
            .unwrap();

        let expected: BTreeSet<String> = names(&["xaws", "xgit", "xtest"]).into_iter().collect();
        assert_eq!(manifest.installed_commands, expected);
        assert_eq!(manifest.command_type, "experimental");
    }

    #[test]
    fn test_merge_recovers_from_corruption() {
        let temp = TempDir::new().unwrap();
        let store = ManifestStore::new(temp.path());
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.load().is_err());
        let manifest = store.merge(&names(&["xgit"]), "active").unwrap();

        assert_eq!(manifest.installed_commands.len(), 1);
        assert!(manifest.contains("xgit"));
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn test_merge_keeps_names_next_to_mistyped_fields() {
        let temp = TempDir::new().unwrap();
        let store = ManifestStore::new(temp.path());
        fs::write(
            store.path(),
            r#"{"installedCommands":["xa","xb",7],"installationTimestamp":null,"installerVersion":3}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.installed_commands.len(), 2);
        assert_eq!(loaded.installer_version, default_version());

        let manifest = store.merge(&names(&["xc"]), "active").unwrap();
        let expected: BTreeSet<String> = names(&["xa", "xb", "xc"]).into_iter().collect();
        assert_eq!(manifest.installed_commands, expected);
    }

    #[test]
    fn test_legacy_keys_salvaged() {
        let manifest = Manifest::from_json(
            r#"{"installed_commands":["xgit"],"installation_timestamp":"yesterday"}"#,
        )
        .unwrap();
        assert!(manifest.contains("xgit"));
        assert_eq!(manifest.installation_timestamp, 0.0);
        assert!(Manifest::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_remove_names() {
        let temp = TempDir::new().unwrap();
        let store = ManifestStore::new(temp.path());
        store.merge(&names(&["xgit", "xtest"]), "active").unwrap();

        let manifest = store.remove_names(&names(&["xgit", "xnever"])).unwrap().unwrap();

        assert_eq!(manifest.installed_commands.len(), 1);
        assert!(manifest.contains("xtest"));
        assert!(manifest.last_updated.is_some());
    }

    #[test]
    fn test_remove_names_without_manifest_is_noop() {
        let temp = TempDir::new().unwrap();
        let store = ManifestStore::new(temp.path());

        assert!(store.remove_names(&names(&["xgit"])).unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_reads_legacy_snake_case() {
        let json = r#"{
  "installed_commands": ["xgit", "xtest", "xgit"],
  "installation_timestamp": 1700000000.5,
  "installation_source": "claude-dev-toolkit",
  "command_type": "active",
  "installer_version": "1.0.0"
}"#;
        let manifest = Manifest::from_json(json).unwrap();
        assert_eq!(manifest.installed_commands.len(), 2);
        assert_eq!(manifest.installer_version, "1.0.0");
        assert!(manifest.last_updated.is_none());
    }

    #[test]
    fn test_writes_camel_case() {
        let mut manifest = Manifest::default();
        manifest.installed_commands.insert("xgit".to_string());
        let json = manifest.to_json().unwrap();
        assert!(json.contains("\"installedCommands\""));
        assert!(json.contains("\"installationTimestamp\""));
        assert!(!json.contains("lastUpdated"));
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let temp = TempDir::new().unwrap();
        let store = ManifestStore::new(temp.path());
        store.merge(&names(&["xgit"]), "active").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from(MANIFEST_FILE)]);
    }
}
