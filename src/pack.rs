//! Deployment pack model and consistency checks.
//!
//! A pack index (`index.json`) maps entry names to pack manifests. A pack is a
//! directory holding `manifest.yaml` and a `components/` tree of component
//! manifests:
//!
//! ```text
//! index.json
//! deployment/generic-deploy.gtpack/
//!     manifest.yaml
//!     components/demo.deploy.generic.iac.yaml
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::errors::MatrixError;

/// Pack kind accepted by [`DeploymentPack::check`].
pub const DEPLOYMENT_KIND: &str = "deployment";
/// Directory inside a pack that holds component manifests.
pub const COMPONENTS_DIR: &str = "components";

const LOCATOR_SCHEME: &str = "fs://";

// =====================
// Index
// =====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackLocator {
    pub locator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub main_pack: PackLocator,
}

/// A parsed `index.json`, remembering the directory locators are relative to.
#[derive(Debug, Clone)]
pub struct PackIndex {
    pub base_dir: PathBuf,
    pub entries: BTreeMap<String, IndexEntry>,
}

impl PackIndex {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MatrixError> {
        let path = path.as_ref();
        let content = read_file(path)?;
        let entries =
            serde_json::from_str(&content).map_err(|source| MatrixError::PackIndex {
                path: path.display().to_string(),
                source,
            })?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self { base_dir, entries })
    }

    /// Resolves the manifest path of `entry`.
    pub fn locate(&self, entry: &str) -> Result<PathBuf, MatrixError> {
        let Some(found) = self.entries.get(entry) else {
            let known: Vec<&str> = self.entries.keys().map(String::as_str).collect();
            let help = (!known.is_empty()).then(|| format!("known entries: {}", known.join(", ")));
            return Err(MatrixError::UnknownPackEntry {
                entry: entry.to_string(),
                help,
            });
        };
        let locator = &found.main_pack.locator;
        let relative = locator.strip_prefix(LOCATOR_SCHEME).unwrap_or(locator);
        Ok(self.base_dir.join(relative))
    }
}

// =====================
// Manifests
// =====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

/// Contents of a pack's `manifest.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackManifest {
    pub id: String,
    pub version: String,
    pub kind: String,
    #[serde(default)]
    pub flows: Vec<FlowRef>,
    #[serde(default)]
    pub components: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IacCapability {
    #[serde(default)]
    pub write_templates: bool,
    #[serde(default)]
    pub execute_plans: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iac: Option<IacCapability>,
}

/// Contents of a file under `components/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentManifest {
    pub id: String,
    pub version: String,
    #[serde(default)]
    pub capabilities: Capabilities,
}

impl ComponentManifest {
    pub fn writes_templates(&self) -> bool {
        self.capabilities
            .iac
            .as_ref()
            .is_some_and(|iac| iac.write_templates)
    }
}

// =====================
// Pack
// =====================

#[derive(Debug, Clone)]
pub struct DeploymentPack {
    pub root: PathBuf,
    pub manifest: PackManifest,
    pub components: Vec<ComponentManifest>,
}

impl DeploymentPack {
    /// Loads a pack from the path of its `manifest.yaml`, along with every
    /// component manifest found under `components/`.
    pub fn load<P: AsRef<Path>>(manifest_path: P) -> Result<Self, MatrixError> {
        let manifest_path = manifest_path.as_ref();
        let manifest: PackManifest = read_yaml(manifest_path)?;
        let root = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let components = discover_component_files(root.join(COMPONENTS_DIR))?
            .iter()
            .map(|path| read_yaml(path))
            .collect::<Result<Vec<ComponentManifest>, _>>()?;

        tracing::info!(
            pack = %manifest.id,
            components = components.len(),
            root = %root.display(),
            "pack loaded"
        );
        Ok(Self {
            root,
            manifest,
            components,
        })
    }

    pub fn has_flow(&self, id: &str) -> bool {
        self.manifest.flows.iter().any(|flow| flow.id == id)
    }

    pub fn component(&self, id: &str) -> Option<&ComponentManifest> {
        self.components.iter().find(|component| component.id == id)
    }

    /// Checks the pack is a usable deployment pack.
    pub fn check(&self) -> Result<(), MatrixError> {
        let pack = &self.manifest.id;

        if self.manifest.kind != DEPLOYMENT_KIND {
            return Err(MatrixError::WrongPackKind {
                pack: pack.clone(),
                kind: self.manifest.kind.clone(),
            });
        }

        if self.manifest.flows.is_empty() {
            return Err(MatrixError::NoFlows { pack: pack.clone() });
        }

        for id in &self.manifest.components {
            if self.component(id).is_none() {
                return Err(MatrixError::MissingComponent {
                    pack: pack.clone(),
                    component: id.clone(),
                });
            }
        }

        if !self.components.iter().any(ComponentManifest::writes_templates) {
            return Err(MatrixError::NoIacComponent { pack: pack.clone() });
        }

        tracing::debug!(pack = %pack, "pack check passed");
        Ok(())
    }
}

/// Recursively collects `.yaml`/`.yml` files under `dir`, sorted. A missing
/// directory yields no files.
pub fn discover_component_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, MatrixError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "pack has no components directory");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| MatrixError::Walk {
            path: dir.display().to_string(),
            source,
        })?;
        if entry.file_type().is_file() && is_yaml_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
}

fn read_file(path: &Path) -> Result<String, MatrixError> {
    fs::read_to_string(path).map_err(|source| MatrixError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, MatrixError> {
    let content = read_file(path)?;
    serde_yaml::from_str(&content).map_err(|source| MatrixError::PackManifest {
        path: path.display().to_string(),
        source,
    })
}
