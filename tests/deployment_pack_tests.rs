//! Checks for the demo deployment pack and the pack loader.

use std::{fs, path::Path};

use matrix_preview::{
    pack::{discover_component_files, DeploymentPack, PackIndex},
    MatrixError,
};
use tempfile::TempDir;

const DEMOS: &str = "demos";
const DEPLOY_PACK: &str = "demos/deployment/generic-deploy.gtpack";

#[test]
fn manifest_declares_deployment_kind() {
    let text = fs::read_to_string(Path::new(DEPLOY_PACK).join("manifest.yaml"))
        .expect("manifest.yaml missing");
    assert!(text.contains("kind: deployment"));
    assert!(text.contains("deploy_generic_iac"));
}

#[test]
fn index_references_deployment_pack() {
    let index = PackIndex::load(Path::new(DEMOS).join("index.json")).unwrap();
    let entry = index.entries.get("deployment-demo").expect("entry missing");
    assert!(entry
        .main_pack
        .locator
        .contains("generic-deploy.gtpack/manifest.yaml"));
    assert!(index.locate("deployment-demo").unwrap().is_file());
}

#[test]
fn demo_pack_passes_checks() {
    let index = PackIndex::load(Path::new(DEMOS).join("index.json")).unwrap();
    let pack = DeploymentPack::load(index.locate("deployment-demo").unwrap()).unwrap();

    pack.check().unwrap();
    assert!(pack.has_flow("deploy_generic_iac"));

    let iac = pack.component("demo.deploy.generic.iac").expect("component missing");
    assert!(iac.writes_templates());
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn temp_pack(kind: &str, components: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "manifest.yaml",
        &format!(
            "id: temp.pack\nversion: 0.0.1\nkind: {kind}\nflows:\n  - id: deploy\ncomponents:\n  - temp.iac\n"
        ),
    );
    for (relative, content) in components {
        write(dir.path(), relative, content);
    }
    dir
}

const IAC_COMPONENT: &str =
    "id: temp.iac\nversion: 0.0.1\ncapabilities:\n  iac:\n    write_templates: true\n";

#[test]
fn nested_component_manifests_are_discovered() {
    let pack = temp_pack(
        "deployment",
        &[
            ("components/nested/temp.iac.yml", IAC_COMPONENT),
            ("components/README.md", "not a manifest"),
        ],
    );
    let files = discover_component_files(pack.path().join("components")).unwrap();
    assert_eq!(files.len(), 1);

    let loaded = DeploymentPack::load(pack.path().join("manifest.yaml")).unwrap();
    assert!(loaded.check().is_ok());
}

#[test]
fn pack_of_wrong_kind_fails_check() {
    let pack = temp_pack("messaging", &[("components/temp.iac.yaml", IAC_COMPONENT)]);
    let loaded = DeploymentPack::load(pack.path().join("manifest.yaml")).unwrap();
    assert!(matches!(
        loaded.check(),
        Err(MatrixError::WrongPackKind { .. })
    ));
}

#[test]
fn pack_without_components_dir_reports_missing_component() {
    let pack = temp_pack("deployment", &[]);
    let loaded = DeploymentPack::load(pack.path().join("manifest.yaml")).unwrap();
    assert!(loaded.components.is_empty());
    match loaded.check() {
        Err(MatrixError::MissingComponent { component, .. }) => assert_eq!(component, "temp.iac"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn malformed_component_manifest_is_reported() {
    let pack = temp_pack("deployment", &[("components/temp.iac.yaml", "id: [unclosed\n")]);
    let err = DeploymentPack::load(pack.path().join("manifest.yaml")).unwrap_err();
    assert!(matches!(err, MatrixError::PackManifest { .. }));
}

#[test]
fn missing_index_is_io_error() {
    let err = PackIndex::load("demos/no-such-index.json").unwrap_err();
    assert!(matches!(err, MatrixError::Io { .. }));
}
