//! Error type shared by the library and the CLI.
//!
//! Every fallible operation returns [`MatrixError`]. Variants carry a miette
//! diagnostic code and, where the fix is obvious, a help line.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum MatrixError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(matrix_preview::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid defaults file '{path}'")]
    #[diagnostic(
        code(matrix_preview::config),
        help("expected a mapping with optional `providers` and `environments` strings")
    )]
    Config {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid pack index '{path}'")]
    #[diagnostic(code(matrix_preview::pack::index))]
    PackIndex {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid pack manifest '{path}'")]
    #[diagnostic(code(matrix_preview::pack::manifest))]
    PackManifest {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("pack index has no entry named '{entry}'")]
    #[diagnostic(code(matrix_preview::pack::unknown_entry))]
    UnknownPackEntry {
        entry: String,
        #[help]
        help: Option<String>,
    },

    #[error("pack '{pack}' has kind '{kind}', expected 'deployment'")]
    #[diagnostic(
        code(matrix_preview::pack::kind),
        help("set `kind: deployment` in manifest.yaml")
    )]
    WrongPackKind { pack: String, kind: String },

    #[error("pack '{pack}' declares no flows")]
    #[diagnostic(code(matrix_preview::pack::no_flows))]
    NoFlows { pack: String },

    #[error("pack '{pack}' lists component '{component}' but no manifest was found for it")]
    #[diagnostic(
        code(matrix_preview::pack::missing_component),
        help("add components/{component}.yaml to the pack")
    )]
    MissingComponent { pack: String, component: String },

    #[error("pack '{pack}' has no component that writes IaC templates")]
    #[diagnostic(
        code(matrix_preview::pack::no_iac),
        help("a deployment pack needs a component with `iac.write_templates: true`")
    )]
    NoIacComponent { pack: String },

    #[error("failed to walk pack directory '{path}'")]
    #[diagnostic(code(matrix_preview::pack::walk))]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to render the matrix as JSON")]
    #[diagnostic(code(matrix_preview::output::json))]
    RenderJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render the matrix as YAML")]
    #[diagnostic(code(matrix_preview::output::yaml))]
    RenderYaml {
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to write output")]
    #[diagnostic(code(matrix_preview::output::write))]
    Write {
        #[source]
        source: std::io::Error,
    },
}
