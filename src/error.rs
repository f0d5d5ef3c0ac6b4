use std::path::PathBuf;

use crate::openapi::HttpMethod;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("could not render {format} output: {message}")]
    Render { format: &'static str, message: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unsupported document format {0:?}, expected .json, .yml or .yaml")]
    UnsupportedFormat(PathBuf),

    /// No naming convention exists for the verb and no operationId was given.
    #[error("{verb} {path}: no method name can be derived, set an operationId")]
    UnsupportedVerb { verb: HttpMethod, path: String },

    #[error("{verb} {path}: argument {position} has no name")]
    UnnamedParameter {
        verb: HttpMethod,
        path: String,
        position: usize,
    },

    #[error("{verb} {path}: could not resolve the type of parameter {parameter:?}")]
    UnresolvedType {
        verb: HttpMethod,
        path: String,
        parameter: String,
    },
}
