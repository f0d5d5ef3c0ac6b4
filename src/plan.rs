//! Per-operation signatures for the emission layer.
//!
//! This is where the empty results of the derivation core become errors:
//! an operation without a method name, with an unnamed argument or with an
//! unresolved argument type cannot be emitted. A scalar request body is the
//! one exception and is named `req`. In strict mode the first one aborts the run; otherwise
//! it is logged and skipped.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::config::{GeneratorConfig, OutputFormat};
use crate::error::{Error, Result};
use crate::naming::method_name;
use crate::openapi::{Document, Endpoint, HttpMethod, ParameterLocation};
use crate::params::{func_parameters, ParameterDescriptor};
use crate::resolve::{derive_type, SEQUENCE_MARKER};

/// Argument name for a request body that has no `$ref` to be named after.
const BODY_NAME: &str = "req";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClientPlan {
    pub package: String,
    pub operations: Vec<Operation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub path: String,
    pub verb: HttpMethod,
    pub method_name: String,
    pub parameters: Vec<ParameterDescriptor>,
    /// Type of the `200` response, when one is declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub path_placeholders: Vec<String>,
}

impl ClientPlan {
    /// Renders the plan in the requested output format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let rendered = match format {
            OutputFormat::Json => serde_json::to_string_pretty(self).map_err(|err| Error::Render {
                format: "json",
                message: err.to_string(),
            })? + "\n",
            OutputFormat::Yaml => serde_yaml::to_string(self).map_err(|err| Error::Render {
                format: "yaml",
                message: err.to_string(),
            })?,
            OutputFormat::Signatures => self
                .operations
                .iter()
                .map(|operation| format!("{operation}\n"))
                .collect(),
        };

        Ok(rendered)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.parameters.iter().map(ToString::to_string).collect();
        write!(f, "{}({})", self.method_name, args.join(", "))?;
        if let Some(response) = self.response_type.as_deref().filter(|r| !r.is_empty()) {
            write!(f, " {response}")?;
        }
        Ok(())
    }
}

impl Operation {
    pub fn build(verb: HttpMethod, path: &str, endpoint: &Endpoint) -> Result<Operation> {
        let method_name = method_name(verb, path, endpoint);
        if method_name.is_empty() {
            return Err(Error::UnsupportedVerb {
                verb,
                path: path.to_string(),
            });
        }

        let mut parameters = func_parameters(verb, path, endpoint);
        for (position, param) in parameters.iter_mut().enumerate() {
            if param.name.is_empty() && param.location == Some(ParameterLocation::Body) {
                param.name = BODY_NAME.to_string();
            }
            if param.name.is_empty() {
                return Err(Error::UnnamedParameter {
                    verb,
                    path: path.to_string(),
                    position,
                });
            }
            if is_unresolved(&param.type_name) {
                return Err(Error::UnresolvedType {
                    verb,
                    path: path.to_string(),
                    parameter: param.name.clone(),
                });
            }
        }

        let path_placeholders = path_placeholders(path);
        for placeholder in &path_placeholders {
            let declared = endpoint
                .parameters
                .iter()
                .any(|param| param.location == Some(ParameterLocation::Path) && &param.name == placeholder);
            if !declared {
                tracing::warn!(
                    %verb,
                    path,
                    placeholder = placeholder.as_str(),
                    "path placeholder has no matching path parameter"
                );
            }
        }

        Ok(Operation {
            path: path.to_string(),
            verb,
            method_name,
            parameters,
            response_type: endpoint.response("200").map(derive_type),
            summary: endpoint.summary.clone(),
            tags: endpoint.tags.clone(),
            path_placeholders,
        })
    }
}

/// Empty, or a sequence with no element type (`[]`, `[][]`).
fn is_unresolved(type_name: &str) -> bool {
    type_name.trim_start_matches(SEQUENCE_MARKER).is_empty()
}

/// Names of the `{name}` segments of a path template, in order.
pub fn path_placeholders(path: &str) -> Vec<String> {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let regex = PLACEHOLDER.get_or_init(|| Regex::new(r"\{([^/{}]+)\}").expect("valid placeholder regex"));

    regex
        .captures_iter(path)
        .map(|captures| captures[1].to_string())
        .collect()
}

pub fn build_plan(document: &Document, config: &GeneratorConfig) -> Result<ClientPlan> {
    let mut operations = vec![];

    for (path, item) in &document.paths {
        for (verb, endpoint) in item.endpoints() {
            match Operation::build(verb, path, endpoint) {
                Ok(operation) => {
                    tracing::debug!(%verb, %path, method = %operation.method_name, "derived operation");
                    operations.push(operation);
                }
                Err(err) if config.strict => return Err(err),
                Err(err) => tracing::warn!(error = %err, "skipping operation"),
            }
        }
    }

    tracing::info!(
        package = %config.package,
        operations = operations.len(),
        "built client plan"
    );

    Ok(ClientPlan {
        package: config.package.clone(),
        operations,
    })
}
