use std::path::Path;

use crate::error::{Error, Result};
use crate::openapi::Document;

pub fn parse_from_json(buffer: &[u8]) -> Result<Document> {
    let document: Document = serde_json::from_slice(buffer)?;
    tracing::debug!(paths = document.paths.len(), "parsed JSON document");
    Ok(document)
}

pub fn parse_from_yaml(buffer: &[u8]) -> Result<Document> {
    let document: Document = serde_yaml::from_slice(buffer)?;
    tracing::debug!(paths = document.paths.len(), "parsed YAML document");
    Ok(document)
}

/// Loads a document, picking the decoder from the file extension.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let parse = match extension.as_deref() {
        Some("json") => parse_from_json,
        Some("yml" | "yaml") => parse_from_yaml,
        _ => return Err(Error::UnsupportedFormat(path.to_path_buf())),
    };

    let buffer = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(file = %path.display(), "loading OpenAPI document");
    parse(&buffer)
}
