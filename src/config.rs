use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    /// One method signature per line.
    Signatures,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub package: String,
    /// Abort on the first operation that cannot be generated instead of
    /// skipping it.
    pub strict: bool,
    pub format: OutputFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: "client".to_string(),
            strict: true,
            format: OutputFormat::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn parse_from_file<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<GeneratorConfig> {
        Ok(toml::from_str(contents)?)
    }
}
