use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use oapi_client_gen::config::{GeneratorConfig, OutputFormat};
use oapi_client_gen::error::{Error, Result};
use oapi_client_gen::loader::load_from_file;
use oapi_client_gen::plan::build_plan;

const CONFIG_FILE: &str = "oapi-client-gen.toml";

/// Derives client method signatures from an OpenAPI document
#[derive(Parser, Debug)]
#[command(name = "oapi-client-gen", version, about)]
struct Cli {
    /// OpenAPI document (.json, .yml or .yaml)
    #[arg(short, long)]
    file: PathBuf,

    /// Generator config, defaults to ./oapi-client-gen.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Package name handed to the emission layer
    #[arg(short, long)]
    package: Option<String>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Skip operations that cannot be generated instead of failing
    #[arg(long)]
    lenient: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let collector = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(collector).is_err() {
        eprintln!("a global tracing subscriber is already installed");
    }

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let document = load_from_file(&cli.file)?;
    let plan = build_plan(&document, &config)?;
    let rendered = plan.render(config.format)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| io_error(path, source))?;
            tracing::info!(file = %path.display(), "wrote client plan");
        }
        None => std::io::stdout()
            .write_all(rendered.as_bytes())
            .map_err(|source| io_error(Path::new("<stdout>"), source))?,
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::parse_from_file(path)?,
        None if Path::new(CONFIG_FILE).exists() => GeneratorConfig::parse_from_file(CONFIG_FILE)?,
        None => GeneratorConfig::default(),
    };

    if let Some(package) = &cli.package {
        config.package = package.clone();
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.lenient {
        config.strict = false;
    }

    Ok(config)
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
