use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use swagger_trim_sdk::DocumentFormat;

pub const DEFAULT_INPUT_PATH: &str = "swagger-k8s-1.13.1.json";
pub const DEFAULT_OUTPUT_PATH: &str = "cloud-api-1.0.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "swagger-trim")]
#[command(about = "Trim a Kubernetes Swagger 2.0 document down to the cloud API surface")]
pub struct Cli {
    /// Log every input and retained path key.
    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,
    /// Defaults to `transform` with the built-in input and output paths.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Transform(TransformCommand::default()))
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    Transform(TransformCommand),
    Closure(ClosureCommand),
    Paths(PathsCommand),
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum InputFormat {
    Auto,
    Json,
    Yaml,
}

impl From<InputFormat> for DocumentFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Auto => DocumentFormat::Auto,
            InputFormat::Json => DocumentFormat::Json,
            InputFormat::Yaml => DocumentFormat::Yaml,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct TransformCommand {
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,
    /// Run the whole pipeline but do not write the output document.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    /// Also print every input path key and every retained path key.
    #[arg(long, default_value_t = false)]
    pub list_paths: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Default for TransformCommand {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            config: None,
            input_format: InputFormat::Auto,
            dry_run: false,
            list_paths: false,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ClosureCommand {
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,
    /// Path key as it appears under `paths`, e.g. `/api/v1/pods`.
    #[arg(long)]
    pub path: String,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct PathsCommand {
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,
    /// Only list keys that pass the whitelist.
    #[arg(long, default_value_t = false)]
    pub retained: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
