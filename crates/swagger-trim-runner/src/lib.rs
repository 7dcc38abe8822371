mod cli;
mod config;
mod io;
mod run;

pub use cli::{
    Cli, ClosureCommand, Commands, InputFormat, OutputFormat, PathsCommand, TransformCommand,
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};
pub use config::{
    load_runner_config, validate_runner_config, RunnerConfig, RunnerConfigError,
    RUNNER_CONFIG_SCHEMA,
};
pub use io::{read_swagger_document, write_swagger_document, DocumentIoError};
pub use run::{execute_closure, execute_paths, execute_transform, RunnerError};
