//! Failures that stop the CLI before any diagnostic is produced.

use noon_options::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no input (use -c <source> or give a file)")]
    NoInput,

    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
