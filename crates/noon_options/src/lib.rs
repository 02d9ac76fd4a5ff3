//! noon_options: noon.json parsing and compiler options.
//!
//! A config file supplies defaults for the command-line flags:
//!
//! ```json
//! { "compilerOptions": { "printTokens": true, "color": "never" } }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Options controlling a compile run. Unset fields fall back to the
/// command line, then to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Print the token list before checking.
    pub print_tokens: Option<bool>,
    /// Print the parsed AST.
    pub print_ast: Option<bool>,
    pub color: Option<ColorChoice>,
    /// Enable debug-level logging.
    pub debug: Option<bool>,
}

impl CompilerOptions {
    /// Fill every unset field of `self` from `defaults`.
    pub fn or(self, defaults: &CompilerOptions) -> CompilerOptions {
        CompilerOptions {
            print_tokens: self.print_tokens.or(defaults.print_tokens),
            print_ast: self.print_ast.or(defaults.print_ast),
            color: self.color.or(defaults.color),
            debug: self.debug.or(defaults.debug),
        }
    }
}

/// When diagnostics are colored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stderr is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        }
    }

    /// Decide, given whether the output is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(ConfigError::InvalidColor(other.to_string())),
        }
    }
}

/// The noon.json file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoonConfig {
    pub compiler_options: Option<CompilerOptions>,
}

impl NoonConfig {
    pub fn compiler_options(&self) -> CompilerOptions {
        self.compiler_options.clone().unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color `{0}` (expected auto, always or never)")]
    InvalidColor(String),
}

/// Parse a noon.json file from a string.
pub fn parse_config(content: &str) -> Result<NoonConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a noon.json file from a path.
pub fn load_config(path: impl AsRef<Path>) -> Result<NoonConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&content)
}
