//! noon: The noon scanner and diagnostic front end.
//!
//! Usage:
//!   noon -c <source>
//!   noon [options] <file>
//!
//! Diagnostics are printed to stderr as `<file>:<line>:<col>: error: <msg>`
//! followed by the offending source line. The exit code is 1 when an error
//! was reported and 0 otherwise.

mod error;
mod logging;

use clap::Parser as ClapParser;
use error::CliError;
use noon_compiler::{compile_file, compile_snippet, CompileOutput};
use noon_diagnostics::emitter::Emitter;
use noon_options::{ColorChoice, CompilerOptions};
use std::process;
use std::str::FromStr;

#[derive(ClapParser, Debug)]
#[command(
    name = "noon",
    version,
    about = "noon - scanner and diagnostic front end for the noon language"
)]
struct Cli {
    /// Source to compile, under the file name `<string>`.
    #[arg(short = 'c', long = "command", value_name = "SOURCE", conflicts_with = "file")]
    command: Option<String>,

    /// File to compile.
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Print the token list to stdout.
    #[arg(long = "print-tokens")]
    print_tokens: bool,

    /// Print the parsed AST to stdout.
    #[arg(long = "print-ast")]
    print_ast: bool,

    /// When to color diagnostics: auto, always or never.
    #[arg(long, value_name = "WHEN", value_parser = parse_color)]
    color: Option<ColorChoice>,

    /// JSON config file supplying defaults for the flags above.
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Enable debug logging on stderr.
    #[arg(short = 'd', long)]
    debug: bool,
}

impl Cli {
    /// Flags given on the command line. Unset flags stay `None` so the
    /// config file can fill them in.
    fn options(&self) -> CompilerOptions {
        CompilerOptions {
            print_tokens: self.print_tokens.then_some(true),
            print_ast: self.print_ast.then_some(true),
            color: self.color,
            debug: self.debug.then_some(true),
        }
    }
}

fn parse_color(value: &str) -> Result<ColorChoice, String> {
    ColorChoice::from_str(value).map_err(|e| e.to_string())
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e.to_string());
            1
        }
    };
    process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32, CliError> {
    let file_options = match cli.config {
        Some(ref path) => noon_options::load_config(path)?.compiler_options(),
        None => CompilerOptions::default(),
    };
    let options = cli.options().or(&file_options);
    let use_color = options
        .color
        .unwrap_or_default()
        .enabled(stderr_is_terminal());

    logging::init(options.debug.unwrap_or(false), use_color);
    tracing::debug!(target: "noon::cli", ?options, "options resolved");

    let output = compile_input(cli, &options)?;
    print_listings(&output);

    let emitter = Emitter::new(&output.source_text, use_color);
    for diag in output.diagnostics.diagnostics() {
        eprint!("{}", emitter.render(diag));
    }

    match output.error() {
        Some(error) => {
            tracing::debug!(target: "noon::cli", %error, "exiting with failure");
            Ok(1)
        }
        None => Ok(0),
    }
}

fn compile_input(cli: &Cli, options: &CompilerOptions) -> Result<CompileOutput, CliError> {
    match (&cli.command, &cli.file) {
        (Some(source), _) => Ok(compile_snippet(source, options)),
        (None, Some(path)) => compile_file(path, options).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        }),
        (None, None) => Err(CliError::NoInput),
    }
}

fn print_listings(output: &CompileOutput) {
    if let Some(ref tokens) = output.token_listing {
        print!("{}", tokens);
    }
    if let Some(ref ast) = output.ast_listing {
        println!("{}", ast);
    }
}

fn print_error(msg: &str) {
    if stderr_is_terminal() {
        eprintln!("noon: {}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("noon: error: {}", msg);
    }
}

fn stderr_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}
