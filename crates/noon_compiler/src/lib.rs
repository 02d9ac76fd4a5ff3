//! noon_compiler: Compiler orchestration.
//!
//! Runs a source through scan -> parse -> check, collecting the warnings met
//! along the way and at most one error.

use bumpalo::Bump;
use noon_ast::syntax_kind::SyntaxKind;
use noon_checker::Checker;
use noon_diagnostics::{Diagnostic, DiagnosticCollection};
use noon_options::CompilerOptions;
use noon_parser::Parser;
use noon_scanner::{Scanner, Token};
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, info_span};

/// File name used for sources given on the command line.
pub const STRING_FILE_NAME: &str = "<string>";

/// The result of compiling one source.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub file_name: String,
    pub source_text: String,
    /// Warnings in source order, followed by the error if there was one.
    pub diagnostics: DiagnosticCollection,
    /// `[index] kind: lexeme` per token, when `printTokens` is set and the
    /// scan succeeded.
    pub token_listing: Option<String>,
    /// The AST in `Debug` form, when `printAst` is set and the parse succeeded.
    pub ast_listing: Option<String>,
}

impl CompileOutput {
    /// The error that stopped the compile, if any.
    pub fn error(&self) -> Option<&Diagnostic> {
        self.diagnostics.first_error()
    }
}

/// Run one source through the pipeline.
pub fn compile_source(
    arena: &Bump,
    file_name: &str,
    source_text: &str,
    options: &CompilerOptions,
) -> CompileOutput {
    let _span = info_span!(target: "noon::compiler", "compile", file = %file_name).entered();
    let mut output = CompileOutput {
        file_name: file_name.to_string(),
        source_text: source_text.to_string(),
        diagnostics: DiagnosticCollection::new(),
        token_listing: None,
        ast_listing: None,
    };

    if let Err(error) = run_passes(arena, file_name, source_text, options, &mut output) {
        debug!(target: "noon::compiler", error = %error, "compile failed");
        output.diagnostics.add(error.with_file(file_name));
    } else {
        debug!(
            target: "noon::compiler",
            warnings = output.diagnostics.len(),
            "compile succeeded"
        );
    }
    output
}

/// Compile a `-c` snippet under the name `<string>`.
pub fn compile_snippet(source_text: &str, options: &CompilerOptions) -> CompileOutput {
    let arena = Bump::new();
    compile_source(&arena, STRING_FILE_NAME, source_text, options)
}

/// Read a file and compile it under its path.
pub fn compile_file(
    path: impl AsRef<Path>,
    options: &CompilerOptions,
) -> Result<CompileOutput, std::io::Error> {
    let path = path.as_ref();
    let source_text = std::fs::read_to_string(path)?;
    let arena = Bump::new();
    Ok(compile_source(
        &arena,
        &path.display().to_string(),
        &source_text,
        options,
    ))
}

fn run_passes(
    arena: &Bump,
    file_name: &str,
    source_text: &str,
    options: &CompilerOptions,
    output: &mut CompileOutput,
) -> Result<(), Diagnostic> {
    let tokens = scan_tokens(file_name, source_text, &mut output.diagnostics)?;
    if options.print_tokens.unwrap_or(false) {
        output.token_listing = Some(format_tokens(&tokens));
    }

    let source_file = Parser::new(arena, file_name, tokens).parse_source_file()?;
    if options.print_ast.unwrap_or(false) {
        output.ast_listing = Some(format!("{:#?}", source_file.statements));
    }

    Checker::new().check_source_file(&source_file)
}

/// Scan every token, moving warnings into `diagnostics` even when the scan
/// fails part way.
fn scan_tokens(
    file_name: &str,
    source_text: &str,
    diagnostics: &mut DiagnosticCollection,
) -> Result<Vec<Token>, Diagnostic> {
    let mut scanner = Scanner::new(source_text);
    let mut tokens = Vec::new();
    let result = loop {
        match scanner.scan() {
            Ok(kind) => {
                tokens.push(scanner.token_info());
                if kind == SyntaxKind::EndOfFileToken {
                    break Ok(tokens);
                }
            }
            Err(error) => break Err(error),
        }
    };
    diagnostics.extend(
        scanner
            .take_warnings()
            .into_iter()
            .map(|warning| warning.with_file(file_name)),
    );
    result
}

/// One `[index] kind: lexeme` line per token.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (index, token) in tokens.iter().enumerate() {
        let _ = writeln!(out, "[{index}] {}: {}", token.kind, token.text);
    }
    out
}
