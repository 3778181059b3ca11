//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::IsTerminal;

use miette::{GraphicalReportHandler, GraphicalTheme};
use treetype_syntax::config::ParseConfig;
use treetype_syntax::diagnostics::ParseError;
use treetype_syntax::token::Token;
use treetype_syntax::{parser, tree_literal};

use super::{CliError, CliResult, ExitCode};

/// Parse a type expression given one token per argument and print its AST.
pub fn type_command(args: &[String], strict: bool) -> CliResult<ExitCode> {
    let tokens = classify_all(args);
    let config = if strict { ParseConfig::strict() } else { ParseConfig::default() };

    let ty = parser::parse_with_config(&tokens, &config).map_err(|err| parse_failure(&err))?;
    println!("{:#?}", ty);
    Ok(ExitCode::SUCCESS)
}

/// Parse a binary-tree literal given one token per argument and print it.
pub fn tree_command(args: &[String]) -> CliResult<ExitCode> {
    let tokens = classify_all(args);

    let tree = tree_literal::parse(&tokens).map_err(|err| parse_failure(&err))?;
    match tree.as_number() {
        Some(n) if !tree.is_nil() => println!("{tree}\n= {n}"),
        _ => println!("{tree}"),
    }
    Ok(ExitCode::SUCCESS)
}

fn classify_all(args: &[String]) -> Vec<Token> {
    let tokens: Vec<Token> = args.iter().map(|arg| Token::classify(arg)).collect();
    tracing::debug!(token_count = tokens.len(), "classified arguments");
    tokens
}

/// Render a parse error as a miette report.
fn parse_failure(err: &ParseError) -> CliError {
    let theme = if std::io::stderr().is_terminal() {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let mut rendered = String::new();
    if GraphicalReportHandler::new_themed(theme)
        .render_report(&mut rendered, err)
        .is_err()
    {
        rendered = err.to_string();
    }
    CliError::failure(rendered.trim_end())
}
