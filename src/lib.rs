//! # calctree
//!
//! calctree is an arithmetic expression engine written in Rust.
//! It tokenizes, parses and evaluates expressions built from numbers, the
//! four basic operators, parentheses and unary minus. It can also rebuild the
//! syntax tree for every prefix of an expression's tokens, which shows how
//! parsing progresses one token at a time.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use tracing::debug;

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::parser::core::{ParseResult, Parser, ParserOptions},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and its operators, which represent an
/// expression as a tree of numbers, binary operations and negations. The AST
/// is built by the parser, walked by the evaluator and read by renderers.
///
/// # Responsibilities
/// - Defines the node shapes and operators.
/// - Represents subtrees that tolerant parsing could not complete.
/// - Provides read-only accessors and a textual dump for display.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while turning text into
/// a number, carrying the byte position of the failure where one exists.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Combines them into a single error for the top-level entry points.
pub mod error;
/// Orchestrates lexing, parsing, evaluation and staged parsing.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Rebuilds the syntax tree for each prefix of the token stream.
pub mod interpreter;

pub use interpreter::stages::{StageList, build_stages};

/// Parses a complete expression in strict mode.
///
/// # Errors
/// Returns a `ParseError` for unreadable text, a missing operand, an
/// unmatched parenthesis or tokens left over after the expression.
///
/// # Examples
/// ```
/// use calctree::ast_build;
///
/// let ast = ast_build("10 - 4 - 2").unwrap();
/// assert_eq!(ast.to_string(), "((10 - 4) - 2)");
///
/// assert!(ast_build("(1 + 2").is_err());
/// ```
pub fn ast_build(source: &str) -> ParseResult<Expr> {
    Parser::new(source, ParserOptions::strict())
        .parse()?
        .ok_or(ParseError::UnexpectedEndOfInput { position: source.len() })
}

/// Parses and evaluates an expression, returning its value.
///
/// Errors are never coerced into a number: malformed input and division by
/// zero both fail the whole call.
///
/// # Errors
/// Returns an [`Error`] if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use calctree::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("(2 + 3) * 4").unwrap(), 20.0);
///
/// let error = evaluate_expression("5 / 0").unwrap_err();
/// assert!(error.is_division_by_zero());
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, Error> {
    let ast = ast_build(source)?;
    let value = ast.evaluate()?;
    debug!(source, value, "evaluated expression");
    Ok(value)
}
