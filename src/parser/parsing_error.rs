//! Error types for the bracket notation parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for
//! representing and reporting errors that occur while reading a tree.

use crate::parser::byte_parser::ByteParser;
use thiserror::Error;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 30;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing the bracket notation.
#[derive(PartialEq, Debug, Clone, Error)]
pub enum ParsingErrorType {
    #[error("IO error - {0}")]
    Io(String),
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error("Expected {expected} but found {found:?}")]
    UnexpectedChar { expected: &'static str, found: char },
    #[error("Inner node without label")]
    EmptyLabel,
    #[error("Invalid value '{label}' - {reason}")]
    InvalidValue { label: String, reason: String },
    #[error("Unexpected input after end of tree")]
    TrailingInput,
    #[error("Unclosed comment")]
    UnclosedComment,
    #[error("Unclosed quoted label")]
    UnclosedQuote,
    #[error("Label is not valid UTF-8")]
    InvalidUtf8,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and following bytes).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at position {position}{}", context_suffix(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

fn context_suffix(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next {} bytes): {}", context.len(), context)
    }
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser(kind: ParsingErrorType, parser: &ByteParser<'_>) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnexpectedEof
    pub fn unexpected_eof(parser: &ByteParser<'_>) -> Self {
        Self::from_parser(ParsingErrorType::UnexpectedEof, parser)
    }

    /// Convenience constructor for UnexpectedChar, reporting the current
    /// byte (or end of input if there is none)
    pub fn unexpected(parser: &ByteParser<'_>, expected: &'static str) -> Self {
        match parser.peek() {
            Some(found) => Self::from_parser(
                ParsingErrorType::UnexpectedChar {
                    expected,
                    found: char::from(found),
                },
                parser,
            ),
            None => Self::unexpected_eof(parser),
        }
    }

    /// Convenience constructor for EmptyLabel
    pub fn empty_label(parser: &ByteParser<'_>) -> Self {
        Self::from_parser(ParsingErrorType::EmptyLabel, parser)
    }

    /// Convenience constructor for InvalidValue
    pub fn invalid_value(parser: &ByteParser<'_>, label: String, reason: String) -> Self {
        Self::from_parser(ParsingErrorType::InvalidValue { label, reason }, parser)
    }

    /// Convenience constructor for TrailingInput
    pub fn trailing_input(parser: &ByteParser<'_>) -> Self {
        Self::from_parser(ParsingErrorType::TrailingInput, parser)
    }

    /// Convenience constructor for UnclosedComment
    pub fn unclosed_comment(parser: &ByteParser<'_>) -> Self {
        Self::from_parser(ParsingErrorType::UnclosedComment, parser)
    }

    /// Convenience constructor for UnclosedQuote
    pub fn unclosed_quote(parser: &ByteParser<'_>) -> Self {
        Self::from_parser(ParsingErrorType::UnclosedQuote, parser)
    }

    /// Convenience constructor for InvalidUtf8
    pub fn invalid_utf8(parser: &ByteParser<'_>) -> Self {
        Self::from_parser(ParsingErrorType::InvalidUtf8, parser)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError {
            kind: ParsingErrorType::Io(err.to_string()),
            position: 0,            // No position for IO errors
            context: String::new(), // No parsing context
        }
    }
}
