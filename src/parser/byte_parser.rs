//! Low-level byte-by-byte parser for ASCII text.
//!
//! This module provides [ByteParser] with support for peeking, consuming,
//! skipping whitespace and `[...]` comments, and quote-aware label parsing.
//! Used as the foundation of the [notation](crate::notation) parser.

use crate::parser::parsing_error::ParsingError;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser over an in-memory input.
///
/// Assumes the syntax is ASCII; non-ASCII bytes are only ever part of
/// labels and are passed through untouched.
///
/// # Example
/// ```
/// use trampwick::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("  [comment] (A");
/// parser.skip_comment_and_whitespace().unwrap();
/// assert!(parser.consume_if(b'('));
/// assert_eq!(parser.peek(), Some(b'A'));
/// ```
pub struct ByteParser<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> ByteParser<'a> {
    /// Creates a new `ByteParser` over the given string.
    pub fn for_str(input: &'a str) -> Self {
        Self::for_bytes(input.as_bytes())
    }

    /// Creates a new `ByteParser` over the given bytes.
    pub fn for_bytes(input: &'a [u8]) -> Self {
        ByteParser { input, position: 0 }
    }

    /// Returns the current position (number of consumed bytes).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if all input has been consumed.
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Peeks at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Gets the current byte and advances the position (consumes it).
    #[inline(always)]
    pub fn next(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Some(byte)
    }

    /// Consumes the current byte if it equals `byte`.
    ///
    /// # Returns
    /// `true` if the byte was consumed, `false` otherwise
    pub fn consume_if(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Skips (consumes) all consecutive whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    /// Skips (consumes) a `[...]` comment if present.
    ///
    /// # Returns
    /// * `Ok(true)` - A comment was found and consumed
    /// * `Ok(false)` - No comment at current position
    /// * `Err(ParsingError)` - Comment was opened but never closed
    pub fn skip_comment(&mut self) -> Result<bool, ParsingError> {
        if !self.consume_if(b'[') {
            return Ok(false);
        }

        while let Some(b) = self.next() {
            if b == b']' {
                return Ok(true);
            }
        }

        Err(ParsingError::unclosed_comment(self))
    }

    /// Skips (consumes) all consecutive whitespace and comments.
    pub fn skip_comment_and_whitespace(&mut self) -> Result<(), ParsingError> {
        self.skip_whitespace();

        while self.skip_comment()? {
            self.skip_whitespace();
        }

        Ok(())
    }

    /// Parses a label, either single-quoted or unquoted.
    ///
    /// * Quoted: everything up to the closing `'`, with `''` standing for
    ///   a literal quote.
    /// * Unquoted: everything up to (excluding) a delimiter, whitespace or
    ///   the end of input, with `_` standing for a space.
    ///
    /// # Returns
    /// * `Ok(String)` - The unescaped label, empty if the parser is at a delimiter
    /// * `Err(ParsingError)` - If a quote is never closed or the label is
    ///   not valid UTF-8
    pub fn parse_label(&mut self, delimiters: &[u8]) -> Result<String, ParsingError> {
        if self.consume_if(b'\'') {
            return self.parse_quoted_label();
        }

        let start = self.position;
        while let Some(b) = self.peek() {
            if delimiters.contains(&b) || b.is_ascii_whitespace() {
                break;
            }
            self.position += 1;
        }

        match std::str::from_utf8(&self.input[start..self.position]) {
            Ok(raw) => Ok(raw.replace('_', " ")),
            Err(_) => {
                self.position = start;
                Err(ParsingError::invalid_utf8(self))
            }
        }
    }

    /// Parses the rest of a quoted label, the opening quote already consumed.
    fn parse_quoted_label(&mut self) -> Result<String, ParsingError> {
        let mut bytes = Vec::new();
        loop {
            match self.next() {
                None => return Err(ParsingError::unclosed_quote(self)),
                Some(b'\'') => {
                    if self.consume_if(b'\'') {
                        bytes.push(b'\'');
                    } else {
                        break;
                    }
                }
                Some(b) => bytes.push(b),
            }
        }

        String::from_utf8(bytes).map_err(|_| ParsingError::invalid_utf8(self))
    }

    /// Returns up to `length` upcoming bytes as a (lossy) string, for
    /// error reporting. Does not consume anything.
    pub fn get_context_as_string(&self, length: usize) -> String {
        let start = self.position.min(self.input.len());
        let end = (start + length).min(self.input.len());
        String::from_utf8_lossy(&self.input[start..end]).into_owned()
    }
}
