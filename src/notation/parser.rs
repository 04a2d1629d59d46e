//! Recursive descent parser for the bracket notation.

use crate::model::{Link, Node, Tree};
use crate::parser::byte_parser::ByteParser;
use crate::parser::parsing_error::ParsingError;
use crate::parser::utils::LABEL_DELIMITERS;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Parses a complete tree, optionally terminated by `;`, from `parser`.
///
/// Anything but whitespace and comments after the tree is an error.
///
/// # Returns
/// * `Ok(Tree<T>)` - The parsed tree (possibly empty)
/// * `Err(ParsingError)` - If the notation is invalid or a label cannot
///   be converted into a `T`
pub fn parse_tree<T>(parser: &mut ByteParser<'_>) -> Result<Tree<T>, ParsingError>
where
    T: FromStr,
    T::Err: Display,
{
    let root = parse_subtree(parser)?;

    parser.skip_comment_and_whitespace()?;
    parser.consume_if(b';');
    parser.skip_comment_and_whitespace()?;
    if !parser.is_eof() {
        return Err(ParsingError::trailing_input(parser));
    }

    let tree = Tree::from_link(root);
    debug!(target: "trampwick::notation::parser", nodes = tree.len(), "parsed tree");
    Ok(tree)
}

/// Parses a subtree and returns its root link:
/// - nothing before `,`, `)`, `;` or end of input: empty subtree
/// - `(left,label,right)`: inner node
/// - otherwise: a leaf label
fn parse_subtree<T>(parser: &mut ByteParser<'_>) -> Result<Link<T>, ParsingError>
where
    T: FromStr,
    T::Err: Display,
{
    parser.skip_comment_and_whitespace()?;
    match parser.peek() {
        None | Some(b',') | Some(b')') | Some(b';') => Ok(None),
        Some(b'(') => parse_inner(parser).map(Some),
        Some(_) => {
            let value = parse_value(parser)?.ok_or_else(|| ParsingError::unexpected(parser, "a label"))?;
            Ok(Some(Node::boxed_leaf(value)))
        }
    }
}

/// Parses `(left,label,right)`, the parser being at `(`.
fn parse_inner<T>(parser: &mut ByteParser<'_>) -> Result<Box<Node<T>>, ParsingError>
where
    T: FromStr,
    T::Err: Display,
{
    expect(parser, b'(', "'('")?;
    let left = parse_subtree(parser)?;
    expect(parser, b',', "',' after left subtree")?;

    parser.skip_comment_and_whitespace()?;
    let value = parse_value(parser)?.ok_or_else(|| ParsingError::empty_label(parser))?;

    expect(parser, b',', "',' after label")?;
    let right = parse_subtree(parser)?;
    expect(parser, b')', "')' after right subtree")?;

    Ok(Node::boxed(value, left, right))
}

/// Parses a label at the current position and converts it.
///
/// # Returns
/// * `Ok(None)` if there is no label at all (not even an empty quoted one)
/// * `Ok(Some(value))` otherwise
fn parse_value<T>(parser: &mut ByteParser<'_>) -> Result<Option<T>, ParsingError>
where
    T: FromStr,
    T::Err: Display,
{
    let start = parser.position();
    let label = parser.parse_label(LABEL_DELIMITERS)?;
    if parser.position() == start {
        return Ok(None);
    }

    label
        .parse::<T>()
        .map(Some)
        .map_err(|e| ParsingError::invalid_value(parser, label.clone(), e.to_string()))
}

fn expect(parser: &mut ByteParser<'_>, byte: u8, what: &'static str) -> Result<(), ParsingError> {
    parser.skip_comment_and_whitespace()?;
    if parser.consume_if(byte) {
        Ok(())
    } else {
        Err(ParsingError::unexpected(parser, what))
    }
}
