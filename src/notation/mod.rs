//! Bracket notation parser and writer for binary trees.
//!
//! A small, Newick-flavoured text format where every inner node lists its
//! left subtree, its own label and its right subtree, in that order. Reading
//! a tree left to right therefore already gives its inorder sequence.
//!
//! # Quick API
//! * [`parse_str`] - parses a single string into a [`Tree`]
//! * [`parse_file`] - parses the (single) tree in a file
//! * [`to_notation`] - writes a tree back into the notation
//! * [`format_inorder`] - joins a traversal's output for printing
//!
//! # Format
//! * `tree ::= subtree [';']`
//! * `subtree ::= '' | label | '(' subtree ',' label ',' subtree ')'`
//! * `label ::= unquoted | "'" quoted "'"`
//!
//! Furthermore:
//! * Whitespace can occur between elements, just not within an unquoted label
//! * An empty subtree is simply nothing, e.g. `(,A,)` is a single node
//! * Inner nodes must have a label; `''` counts as one (the empty string)
//! * Underscores in unquoted labels stand for spaces
//! * Quoted labels may contain anything, with `''` for a literal quote
//! * Comments are square brackets and can occur wherever whitespace can

mod parser;
pub mod writer;

pub use self::parser::parse_tree;
pub use self::writer::{format_inorder, to_notation, write_notation_file};

use crate::model::Tree;
use crate::parser::byte_parser::ByteParser;
use crate::parser::ParsingError;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// The classic ten node example tree; its inorder sequence is
/// `D H B E A F C I G J`.
pub const SAMPLE_TREE: &str = "(((,D,H),B,E),A,(F,C,(I,G,J)));";

/// Parses a single tree from the bracket notation.
///
/// Labels are converted into `T` with [`FromStr`], so the same text can be
/// read as a `Tree<String>`, or as a `Tree<u32>` if all labels are numbers.
///
/// # Arguments
/// * `notation` - The string to parse, the trailing `;` being optional
///
/// # Returns
/// * [`Tree<T>`] - Tree parsed from the string (empty for blank input)
/// * [`ParsingError`] - If the string is not valid notation
///
/// # Example
/// ```
/// use trampwick::notation::parse_str;
///
/// let tree = parse_str::<u32>("((,1,2),3,4);").unwrap();
/// assert_eq!(tree.len(), 4);
/// assert!(parse_str::<u32>("(,x,)").is_err());
/// ```
pub fn parse_str<T>(notation: impl AsRef<str>) -> Result<Tree<T>, ParsingError>
where
    T: FromStr,
    T::Err: Display,
{
    let mut byte_parser = ByteParser::for_str(notation.as_ref());
    parse_tree(&mut byte_parser)
}

/// Parses the tree stored in a file.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * [`Tree<T>`] - The parsed tree
/// * [`ParsingError`] - If reading the file fails or the notation is invalid
pub fn parse_file<T, P>(path: P) -> Result<Tree<T>, ParsingError>
where
    T: FromStr,
    T::Err: Display,
    P: AsRef<Path>,
{
    let contents = std::fs::read(path)?;
    let mut byte_parser = ByteParser::for_bytes(&contents);
    parse_tree(&mut byte_parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsingErrorType;
    use pretty_assertions::assert_eq;

    fn values<T: Clone>(tree: &Tree<T>) -> Vec<T> {
        tree.inorder().cloned().collect()
    }

    #[test]
    fn test_parse_sample_tree() {
        let tree: Tree<String> = parse_str(SAMPLE_TREE).unwrap();
        assert_eq!(tree.len(), 10);
        assert_eq!(tree.root().map(|n| n.value().as_str()), Some("A"));
        assert_eq!(format_inorder(tree.inorder(), " "), "D H B E A F C I G J");
    }

    #[test]
    fn test_parse_empty_and_single() {
        let empty: Tree<String> = parse_str("").unwrap();
        assert!(empty.is_empty());
        let empty: Tree<String> = parse_str("  ; ").unwrap();
        assert!(empty.is_empty());

        let single: Tree<String> = parse_str("Kiwi").unwrap();
        assert_eq!(values(&single), vec!["Kiwi".to_string()]);
        let single: Tree<String> = parse_str("(,Kiwi,);").unwrap();
        assert_eq!(values(&single), vec!["Kiwi".to_string()]);
    }

    #[test]
    fn test_parse_whitespace_comments_and_quotes() {
        let tree: Tree<String> =
            parse_str(" ( Little_owl [ruru] , 'Baillon''s crake' ,\n ( ,x, ) ) ;").unwrap();
        assert_eq!(
            values(&tree),
            vec!["Little owl".to_string(), "Baillon's crake".to_string(), "x".to_string()]
        );
    }

    #[test]
    fn test_parse_numbers() {
        let tree: Tree<i64> = parse_str("((,-1,2),3,(,4,))").unwrap();
        assert_eq!(values(&tree), vec![-1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_errors() {
        let err = parse_str::<String>("(A,,B)").unwrap_err();
        assert_eq!(*err.kind(), ParsingErrorType::EmptyLabel);
        assert_eq!(err.position(), 3);

        let err = parse_str::<u8>("(1,300,2)").unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::InvalidValue { label, .. } if label == "300"));

        let err = parse_str::<String>("(A,B,C);D").unwrap_err();
        assert_eq!(*err.kind(), ParsingErrorType::TrailingInput);

        let err = parse_str::<String>("(A,B,C").unwrap_err();
        assert_eq!(*err.kind(), ParsingErrorType::UnexpectedEof);

        let err = parse_str::<String>("(A,B)").unwrap_err();
        assert_eq!(
            *err.kind(),
            ParsingErrorType::UnexpectedChar {
                expected: "',' after label",
                found: ')'
            }
        );

        let err = parse_str::<String>("(A,'B,C)").unwrap_err();
        assert_eq!(*err.kind(), ParsingErrorType::UnclosedQuote);

        let err = parse_str::<String>("(A,B,C)[").unwrap_err();
        assert_eq!(*err.kind(), ParsingErrorType::UnclosedComment);
    }

    #[test]
    fn test_written_notation_parses_back() {
        let tree: Tree<String> =
            parse_str("((,'a,b',Swamp_hen),'',('x_y',C,'it''s'))").unwrap();
        let written = to_notation(&tree);
        assert_eq!(written, "((,'a,b',Swamp_hen),'',('x_y',C,'it''s'));");
        let reread: Tree<String> = parse_str(&written).unwrap();
        assert_eq!(values(&reread), values(&tree));
    }

    #[test]
    fn test_parse_file() {
        let path = std::env::temp_dir().join(format!("trampwick_notation_{}.tree", std::process::id()));
        let tree: Tree<String> = parse_str(SAMPLE_TREE).unwrap();
        write_notation_file(&path, &tree).unwrap();
        let reread: Tree<String> = parse_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(values(&reread), values(&tree));

        let err = parse_file::<String, _>(path).unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::Io(_)));
    }
}
