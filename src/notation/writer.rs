//! Writer for the bracket notation.

use crate::model::{Node, Tree};
use crate::parser::utils::escape_label;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Pieces of output still to be written.
enum Piece<'a, T> {
    Subtree(Option<&'a Node<T>>),
    Label(&'a Node<T>),
    Text(&'static str),
}

/// Converts `tree` into the bracket notation, terminated by `;`.
///
/// Works on an explicit stack, so trees of any height can be written.
///
/// # Example
/// ```
/// use trampwick::model::{Node, Tree};
/// use trampwick::notation::to_notation;
///
/// let tree = Tree::new(Node::new("B", Some(Node::boxed_leaf("A")), None));
/// assert_eq!(to_notation(&tree), "(A,B,);");
/// ```
pub fn to_notation<T: Display>(tree: &Tree<T>) -> String {
    let mut out = String::new();
    let mut stack = vec![Piece::Subtree(tree.root())];

    while let Some(piece) = stack.pop() {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Label(node) => out.push_str(&escape_label(&node.value().to_string())),
            Piece::Subtree(None) => {}
            Piece::Subtree(Some(node)) if node.is_leaf() => {
                stack.push(Piece::Label(node));
            }
            Piece::Subtree(Some(node)) => {
                // Reverse order of "(left,label,right)"
                stack.push(Piece::Text(")"));
                stack.push(Piece::Subtree(node.right()));
                stack.push(Piece::Text(","));
                stack.push(Piece::Label(node));
                stack.push(Piece::Text(","));
                stack.push(Piece::Subtree(node.left()));
                stack.push(Piece::Text("("));
            }
        }
    }

    out.push(';');
    out
}

/// Writes `tree` in bracket notation to a file, followed by a newline.
pub fn write_notation_file<T: Display, P: AsRef<Path>>(path: P, tree: &Tree<T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", to_notation(tree))?;
    writer.flush()
}

/// Joins the values of an (inorder) sequence with `separator`.
///
/// # Example
/// ```
/// use trampwick::notation::format_inorder;
///
/// assert_eq!(format_inorder(['D', 'H', 'B'].iter(), " "), "D H B");
/// assert_eq!(format_inorder(Vec::<u8>::new(), ", "), "");
/// ```
pub fn format_inorder<I>(values: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&value.to_string());
    }
    out
}
