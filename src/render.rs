//! Text renderings of a tree's shape. Both walk the tree in pre-order with an explicit stack and
//! only read keys and child links.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::render::{Connector, Indented};
//! use ordered_tree::tree::OrderedTree;
//!
//! let tree: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
//!
//! assert_eq!(
//!     Indented::new(&tree).to_string(),
//!     "Root: 2\n    L--- 1\n    R--- 3\n"
//! );
//! assert_eq!(Connector::new(&tree).to_string(), "2\n├── 1\n└── 3\n");
//! ```

use std::fmt;

use crate::tree::{Node, OrderedTree};

const INDENT: usize = 4;

/// Renders one node per line, indented by depth, with `L--- ` and `R--- ` marking the side of
/// each child. A node with only one child shows the other as `None`.
pub struct Indented<'a, K> {
    tree: &'a OrderedTree<K>,
}

impl<'a, K> Indented<'a, K> {
    /// Wraps `tree` for rendering.
    pub fn new(tree: &'a OrderedTree<K>) -> Self {
        Self { tree }
    }
}

enum Line<'a, K> {
    Present(&'a Node<K>),
    Missing,
}

impl<'a, K> fmt::Display for Indented<'a, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(Line<'_, K>, usize, &str)> = match self.tree.root() {
            Some(root) => vec![(Line::Present(root), 0, "Root: ")],
            None => return Ok(()),
        };

        while let Some((line, depth, label)) = stack.pop() {
            let indent = depth * INDENT;
            let node = match line {
                Line::Present(node) => node,
                Line::Missing => {
                    writeln!(f, "{:indent$}{}None", "", label, indent = indent)?;
                    continue;
                }
            };
            writeln!(f, "{:indent$}{}{}", "", label, node.key(), indent = indent)?;

            if node.is_leaf() {
                continue;
            }
            // Right goes on the stack first so the left subtree is written first.
            for (child, label) in [(node.right(), "R--- "), (node.left(), "L--- ")].iter() {
                let line = match child {
                    Some(child) => Line::Present(*child),
                    None => Line::Missing,
                };
                stack.push((line, depth + 1, *label));
            }
        }

        Ok(())
    }
}

/// Renders the tree with box-drawing connectors: `├── ` leads a left child and `└── ` a right
/// child. Missing children are not drawn.
pub struct Connector<'a, K> {
    tree: &'a OrderedTree<K>,
}

impl<'a, K> Connector<'a, K> {
    /// Wraps `tree` for rendering.
    pub fn new(tree: &'a OrderedTree<K>) -> Self {
        Self { tree }
    }
}

impl<'a, K> fmt::Display for Connector<'a, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = match self.tree.root() {
            Some(root) => root,
            None => return Ok(()),
        };
        writeln!(f, "{}", root.key())?;

        // Each entry is a child, the prefix for its own line, and the connector before its key.
        let mut stack = Vec::new();
        push_children(&mut stack, root, String::new());

        while let Some((node, prefix, connector)) = stack.pop() {
            writeln!(f, "{}{}{}", prefix, connector, node.key())?;

            let extension = if connector == LEFT { "│   " } else { "    " };
            push_children(&mut stack, node, prefix + extension);
        }

        Ok(())
    }
}

const LEFT: &str = "├── ";
const RIGHT: &str = "└── ";

fn push_children<'a, K>(
    stack: &mut Vec<(&'a Node<K>, String, &'static str)>,
    node: &'a Node<K>,
    prefix: String,
) {
    if let Some(right) = node.right() {
        stack.push((right, prefix.clone(), RIGHT));
    }
    if let Some(left) = node.left() {
        stack.push((left, prefix, LEFT));
    }
}
