use crate::splay_tree::node::Node;
use crate::splay_tree::tree::Tree;
use std::fmt;

/// A node of a `SplaySet<T>` as seen by an in-order traversal: its key and the keys of its
/// immediate children.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplaySet;
///
/// let mut set = SplaySet::new();
/// set.insert(1).unwrap();
/// set.insert(2).unwrap();
///
/// let record = set.traverse().next().unwrap();
/// assert_eq!(record.key, &1);
/// assert_eq!(record.to_string(), "key: 1");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Record<'a, T>
where
    T: 'a,
{
    pub key: &'a T,
    pub left: Option<&'a T>,
    pub right: Option<&'a T>,
}

impl<'a, T> Record<'a, T> {
    fn new(node: &'a Node<T>) -> Self {
        Record {
            key: &node.key,
            left: node.left.as_ref().map(|child| &child.key),
            right: node.right.as_ref().map(|child| &child.key),
        }
    }
}

impl<'a, T> fmt::Display for Record<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "key: {}", self.key)?;
        if let Some(left) = self.left {
            write!(f, "    left child:  {}", left)?;
        }
        if let Some(right) = self.right {
            write!(f, "    right child:  {}", right)?;
        }
        Ok(())
    }
}

/// An iterator over the nodes of a `SplaySet<T>`.
///
/// This iterator traverses the set in-order without restructuring it and yields a `Record<T>`
/// per node.
pub struct Traverse<'a, T>
where
    T: 'a,
{
    current: &'a Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Traverse {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T>
where
    T: 'a,
{
    type Item = Record<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            Record::new(node)
        })
    }
}
