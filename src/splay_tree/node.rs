use crate::splay_tree::tree::Tree;
use std::mem;

pub struct Node<T> {
    pub key: T,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }

    /// Pulls the right child up into this slot; this node becomes the left child of its former
    /// right child.
    ///
    /// # Panics
    ///
    /// Panics if there is no right child.
    pub fn rotate_left(&mut self) {
        let mut child = self.right.take().expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.left = Some(child);
    }

    /// Pulls the left child up into this slot; this node becomes the right child of its former
    /// left child.
    ///
    /// # Panics
    ///
    /// Panics if there is no left child.
    pub fn rotate_right(&mut self) {
        let mut child = self.left.take().expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.right = Some(child);
    }
}
