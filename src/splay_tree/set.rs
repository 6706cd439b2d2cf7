use crate::splay_tree::node::Node;
use crate::splay_tree::record::Traverse;
use crate::splay_tree::tree::{self, Tree};
use crate::splay_tree::{Error, Result};
use std::borrow::Borrow;
use std::fmt;

/// An ordered set implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed keys are quick to access again. `insert`, `remove` and `search` "splay" the accessed
/// key, or its nearest neighbour when it is absent, to the root of the tree.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplaySet;
///
/// let mut set = SplaySet::new();
/// set.insert(10).unwrap();
/// set.insert(5).unwrap();
/// set.insert(15).unwrap();
///
/// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&5, &10, &15]);
/// assert_eq!(set.root(), Some(&15));
///
/// assert!(set.search(&5));
/// assert_eq!(set.root(), Some(&5));
///
/// assert_eq!(set.remove(&10), Some(10));
/// assert_eq!(set.len(), 2);
/// ```
pub struct SplaySet<T> {
    tree: Tree<T>,
    len: usize,
    node_limit: Option<usize>,
}

impl<T> SplaySet<T> {
    /// Constructs a new, empty `SplaySet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// ```
    pub fn new() -> Self {
        SplaySet {
            tree: None,
            len: 0,
            node_limit: None,
        }
    }

    /// Constructs a new, empty `SplaySet<T>` that will hold at most `limit` keys. Inserting a new
    /// key into a full set fails with `Error::NodeLimitReached`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::{Error, SplaySet};
    ///
    /// let mut set = SplaySet::with_node_limit(1);
    /// assert_eq!(set.insert(1), Ok(true));
    /// assert_eq!(set.insert(1), Ok(false));
    /// assert_eq!(set.insert(2), Err(Error::NodeLimitReached { limit: 1 }));
    /// ```
    pub fn with_node_limit(limit: usize) -> Self {
        SplaySet {
            tree: None,
            len: 0,
            node_limit: Some(limit),
        }
    }

    /// Returns the maximum number of keys the set may hold, if it is bounded.
    pub fn node_limit(&self) -> Option<usize> {
        self.node_limit
    }

    /// Inserts a key into the set and splays it to the root. Returns `Ok(true)` if the key was
    /// added and `Ok(false)` if it was already present, in which case nothing is allocated.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeLimitReached` if the key is absent and the set is at its node limit.
    /// The set keeps its keys, though the tree has been splayed around `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert_eq!(set.insert(1), Ok(true));
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Ok(false));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> Result<bool>
    where
        T: Ord,
    {
        let SplaySet {
            ref mut tree,
            ref mut len,
            node_limit,
        } = *self;
        let inserted = tree::insert(tree, key, |key| {
            match node_limit {
                Some(limit) if *len >= limit => {
                    debug!("refusing to allocate a node: limit of {} reached", limit);
                    Err(Error::NodeLimitReached { limit })
                },
                _ => Ok(Box::new(Node::new(key))),
            }
        })?;
        if inserted {
            *len += 1;
        }
        Ok(inserted)
    }

    /// Removes a key from the set. If the key exists in the set, it will return the removed key.
    /// Otherwise it will return `None` and its nearest neighbour becomes the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let ret = tree::remove(&mut self.tree, key);
        match ret {
            Some(_) => self.len -= 1,
            None => trace!("remove missed; tree splayed around its nearest neighbour"),
        }
        ret
    }

    /// Splays a key to the root of the tree and returns `true` if it exists in the set. If it does
    /// not, the last node on its search path becomes the root instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    /// assert!(set.search(&1));
    /// assert_eq!(set.root(), Some(&1));
    /// assert!(!set.search(&4));
    /// assert_eq!(set.root(), Some(&3));
    /// ```
    pub fn search<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let found = tree::search(&mut self.tree, key);
        if !found {
            trace!("search missed; tree splayed around its nearest neighbour");
        }
        found
    }

    /// Checks if a key exists in the set. Note that `contains` does not splay the tree in order to
    /// use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1).unwrap();
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::contains(&self.tree, key)
    }

    /// Returns the key at the root of the tree, which is the most recently accessed key or its
    /// nearest neighbour. Returns `None` if the set is empty.
    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.key)
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all keys. The node limit is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1).unwrap();
    /// set.insert(2).unwrap();
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::dismantle(&mut self.tree);
        self.len = 0;
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal
    /// and does not restructure the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplaySetIter<T> {
        SplaySetIter {
            traverse: self.traverse(),
        }
    }

    /// Returns an iterator over the nodes of the set in ascending key order. Each `Record` holds
    /// a key and the keys of its immediate children. The tree is not restructured.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(10).unwrap();
    /// set.insert(5).unwrap();
    ///
    /// let lines: Vec<String> = set.traverse().map(|record| record.to_string()).collect();
    /// assert_eq!(lines, vec!["key: 5    right child:  10", "key: 10"]);
    /// ```
    pub fn traverse(&self) -> Traverse<T> {
        Traverse::new(&self.tree)
    }
}

impl<T> Drop for SplaySet<T> {
    fn drop(&mut self) {
        tree::dismantle(&mut self.tree);
    }
}

impl<T> IntoIterator for SplaySet<T> {
    type IntoIter = SplaySetIntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SplaySet<T>
where
    T: 'a,
{
    type IntoIter = SplaySetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SplaySet<T>`.
///
/// This iterator traverses the keys of the set in-order and yields owned keys.
pub struct SplaySetIntoIter<T> {
    current: Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for SplaySetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

impl<T> Drop for SplaySetIntoIter<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

/// An iterator for `SplaySet<T>`.
///
/// This iterator traverses the keys of the set in-order and yields immutable references.
pub struct SplaySetIter<'a, T>
where
    T: 'a,
{
    traverse: Traverse<'a, T>,
}

impl<'a, T> Iterator for SplaySetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.traverse.next().map(|record| record.key)
    }
}

impl<T> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SplaySet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
