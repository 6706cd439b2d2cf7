use crate::splay_tree::node::Node;
use crate::splay_tree::Result;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

// Hangs `node` in the empty slot at the tail of a chain and returns the new tail.
fn link_left<T>(tail: &mut Tree<T>, node: Box<Node<T>>) -> &mut Tree<T> {
    &mut tail.get_or_insert(node).left
}

fn link_right<T>(tail: &mut Tree<T>, node: Box<Node<T>>) -> &mut Tree<T> {
    &mut tail.get_or_insert(node).right
}

/// Top-down splay. Afterwards `node` holds `key` if it is present, and otherwise the last node
/// reached on the search path.
fn splay<T, V>(node: &mut Box<Node<T>>, key: &V)
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    // `lesser` collects subtrees with keys below the final root, `greater` those above it.
    let mut lesser: Tree<T> = None;
    let mut greater: Tree<T> = None;
    {
        let mut lesser_tail = &mut lesser;
        let mut greater_tail = &mut greater;
        loop {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => {
                    let should_rotate = match &node.left {
                        Some(child) => key.cmp(child.key.borrow()) == Ordering::Less,
                        None => break,
                    };
                    if should_rotate {
                        node.rotate_right();
                    }

                    let child = match node.left.take() {
                        Some(child) => child,
                        None => break,
                    };
                    greater_tail = link_left(greater_tail, mem::replace(node, child));
                },
                Ordering::Greater => {
                    let should_rotate = match &node.right {
                        Some(child) => key.cmp(child.key.borrow()) == Ordering::Greater,
                        None => break,
                    };
                    if should_rotate {
                        node.rotate_left();
                    }

                    let child = match node.right.take() {
                        Some(child) => child,
                        None => break,
                    };
                    lesser_tail = link_right(lesser_tail, mem::replace(node, child));
                },
                Ordering::Equal => break,
            }
        }

        mem::swap(lesser_tail, &mut node.left);
        mem::swap(greater_tail, &mut node.right);
    }

    node.left = lesser;
    node.right = greater;
}

/// Splays `key` to the root and inserts it there if it is absent. `allocate` is only called when
/// a node has to be created. Returns `Ok(false)` if the key was already present.
pub fn insert<T, F>(tree: &mut Tree<T>, key: T, allocate: F) -> Result<bool>
where
    T: Ord,
    F: FnOnce(T) -> Result<Box<Node<T>>>,
{
    match tree {
        Some(root) => {
            splay(root, &key);
            match key.cmp(&root.key) {
                Ordering::Less => {
                    let mut new_root = allocate(key)?;
                    new_root.left = root.left.take();
                    mem::swap(root, &mut new_root);
                    root.right = Some(new_root);
                    Ok(true)
                },
                Ordering::Greater => {
                    let mut new_root = allocate(key)?;
                    new_root.right = root.right.take();
                    mem::swap(root, &mut new_root);
                    root.left = Some(new_root);
                    Ok(true)
                },
                Ordering::Equal => Ok(false),
            }
        },
        None => {
            *tree = Some(allocate(key)?);
            Ok(true)
        },
    }
}

pub fn remove<T, V>(tree: &mut Tree<T>, key: &V) -> Option<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    if !search(tree, key) {
        return None;
    }

    let Node { key: removed, left, right } = *tree.take()?;
    *tree = match left {
        Some(mut left_child) => {
            // Every key on the left is smaller, so this brings up the maximum, which has no right
            // child.
            splay(&mut left_child, key);
            left_child.right = right;
            Some(left_child)
        },
        None => right,
    };
    Some(removed)
}

pub fn search<T, V>(tree: &mut Tree<T>, key: &V) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match tree {
        Some(root) => {
            splay(root, key);
            root.key.borrow() == key
        },
        None => false,
    }
}

pub fn contains<T, V>(tree: &Tree<T>, key: &V) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match key.cmp(node.key.borrow()) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

/// Releases every node without recursing, since splay trees can degenerate into long paths.
pub fn dismantle<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::{contains, dismantle, insert, remove, search, Tree};
    use crate::splay_tree::node::Node;
    use crate::splay_tree::{Error, Result};

    fn alloc(key: u32) -> Result<Box<Node<u32>>> {
        Ok(Box::new(Node::new(key)))
    }

    fn build(keys: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, *key, alloc).unwrap();
        }
        tree
    }

    fn root_key(tree: &Tree<u32>) -> Option<u32> {
        tree.as_ref().map(|node| node.key)
    }

    // (key, left child key, right child key) in order.
    fn shape(tree: &Tree<u32>) -> Vec<(u32, Option<u32>, Option<u32>)> {
        fn walk(tree: &Tree<u32>, out: &mut Vec<(u32, Option<u32>, Option<u32>)>) {
            if let Some(node) = tree {
                walk(&node.left, out);
                out.push((node.key, root_key(&node.left), root_key(&node.right)));
                walk(&node.right, out);
            }
        }
        let mut out = Vec::new();
        walk(tree, &mut out);
        out
    }

    #[test]
    fn test_insert_empty() {
        let tree = build(&[7]);
        assert_eq!(shape(&tree), vec![(7, None, None)]);
    }

    #[test]
    fn test_insert_shapes() {
        let tree = build(&[10, 5, 15]);
        assert_eq!(root_key(&tree), Some(15));
        assert_eq!(
            shape(&tree),
            vec![(5, None, None), (10, Some(5), None), (15, Some(10), None)],
        );
    }

    #[test]
    fn test_insert_duplicate_skips_allocation() {
        let mut tree = build(&[10, 5, 15]);
        let inserted = insert(&mut tree, 5, |_| Err(Error::NodeLimitReached { limit: 0 }));
        assert_eq!(inserted, Ok(false));
        assert_eq!(root_key(&tree), Some(5));
    }

    #[test]
    fn test_insert_failed_allocation_keeps_keys() {
        let mut tree = build(&[10, 5, 15]);
        let inserted = insert(&mut tree, 12, |_| Err(Error::NodeLimitReached { limit: 3 }));
        assert_eq!(inserted, Err(Error::NodeLimitReached { limit: 3 }));
        let keys: Vec<u32> = shape(&tree).into_iter().map(|(key, _, _)| key).collect();
        assert_eq!(keys, vec![5, 10, 15]);
    }

    #[test]
    fn test_search_zig_zig() {
        // Ascending insertion leaves a left path: 3 -> 2 -> 1.
        let mut tree = build(&[1, 2, 3]);
        assert_eq!(shape(&tree), vec![(1, None, None), (2, Some(1), None), (3, Some(2), None)]);

        assert!(search(&mut tree, &1));
        assert_eq!(
            shape(&tree),
            vec![(1, None, Some(2)), (2, None, Some(3)), (3, None, None)],
        );
    }

    #[test]
    fn test_search_zig_zag() {
        // 1 -> right 3 -> left 2
        let mut right = Node::new(3);
        right.left = Some(Box::new(Node::new(2)));
        let mut root = Node::new(1);
        root.right = Some(Box::new(right));
        let mut tree = Some(Box::new(root));

        assert!(search(&mut tree, &2));
        assert_eq!(
            shape(&tree),
            vec![(1, None, None), (2, Some(1), Some(3)), (3, None, None)],
        );
    }

    #[test]
    fn test_search_absent_promotes_neighbour() {
        let mut tree = build(&[10, 20, 30, 40]);
        assert!(!search(&mut tree, &25));
        let root = root_key(&tree).unwrap();
        assert!(root == 20 || root == 30);

        assert!(!search(&mut tree, &0));
        assert_eq!(root_key(&tree), Some(10));

        assert!(!search(&mut tree, &100));
        assert_eq!(root_key(&tree), Some(40));
    }

    #[test]
    fn test_search_empty() {
        let mut tree: Tree<u32> = None;
        assert!(!search(&mut tree, &1));
        assert!(tree.is_none());
    }

    #[test]
    fn test_remove() {
        let mut tree = build(&[10, 5, 15]);
        assert!(search(&mut tree, &5));
        assert_eq!(remove(&mut tree, &10), Some(10));
        assert_eq!(root_key(&tree), Some(5));
        assert_eq!(shape(&tree), vec![(5, None, Some(15)), (15, None, None)]);
    }

    #[test]
    fn test_remove_without_left_child() {
        let mut tree = build(&[1, 2]);
        assert!(search(&mut tree, &1));
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert_eq!(shape(&tree), vec![(2, None, None)]);
    }

    #[test]
    fn test_remove_absent() {
        let mut tree = build(&[1, 3, 5]);
        assert_eq!(remove(&mut tree, &4), None);
        let keys: Vec<u32> = shape(&tree).into_iter().map(|(key, _, _)| key).collect();
        assert_eq!(keys, vec![1, 3, 5]);

        let mut empty: Tree<u32> = None;
        assert_eq!(remove(&mut empty, &4), None);
    }

    #[test]
    fn test_remove_last() {
        let mut tree = build(&[1]);
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert!(tree.is_none());
    }

    #[test]
    fn test_contains_does_not_splay() {
        let tree = build(&[1, 2, 3]);
        assert!(contains(&tree, &1));
        assert!(!contains(&tree, &4));
        assert_eq!(root_key(&tree), Some(3));
    }

    #[test]
    fn test_dismantle_path() {
        let mut tree = None;
        for key in 0..200_000 {
            insert(&mut tree, key, alloc).unwrap();
        }
        dismantle(&mut tree);
        assert!(tree.is_none());
    }
}
