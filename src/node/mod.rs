mod iter;


use compare::Compare;
use log::trace;
use std::cmp::Ordering::*;
use std::ptr::{self, NonNull};
use super::dispose::Dispose;

pub use self::iter::Iter;

/// A link from a node (or the tree) to a child node.
///
/// Child links own the node they point to; the node is freed only by `destroy` or `into_vec`.
/// The same pointer type is used for the non-owning parent link.
pub type Link<T> = Option<NonNull<Node<T>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    parent: Link<T>,
    color: Color,
    item: T,
}

impl<T> Node<T> {
    fn new(item: T) -> NonNull<Node<T>> {
        let node = Box::new(Node { left: None, right: None, parent: None, color: Color::Red, item });
        NonNull::from(Box::leak(node))
    }

    pub fn item(&self) -> &T { &self.item }

    #[cfg(test)]
    pub fn color(&self) -> Color { self.color }

    pub fn left(&self) -> Option<&Node<T>> { as_node_ref(&self.left) }

    pub fn right(&self) -> Option<&Node<T>> { as_node_ref(&self.right) }

    fn child(&self, side: Side) -> Option<&Node<T>> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }
}

pub fn as_node_ref<T>(link: &Link<T>) -> Option<&Node<T>> {
    link.map(|node| unsafe { &*node.as_ptr() })
}

unsafe fn link_mut<T>(node: NonNull<Node<T>>, side: Side) -> *mut Link<T> {
    match side {
        Side::Left => ptr::addr_of_mut!((*node.as_ptr()).left),
        Side::Right => ptr::addr_of_mut!((*node.as_ptr()).right),
    }
}

// The side of `parent` that holds `node`.
unsafe fn side_in<T>(parent: NonNull<Node<T>>, node: NonNull<Node<T>>) -> Side {
    if (*parent.as_ptr()).right == Some(node) { Side::Right } else { Side::Left }
}

// The link that owns `node`: the root link, or a child link of its parent.
unsafe fn owner<T>(root: *mut Link<T>, node: NonNull<Node<T>>) -> *mut Link<T> {
    match (*node.as_ptr()).parent {
        None => root,
        Some(parent) => link_mut(parent, side_in(parent, node)),
    }
}

// Lifts `node` into its parent's position, moving the parent down to the opposite side.
//
//        p                x
//       / \              / \
//      x   c    ==>     a   p
//     / \                  / \
//    a   b                b   c
unsafe fn rotate_up<T>(root: *mut Link<T>, node: NonNull<Node<T>>) {
    let parent = match (*node.as_ptr()).parent {
        None => return,
        Some(parent) => parent,
    };

    let side = side_in(parent, node);
    let slot = owner(root, parent);

    let inner = *link_mut(node, side.opposite());
    *link_mut(parent, side) = inner;
    if let Some(inner) = inner { (*inner.as_ptr()).parent = Some(parent); }

    *link_mut(node, side.opposite()) = Some(parent);
    (*node.as_ptr()).parent = (*parent.as_ptr()).parent;
    (*parent.as_ptr()).parent = Some(node);
    *slot = Some(node);
}

// Restores the red-black invariants after `node` was attached as a red leaf.
unsafe fn fixup<T>(root: *mut Link<T>, mut node: NonNull<Node<T>>) {
    loop {
        let parent = match (*node.as_ptr()).parent {
            None => {
                (*node.as_ptr()).color = Color::Black;
                return;
            }
            Some(parent) => parent,
        };

        if (*parent.as_ptr()).color == Color::Black { return; }

        let grandparent = match (*parent.as_ptr()).parent {
            // red root
            None => {
                (*parent.as_ptr()).color = Color::Black;
                return;
            }
            Some(grandparent) => grandparent,
        };

        let parent_side = side_in(grandparent, parent);

        match *link_mut(grandparent, parent_side.opposite()) {
            Some(uncle) if (*uncle.as_ptr()).color == Color::Red => {
                trace!("red uncle: recoloring and continuing from the grandparent");
                (*parent.as_ptr()).color = Color::Black;
                (*uncle.as_ptr()).color = Color::Black;
                (*grandparent.as_ptr()).color = Color::Red;
                node = grandparent;
            }
            _ => {
                let mut top = parent;

                if side_in(parent, node) != parent_side {
                    trace!("black uncle, bent {:?}-{:?} shape: straightening",
                           parent_side, parent_side.opposite());
                    rotate_up(root, node);
                    top = node;
                }

                trace!("black uncle, {:?}-{:?} shape: rotating the grandparent down",
                       parent_side, parent_side);
                rotate_up(root, top);
                (*top.as_ptr()).color = Color::Black;
                (*grandparent.as_ptr()).color = Color::Red;
                return;
            }
        }
    }
}

/// Inserts `item` below `root`, rebalancing as needed.
///
/// Returns the item unchanged if an equal one is already present; the tree is not touched in
/// that case.
pub fn insert<T, C>(root: &mut Link<T>, cmp: &C, item: T) -> Result<(), T> where C: Compare<T> {
    let mut parent = None;
    let mut side = Side::Left;
    let mut link = *root;

    unsafe {
        while let Some(node) = link {
            side = match cmp.compare(&item, &(*node.as_ptr()).item) {
                Equal => return Err(item),
                Less => Side::Left,
                Greater => Side::Right,
            };

            parent = Some(node);
            link = *link_mut(node, side);
        }
    }

    let node = Node::new(item);

    unsafe {
        match parent {
            None => *root = Some(node),
            Some(parent) => {
                (*node.as_ptr()).parent = Some(parent);
                *link_mut(parent, side) = Some(node);
            }
        }

        fixup(root, node);
    }

    Ok(())
}

pub fn get<'a, T, C, Q: ?Sized>(link: &'a Link<T>, cmp: &C, key: &Q) -> Option<&'a T>
    where C: Compare<Q, T> {

    let mut link = as_node_ref(link);

    while let Some(node) = link {
        link = match cmp.compare(key, &node.item) {
            Equal => return Some(&node.item),
            Less => node.left(),
            Greater => node.right(),
        };
    }

    None
}

pub fn extremum<T>(link: &Link<T>, side: Side) -> Option<&T> {
    let mut node = as_node_ref(link)?;
    while let Some(child) = node.child(side) { node = child; }
    Some(&node.item)
}

/// Visits every item below `link` in ascending order, stopping as soon as `f` returns `false`.
pub fn for_each<'a, T, F>(link: Option<&'a Node<T>>, f: &mut F) -> bool
    where F: FnMut(&'a T) -> bool {

    match link {
        None => true,
        Some(node) => for_each(node.left(), f) && f(&node.item) && for_each(node.right(), f),
    }
}

/// Frees every node below `link`, children before parents, handing each item to `dispose`.
pub fn destroy<T, D>(link: Link<T>, dispose: &mut D) where D: Dispose<T> {
    if let Some(node) = link {
        let mut node = unsafe { Box::from_raw(node.as_ptr()) };
        destroy(node.left.take(), dispose);
        destroy(node.right.take(), dispose);
        let Node { item, .. } = *node;
        dispose.dispose(item);
    }
}

/// Frees every node below `link`, moving the items into `items` in ascending order.
pub fn into_vec<T>(link: Link<T>, items: &mut Vec<T>) {
    if let Some(node) = link {
        let mut node = unsafe { Box::from_raw(node.as_ptr()) };
        into_vec(node.left.take(), items);
        let right = node.right.take();
        let Node { item, .. } = *node;
        items.push(item);
        into_vec(right, items);
    }
}

/// Deep-copies the subtree below `link`, keeping its shape and colors.
pub fn clone_link<T>(link: &Link<T>, parent: Link<T>) -> Link<T> where T: Clone {
    as_node_ref(link).map(|src| {
        let node = Node::new(src.item.clone());

        unsafe {
            (*node.as_ptr()).color = src.color;
            (*node.as_ptr()).parent = parent;
            (*node.as_ptr()).left = clone_link(&src.left, Some(node));
            (*node.as_ptr()).right = clone_link(&src.right, Some(node));
        }

        node
    })
}
