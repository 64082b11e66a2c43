//! An ordered set based on a red-black tree.

use compare::{Compare, Natural};
use log::debug;
use std::fmt::{self, Debug};
use std::iter;
use std::marker::PhantomData;
use super::dispose::{Discard, Dispose};
use super::error::InsertError;
use super::node::{self, Link, Node, Side};

/// An ordered set based on a red-black tree.
///
/// Items are ordered by the comparator `C` and released through the disposal `D` when the set is
/// torn down. At most one item per equivalence class of the comparator is stored.
///
/// The behavior of this set is unspecified (though memory safe) if an item's ordering relative to
/// any other item changes while the item is in the set. This is normally only possible through
/// `Cell`, `RefCell`, or an inconsistent comparator.
pub struct Set<T, C = Natural<T>, D = Discard> where C: Compare<T>, D: Dispose<T> {
    root: Link<T>,
    len: usize,
    cmp: C,
    dispose: D,
    marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T, C, D> Send for Set<T, C, D>
    where T: Send, C: Compare<T> + Send, D: Dispose<T> + Send {}

unsafe impl<T, C, D> Sync for Set<T, C, D>
    where T: Sync, C: Compare<T> + Sync, D: Dispose<T> + Sync {}

impl<T> Set<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbtree::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Set::with_cmp(compare::natural()) }
}

impl<T, C> Set<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut set = rbtree::Set::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Set::with_cmp_and_dispose(cmp, Discard) }
}

impl<T, C, D> Set<T, C, D> where C: Compare<T>, D: Dispose<T> {
    /// Creates an empty set ordered according to the given comparator, whose items are released
    /// through the given disposal when the set is torn down.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    ///
    /// let released = Cell::new(0);
    ///
    /// let mut set = rbtree::Set::with_cmp_and_dispose(
    ///     |a: &String, b: &String| a.len().cmp(&b.len()),
    ///     |_: String| released.set(released.get() + 1));
    ///
    /// assert!(set.insert("pear".to_string()));
    /// assert!(set.insert("fig".to_string()));
    /// assert!(!set.insert("plum".to_string()));
    ///
    /// set.destroy();
    /// assert_eq!(released.get(), 2);
    /// ```
    pub fn with_cmp_and_dispose(cmp: C, dispose: D) -> Self {
        Set { root: None, len: 0, cmp, dispose, marker: PhantomData }
    }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbtree::Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of items in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbtree::Set::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let set: rbtree::Set<i32> = rbtree::Set::new();
    /// assert!(set.cmp().compares_lt(&1, &2));
    ///
    /// let set: rbtree::Set<i32, _> = rbtree::Set::with_cmp(natural().rev());
    /// assert!(set.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all items from the set, handing each to the set's disposal.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbtree::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set.iter().next(), Some(&1));
    ///
    /// set.clear();
    ///
    /// assert_eq!(set.len(), 0);
    /// assert_eq!(set.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        if self.len > 0 { debug!("disposing {} items", self.len); }
        node::destroy(self.root.take(), &mut self.dispose);
        self.len = 0;
    }

    /// Tears the set down, handing every item to the set's disposal.
    ///
    /// Items are released in post-order: both subtrees of a node before the node's own item.
    /// This is what dropping the set does as well.
    pub fn destroy(mut self) { self.clear(); }

    /// Inserts an item into the set, returning `true` if the set did not already contain an
    /// equal item.
    ///
    /// A rejected item is dropped without passing through the set's disposal. Use
    /// [`try_insert`](#method.try_insert) to get it back instead.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbtree::Set::new();
    /// assert!(!set.contains(&1));
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, item: T) -> bool { self.try_insert(item).is_ok() }

    /// Inserts an item into the set, or hands it back if the set already contains an equal item.
    ///
    /// The set is left untouched when the item is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::InsertError;
    ///
    /// let mut set = rbtree::Set::with_cmp(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
    ///
    /// assert_eq!(set.try_insert((1, "a")), Ok(()));
    /// assert_eq!(set.try_insert((1, "b")), Err(InsertError::Duplicate((1, "b"))));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn try_insert(&mut self, item: T) -> Result<(), InsertError<T>> {
        node::insert(&mut self.root, &self.cmp, item).map_err(InsertError::Duplicate)?;
        self.len += 1;
        Ok(())
    }

    /// Checks if the set contains an item equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbtree::Set::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        node::get(&self.root, &self.cmp, item).is_some()
    }

    /// Returns a reference to the set's item equal to the given one, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbtree::Set::with_cmp(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
    /// set.insert((1, 'a'));
    ///
    /// assert_eq!(set.get(&(1, 'z')), Some(&(1, 'a')));
    /// assert_eq!(set.get(&(2, 'a')), None);
    /// ```
    pub fn get<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        node::get(&self.root, &self.cmp, item)
    }

    /// Calls `f` on each item in ascending order until it returns `false`.
    ///
    /// Returns `true` if every item was visited, and `false` if `f` stopped the traversal early.
    /// Traversing an empty set succeeds without calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: rbtree::Set<_> = (1..10).collect();
    ///
    /// let mut sum = 0;
    /// assert!(set.for_each(|&x| { sum += x; true }));
    /// assert_eq!(sum, 45);
    ///
    /// let mut seen = vec![];
    /// assert!(!set.for_each(|&x| { seen.push(x); x < 3 }));
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn for_each<'a, F>(&'a self, mut f: F) -> bool where F: FnMut(&'a T) -> bool {
        node::for_each(self.root_node(), &mut f)
    }

    /// Returns a reference to the set's maximum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbtree::Set::new();
    /// assert_eq!(set.max(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> { node::extremum(&self.root, Side::Right) }

    /// Returns a reference to the set's minimum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbtree::Set::new();
    /// assert_eq!(set.min(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> { node::extremum(&self.root, Side::Left) }

    /// Returns an iterator over the set's items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbtree::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next_back(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> { Iter(node::Iter::new(self.root_node(), self.len)) }

    pub(crate) fn root_node(&self) -> Option<&Node<T>> { node::as_node_ref(&self.root) }
}

impl<T, C, D> Drop for Set<T, C, D> where C: Compare<T>, D: Dispose<T> {
    fn drop(&mut self) { self.clear(); }
}

impl<T, C, D> Clone for Set<T, C, D>
    where T: Clone, C: Compare<T> + Clone, D: Dispose<T> + Clone {

    fn clone(&self) -> Self {
        Set {
            root: node::clone_link(&self.root, None),
            len: self.len,
            cmp: self.cmp.clone(),
            dispose: self.dispose.clone(),
            marker: PhantomData,
        }
    }
}

impl<T, C, D> Debug for Set<T, C, D> where T: Debug, C: Compare<T>, D: Dispose<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C, D> Default for Set<T, C, D> where C: Compare<T> + Default, D: Dispose<T> + Default {
    fn default() -> Self { Set::with_cmp_and_dispose(C::default(), D::default()) }
}

impl<T, C, D> Extend<T> for Set<T, C, D> where C: Compare<T>, D: Dispose<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T, C, D> iter::FromIterator<T> for Set<T, C, D>
    where C: Compare<T> + Default, D: Dispose<T> + Default {

    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut set = Set::default();
        set.extend(it);
        set
    }
}

impl<'a, T, C, D> IntoIterator for &'a Set<T, C, D> where C: Compare<T>, D: Dispose<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C, D> IntoIterator for Set<T, C, D> where C: Compare<T>, D: Dispose<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns an iterator that consumes the set, yielding its items in ascending order.
    ///
    /// Ownership of each item passes to the caller; the set's disposal is not invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbtree::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        let mut items = Vec::with_capacity(self.len);
        node::into_vec(self.root.take(), &mut items);
        self.len = 0;
        IntoIter(items.into_iter())
    }
}

impl<T, C, D> PartialEq for Set<T, C, D> where T: PartialEq, C: Compare<T>, D: Dispose<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, C, D> Eq for Set<T, C, D> where T: Eq, C: Compare<T>, D: Dispose<T> {}

/// An iterator that consumes the set.
///
/// See [`Set::into_iter`](struct.Set.html#method.into_iter) for an example.
pub struct IntoIter<T>(::std::vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize { self.0.len() }
}

/// An iterator over the set.
///
/// See [`Set::iter`](struct.Set.html#method.iter) for an example.
pub struct Iter<'a, T: 'a>(node::Iter<'a, T>);

unsafe impl<'a, T> Send for Iter<'a, T> where T: Sync {}
unsafe impl<'a, T> Sync for Iter<'a, T> where T: Sync {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
