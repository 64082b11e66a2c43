/// Releases items when a set is torn down.
///
/// A set hands every stored item to its disposal exactly once, children before parents, when the
/// set is cleared, destroyed, or dropped. Items rejected as duplicates never reach it.
///
/// Any `FnMut(T)` closure is a disposal.
///
/// # Examples
///
/// ```
/// use compare::natural;
/// use rbtree::Set;
///
/// let mut released = vec![];
///
/// {
///     let mut set = Set::with_cmp_and_dispose(natural(), |item: u32| released.push(item));
///     set.insert(2);
///     set.insert(1);
///     set.insert(3);
/// }
///
/// released.sort();
/// assert_eq!(released, [1, 2, 3]);
/// ```
pub trait Dispose<T> {
    /// Releases the given item.
    fn dispose(&mut self, item: T);
}

/// A disposal that simply drops each item.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl<T> Dispose<T> for Discard {
    fn dispose(&mut self, _item: T) {}
}

impl<T, F> Dispose<T> for F where F: FnMut(T) {
    fn dispose(&mut self, item: T) { self(item) }
}
