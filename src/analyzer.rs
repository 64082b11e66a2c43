//! Small clients of [`Set`](../set/struct.Set.html) built on its traversal.
//!
//! [`concatenate`](fn.concatenate.html) joins a set of words, and
//! [`max_norm_vector`](fn.max_norm_vector.html) finds the vector with the largest L2 norm in a set
//! ordered by [`VectorOrder`](struct.VectorOrder.html).

use compare::Compare;
use std::cmp::Ordering::{self, *};
use super::{Dispose, Set};

/// Concatenates the set's words in ascending order, each followed by a newline.
///
/// # Examples
///
/// ```
/// let mut set = rbtree::Set::new();
/// set.insert("banana".to_string());
/// set.insert("apple".to_string());
///
/// assert_eq!(rbtree::analyzer::concatenate(&set), "apple\nbanana\n");
/// ```
pub fn concatenate<C, D>(set: &Set<String, C, D>) -> String
    where C: Compare<String>, D: Dispose<String> {

    let mut out = String::with_capacity(set.iter().map(|word| word.len() + 1).sum());
    set.for_each(|word| {
        out.push_str(word);
        out.push('\n');
        true
    });
    out
}

/// A vector of real coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector(pub Vec<f64>);

impl Vector {
    /// Returns the squared L2 norm of the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::analyzer::Vector;
    ///
    /// assert_eq!(Vector(vec![1.0, 1.0]).norm_squared(), 2.0);
    /// assert_eq!(Vector(vec![]).norm_squared(), 0.0);
    /// ```
    pub fn norm_squared(&self) -> f64 { self.0.iter().map(|x| x * x).sum() }

    /// Returns the number of coordinates.
    pub fn len(&self) -> usize { self.0.len() }

    /// Checks if the vector has no coordinates.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl From<Vec<f64>> for Vector {
    fn from(coordinates: Vec<f64>) -> Self { Vector(coordinates) }
}

/// Orders vectors coordinate by coordinate.
///
/// The first differing coordinate decides. If one vector is a prefix of the other, the shorter
/// one is smaller. Coordinates that are neither less nor greater than each other (including NaN)
/// count as equal.
///
/// # Examples
///
/// ```
/// use compare::Compare;
/// use rbtree::analyzer::{Vector, VectorOrder};
///
/// let cmp = VectorOrder;
/// assert!(cmp.compares_lt(&Vector(vec![1.0, 1.0]), &Vector(vec![3.0])));
/// assert!(cmp.compares_lt(&Vector(vec![1.0]), &Vector(vec![1.0, 0.0])));
/// assert!(cmp.compares_eq(&Vector(vec![2.0, 5.0]), &Vector(vec![2.0, 5.0])));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct VectorOrder;

impl Compare<Vector> for VectorOrder {
    fn compare(&self, l: &Vector, r: &Vector) -> Ordering {
        for (a, b) in l.0.iter().zip(&r.0) {
            if a < b { return Less; }
            if a > b { return Greater; }
        }

        l.len().cmp(&r.len())
    }
}

/// Returns a copy of the vector with the largest L2 norm, or `None` if the set is empty.
///
/// Among vectors of equal norm, the smallest one in the set's order wins.
///
/// # Examples
///
/// ```
/// use rbtree::Set;
/// use rbtree::analyzer::{self, Vector, VectorOrder};
///
/// let mut set = Set::with_cmp(VectorOrder);
/// set.insert(Vector(vec![1.0, 1.0]));
/// set.insert(Vector(vec![3.0]));
///
/// assert_eq!(analyzer::max_norm_vector(&set), Some(Vector(vec![3.0])));
/// ```
pub fn max_norm_vector<C, D>(set: &Set<Vector, C, D>) -> Option<Vector>
    where C: Compare<Vector>, D: Dispose<Vector> {

    let mut max: Option<(&Vector, f64)> = None;

    set.for_each(|vector| {
        let norm = vector.norm_squared();
        if max.map_or(true, |(_, max_norm)| norm > max_norm) { max = Some((vector, norm)); }
        true
    });

    max.map(|(vector, _)| vector.clone())
}
