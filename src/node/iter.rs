use std::collections::VecDeque;
use self::visit::{Seen, Visit};
use super::Node;

pub struct Iter<'a, T: 'a> {
    visits: VecDeque<Visit<'a, T>>,
    size: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter { visits: self.visits.clone(), size: self.size } }
}

impl<'a, T> Iter<'a, T> {
    pub fn new(root: Option<&'a Node<T>>, size: usize) -> Self {
        Iter { visits: root.into_iter().map(Visit::new).collect(), size }
    }
}

enum Op<T> {
    Push(Option<T>),
    PopPush(Option<T>),
    Pop,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let op = match self.visits.back_mut() {
                None => return None,
                Some(visit) => match visit.seen() {
                    Seen::N | Seen::R => Op::Push(visit.left()),
                    Seen::L => Op::PopPush(visit.right()),
                    Seen::B => Op::Pop,
                },
            };

            match op {
                Op::Push(node) =>
                    if let Some(node) = node { self.visits.push_back(Visit::new(node)); },
                Op::PopPush(node) => {
                    self.size -= 1;
                    let visit = self.visits.pop_back()?;
                    if let Some(node) = node { self.visits.push_back(Visit::new(node)); }
                    return Some(visit.item());
                }
                Op::Pop => {
                    self.size -= 1;
                    return self.visits.pop_back().map(Visit::item);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        loop {
            let op = match self.visits.front_mut() {
                None => return None,
                Some(visit) => match visit.seen() {
                    Seen::N | Seen::L => Op::Push(visit.right()),
                    Seen::R => Op::PopPush(visit.left()),
                    Seen::B => Op::Pop,
                },
            };

            match op {
                Op::Push(node) =>
                    if let Some(node) = node { self.visits.push_front(Visit::new(node)); },
                Op::PopPush(node) => {
                    self.size -= 1;
                    let visit = self.visits.pop_front()?;
                    if let Some(node) = node { self.visits.push_front(Visit::new(node)); }
                    return Some(visit.item());
                }
                Op::Pop => {
                    self.size -= 1;
                    return self.visits.pop_front().map(Visit::item);
                }
            }
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

mod visit {
    use super::super::Node;

    pub struct Visit<'a, T: 'a> {
        node: &'a Node<T>,
        seen: Seen,
    }

    impl<'a, T> Clone for Visit<'a, T> {
        fn clone(&self) -> Self { Visit { node: self.node, seen: self.seen } }
    }

    impl<'a, T> Visit<'a, T> {
        pub fn new(node: &'a Node<T>) -> Self { Visit { node, seen: Seen::N } }

        pub fn left(&mut self) -> Option<&'a Node<T>> {
            match self.seen {
                Seen::N => { self.seen = Seen::L; self.node.left() }
                Seen::R => { self.seen = Seen::B; self.node.left() }
                Seen::L | Seen::B => None,
            }
        }

        pub fn right(&mut self) -> Option<&'a Node<T>> {
            match self.seen {
                Seen::N => { self.seen = Seen::R; self.node.right() }
                Seen::L => { self.seen = Seen::B; self.node.right() }
                Seen::R | Seen::B => None,
            }
        }

        pub fn item(self) -> &'a T { self.node.item() }

        pub fn seen(&self) -> Seen { self.seen }
    }

    #[derive(Clone, Copy)]
    pub enum Seen {
        N,
        L,
        R,
        B,
    }
}
