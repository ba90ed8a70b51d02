use std::collections::VecDeque;


/// A read-only, index-addressable view of a source container.
///
/// Views are cheap `Copy` borrows. The items they hand out live as long as
/// the source (`'a`), not as long as the view value itself, which is what
/// lets a chain yield references that outlive its own iterators.
pub trait Sequence<'a>: Copy {
    type Item: 'a;

    fn len(self) -> usize;

    /// Item at `index`. Panics when `index >= len()`.
    fn item(self, index: usize) -> &'a Self::Item;

    fn is_empty(self) -> bool {
        self.len() == 0
    }
}


impl <'a, T> Sequence<'a> for &'a [T] {
    type Item = T;

    #[inline]
    fn len(self) -> usize {
        (*self).len()
    }

    #[inline]
    fn item(self, index: usize) -> &'a T {
        &self[index]
    }
}


impl <'a, T, const N: usize> Sequence<'a> for &'a [T; N] {
    type Item = T;

    #[inline]
    fn len(self) -> usize {
        N
    }

    #[inline]
    fn item(self, index: usize) -> &'a T {
        &self[index]
    }
}


impl <'a, T> Sequence<'a> for &'a Vec<T> {
    type Item = T;

    #[inline]
    fn len(self) -> usize {
        (*self).len()
    }

    #[inline]
    fn item(self, index: usize) -> &'a T {
        &self[index]
    }
}


impl <'a, T> Sequence<'a> for &'a VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(self) -> usize {
        (*self).len()
    }

    #[inline]
    fn item(self, index: usize) -> &'a T {
        &self[index]
    }
}
