use std::marker::PhantomData;

use crate::cursor::RangeCursor;
use crate::dispatch::CursorList;
use crate::iter::ChainIter;
use crate::source::Sequence;


/// A tuple of source views forming one chain, in order.
///
/// Every view must yield exactly the element type of the first one; a
/// mismatch is a compile-time error, so no chain value is ever produced
/// from incompatible sources.
pub trait SequenceList<'a> {
    type Item: 'a;

    type Cursors: CursorList<'a, Item = Self::Item>;

    fn into_cursors(self) -> Self::Cursors;
}


macro_rules! impl_sequence_list {
    ($first:ident . $fi:tt $(, $rest:ident . $ri:tt)*) => {
        impl <'a, $first $(, $rest)*> SequenceList<'a> for ($first, $($rest,)*)
        where
            $first: Sequence<'a>,
            $($rest: Sequence<'a, Item = $first::Item>,)*
        {
            type Item = $first::Item;

            type Cursors = (RangeCursor<$first>, $(RangeCursor<$rest>,)*);

            fn into_cursors(self) -> Self::Cursors {
                (RangeCursor::new(self.$fi), $(RangeCursor::new(self.$ri),)*)
            }
        }
    };
}


impl_sequence_list!(A.0);
impl_sequence_list!(A.0, B.1);
impl_sequence_list!(A.0, B.1, C.2);
impl_sequence_list!(A.0, B.1, C.2, D.3);
impl_sequence_list!(A.0, B.1, C.2, D.3, E.4);
impl_sequence_list!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_sequence_list!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_sequence_list!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_sequence_list!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_sequence_list!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_sequence_list!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_sequence_list!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);


/// N ordered source sequences presented as one logical bidirectional
/// sequence, without copying elements or erasing the source types.
///
/// Holds the construction-time snapshot of every range cursor; `begin`
/// and `end` stamp out independent copies of it.
#[derive(Clone)]
pub struct Chain<'a, L> {
    cursors: L,
    _items: PhantomData<&'a ()>
}


/// Chains the given tuple of source views, e.g.
/// `make_chain((&vec, &deque))`. The element type of the chain is the
/// element type of the first view; the rest must match it exactly.
pub fn make_chain<'a, S: SequenceList<'a>>(sources: S) -> Chain<'a, S::Cursors> {
    Chain {
        cursors: sources.into_cursors(),
        _items: PhantomData
    }
}


impl <'a, L: CursorList<'a>> Chain<'a, L> {
    /// Iterator at the first element of the first non-empty range, or
    /// equal to `end()` when every range is empty.
    pub fn begin(&self) -> ChainIter<'a, L> {
        ChainIter::begin(self.cursors.clone())
    }

    /// The one-past-last sentinel: the last range's cursor forced to its
    /// end. Only the active range is ever consulted by equality and
    /// dereference, so the other cursors stay at their begin.
    pub fn end(&self) -> ChainIter<'a, L> {
        ChainIter::end(self.cursors.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.begin() == self.end()
    }

    pub fn iter(&self) -> Iter<'a, L> {
        Iter {
            head: self.begin(),
            tail: self.end()
        }
    }
}


impl <'a, 'c, L: CursorList<'a>> IntoIterator for &'c Chain<'a, L> {
    type Item = &'a L::Item;
    type IntoIter = Iter<'a, L>;

    fn into_iter(self) -> Iter<'a, L> {
        self.iter()
    }
}


/// Double-ended adapter over a pair of chain positions, driving them
/// toward each other until they meet.
pub struct Iter<'a, L> {
    head: ChainIter<'a, L>,
    tail: ChainIter<'a, L>
}


impl <'a, L: CursorList<'a>> Iterator for Iter<'a, L> {
    type Item = &'a L::Item;

    fn next(&mut self) -> Option<&'a L::Item> {
        if self.head == self.tail {
            return None;
        }
        let item = self.head.current();
        self.head.step_forward();
        Some(item)
    }
}


impl <'a, L: CursorList<'a>> DoubleEndedIterator for Iter<'a, L> {
    fn next_back(&mut self) -> Option<&'a L::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail.step_back();
        Some(self.tail.current())
    }
}


impl <'a, L: CursorList<'a>> std::iter::FusedIterator for Iter<'a, L> {}
