use std::fmt;
use std::marker::PhantomData;

use crate::cursor::Cursor;
use crate::dispatch::{CursorList, Visit, VisitMut};
use crate::error::Exhausted;


/// A bidirectional position over a chain of ranges.
///
/// Carries its own copy of every range cursor, so cloning an iterator
/// snapshots the whole traversal state. Equality is position identity of
/// the active cursors, which makes it valid for comparing against the
/// owning chain's `begin()`/`end()` values.
///
/// Invariant: outside of the stepping methods the active cursor is at its
/// end only when the iterator is the end sentinel (active index is the
/// last slot). `begin()` and `advance` maintain it by skipping past
/// exhausted ranges in one call, `retreat` by never stopping at an end.
#[derive(Clone)]
pub struct ChainIter<'a, L> {
    index: usize,
    cursors: L,
    _items: PhantomData<&'a ()>
}


impl <'a, L: CursorList<'a>> ChainIter<'a, L> {
    pub(crate) fn begin(cursors: L) -> Self {
        let mut iter = Self {
            index: 0,
            cursors,
            _items: PhantomData
        };
        iter.skip_exhausted();
        iter
    }

    pub(crate) fn end(mut cursors: L) -> Self {
        cursors.visit(L::LEN - 1, &mut ForceToEnd);
        Self {
            index: L::LEN - 1,
            cursors,
            _items: PhantomData
        }
    }

    /// True for the end sentinel.
    pub fn is_end(&self) -> bool {
        self.index + 1 == L::LEN && self.active_at_end()
    }

    /// One step forward. `Err(Exhausted)` at the end sentinel, which is
    /// then left unchanged.
    pub fn advance(&mut self) -> Result<(), Exhausted> {
        if self.is_end() {
            return Err(Exhausted);
        }
        self.step_forward();
        Ok(())
    }

    /// One step backward. `Err(Exhausted)` at the first element of the
    /// chain, which is then left unchanged.
    pub fn retreat(&mut self) -> Result<(), Exhausted> {
        if self.at_chain_begin() {
            return Err(Exhausted);
        }
        self.step_back();
        Ok(())
    }

    /// Item at this position. Panics at the end sentinel.
    pub fn current(&self) -> &'a L::Item {
        self.cursors.visit_ref(self.index, &mut Current)
    }

    /// Item at this position, or `None` at the end sentinel.
    pub fn try_current(&self) -> Option<&'a L::Item> {
        if self.is_end() {
            None
        } else {
            Some(self.current())
        }
    }

    /// Unchecked forward step: the caller must know this is not the end
    /// sentinel.
    pub(crate) fn step_forward(&mut self) {
        self.cursors.visit(self.index, &mut Advance);
        self.skip_exhausted();
    }

    /// Unchecked backward step: the caller must know this is not the
    /// first position of the chain.
    ///
    /// A backward boundary crossing finds the entered cursor wherever
    /// construction left it, so it is forced to its end first. Empty
    /// ranges come out of that still at their begin and are crossed over
    /// in the same call.
    pub(crate) fn step_back(&mut self) {
        while self.active_at_begin() {
            debug_assert!(self.index > 0, "retreating past the begin of the chain");
            self.index -= 1;
            self.cursors.visit(self.index, &mut ForceToEnd);
        }
        self.cursors.visit(self.index, &mut Retreat);
    }

    fn skip_exhausted(&mut self) {
        // A range entered forward always has its cursor at its begin:
        // construction puts it there and a backward crossing only leaves
        // a range at its begin.
        while self.index + 1 < L::LEN && self.active_at_end() {
            self.index += 1;
        }
    }

    /// True when no element precedes this position, i.e. every range
    /// before the active one is empty and the active cursor is at its
    /// begin. Read-only, unlike `step_back`.
    fn at_chain_begin(&self) -> bool {
        self.active_at_begin() && (0..self.index).all(|i| self.cursors.visit_ref(i, &mut IsEmpty))
    }

    fn active_at_begin(&self) -> bool {
        self.cursors.visit_ref(self.index, &mut AtBegin)
    }

    fn active_at_end(&self) -> bool {
        self.cursors.visit_ref(self.index, &mut AtEnd)
    }

    fn active_pos(&self) -> usize {
        self.cursors.visit_ref(self.index, &mut Pos)
    }
}


impl <'a, L: CursorList<'a>> PartialEq for ChainIter<'a, L> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.active_pos() == other.active_pos()
    }
}


impl <'a, L: CursorList<'a>> Eq for ChainIter<'a, L> {}


impl <'a, L: CursorList<'a>> fmt::Debug for ChainIter<'a, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainIter")
            .field("range", &self.index)
            .field("pos", &self.active_pos())
            .finish()
    }
}


struct Advance;

impl <'a, V: 'a> VisitMut<'a, V> for Advance {
    type Out = ();

    #[inline]
    fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &mut C) {
        cursor.advance()
    }
}


struct Retreat;

impl <'a, V: 'a> VisitMut<'a, V> for Retreat {
    type Out = ();

    #[inline]
    fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &mut C) {
        cursor.retreat()
    }
}


struct ForceToEnd;

impl <'a, V: 'a> VisitMut<'a, V> for ForceToEnd {
    type Out = ();

    #[inline]
    fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &mut C) {
        cursor.force_to_end()
    }
}


struct AtBegin;

impl <'a, V: 'a> Visit<'a, V> for AtBegin {
    type Out = bool;

    #[inline]
    fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &C) -> bool {
        cursor.at_begin()
    }
}


struct AtEnd;

impl <'a, V: 'a> Visit<'a, V> for AtEnd {
    type Out = bool;

    #[inline]
    fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &C) -> bool {
        cursor.at_end()
    }
}


/// An empty range sits at its begin and its end at once, whatever state
/// its cursor happens to be in.
struct IsEmpty;

impl <'a, V: 'a> Visit<'a, V> for IsEmpty {
    type Out = bool;

    #[inline]
    fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &C) -> bool {
        cursor.at_begin() && cursor.at_end()
    }
}


struct Pos;

impl <'a, V: 'a> Visit<'a, V> for Pos {
    type Out = usize;

    #[inline]
    fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &C) -> usize {
        cursor.pos()
    }
}


struct Current;

impl <'a, V: 'a> Visit<'a, V> for Current {
    type Out = &'a V;

    #[inline]
    fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &C) -> &'a V {
        cursor.current()
    }
}
