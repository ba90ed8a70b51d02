use crate::source::Sequence;


/// The capability set a chain needs from one wrapped range: stepping,
/// boundary queries, dereference and position identity.
pub trait Cursor<'a>: Clone {
    type Item: 'a;

    /// One step toward the end. Stepping a cursor that is already at its
    /// end is a contract violation.
    fn advance(&mut self);

    /// One step toward the begin. Stepping a cursor that is already at its
    /// begin is a contract violation.
    fn retreat(&mut self);

    /// Unconditionally park the cursor at its end.
    fn force_to_end(&mut self);

    fn at_begin(&self) -> bool;

    fn at_end(&self) -> bool;

    /// Position identity (offset from begin). Two cursors over the same
    /// range denote the same position iff their `pos` values are equal.
    fn pos(&self) -> usize;

    /// Item at the cursor. Panics when `at_end()`.
    fn current(&self) -> &'a Self::Item;
}


/// Cursor over a single `Sequence` view.
///
/// The position ranges over `[0, len]`, where `len` is the one-past-last
/// sentinel.
#[derive(Clone)]
pub struct RangeCursor<S> {
    seq: S,
    pos: usize
}


impl <S> RangeCursor<S> {
    pub fn new(seq: S) -> Self {
        Self {
            seq,
            pos: 0
        }
    }
}


impl <'a, S: Sequence<'a>> Cursor<'a> for RangeCursor<S> {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.pos < self.seq.len(), "advancing a cursor that is at its end");
        self.pos += 1;
    }

    #[inline]
    fn retreat(&mut self) {
        debug_assert!(self.pos > 0, "retreating a cursor that is at its begin");
        self.pos -= 1;
    }

    #[inline]
    fn force_to_end(&mut self) {
        self.pos = self.seq.len();
    }

    #[inline]
    fn at_begin(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos == self.seq.len()
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    fn current(&self) -> &'a S::Item {
        assert!(self.pos < self.seq.len(), "dereferencing a cursor at its end");
        self.seq.item(self.pos)
    }
}
