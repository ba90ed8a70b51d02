use crate::cursor::Cursor;


/// A mutating operation generic over any cursor of the chain's item type.
///
/// Closures cannot be generic over the cursor type they receive, hence the
/// explicit visitor traits: the chain defines one small struct per
/// operation and dispatch picks the statically-typed slot to run it on.
pub trait VisitMut<'a, V: 'a> {
    type Out;

    fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &mut C) -> Self::Out;
}


/// Read-only counterpart of `VisitMut`.
pub trait Visit<'a, V: 'a> {
    type Out;

    fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &C) -> Self::Out;
}


/// A fixed-arity, heterogeneous list of cursors sharing one item type.
///
/// `visit`/`visit_ref` resolve a run-time slot index to the statically
/// typed cursor stored there - no boxing, no trait objects. Each tuple
/// arity gets an exhaustive match over its slots; the slot index is
/// maintained internally by the chain iterator, so an out-of-bounds index
/// is a contract violation and panics.
pub trait CursorList<'a>: Clone {
    type Item: 'a;

    /// Number of slots (the chain arity).
    const LEN: usize;

    fn visit<Op: VisitMut<'a, Self::Item>>(&mut self, index: usize, op: &mut Op) -> Op::Out;

    fn visit_ref<Op: Visit<'a, Self::Item>>(&self, index: usize, op: &mut Op) -> Op::Out;
}


macro_rules! impl_cursor_list {
    ($len:literal; $first:ident . $fi:tt $(, $rest:ident . $ri:tt)*) => {
        impl <'a, $first $(, $rest)*> CursorList<'a> for ($first, $($rest,)*)
        where
            $first: Cursor<'a>,
            $($rest: Cursor<'a, Item = $first::Item>,)*
        {
            type Item = $first::Item;

            const LEN: usize = $len;

            fn visit<Op: VisitMut<'a, Self::Item>>(&mut self, index: usize, op: &mut Op) -> Op::Out {
                match index {
                    $fi => op.visit(&mut self.$fi),
                    $($ri => op.visit(&mut self.$ri),)*
                    _ => panic!("slot index {} is out of bounds for a chain of {} ranges", index, $len)
                }
            }

            fn visit_ref<Op: Visit<'a, Self::Item>>(&self, index: usize, op: &mut Op) -> Op::Out {
                match index {
                    $fi => op.visit(&self.$fi),
                    $($ri => op.visit(&self.$ri),)*
                    _ => panic!("slot index {} is out of bounds for a chain of {} ranges", index, $len)
                }
            }
        }
    };
}


impl_cursor_list!(1; A.0);
impl_cursor_list!(2; A.0, B.1);
impl_cursor_list!(3; A.0, B.1, C.2);
impl_cursor_list!(4; A.0, B.1, C.2, D.3);
impl_cursor_list!(5; A.0, B.1, C.2, D.3, E.4);
impl_cursor_list!(6; A.0, B.1, C.2, D.3, E.4, F.5);
impl_cursor_list!(7; A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_cursor_list!(8; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_cursor_list!(9; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_cursor_list!(10; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_cursor_list!(11; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_cursor_list!(12; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);


#[cfg(test)]
mod test {
    use super::*;
    use crate::cursor::RangeCursor;
    use std::collections::VecDeque;


    struct Len;

    impl <'a, V: 'a> Visit<'a, V> for Len {
        type Out = usize;

        fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &C) -> usize {
            let mut probe = cursor.clone();
            probe.force_to_end();
            probe.pos()
        }
    }


    struct Step;

    impl <'a, V: 'a> VisitMut<'a, V> for Step {
        type Out = ();

        fn visit<C: Cursor<'a, Item = V>>(&mut self, cursor: &mut C) {
            cursor.advance()
        }
    }


    #[test]
    fn visits_the_statically_typed_slot() {
        let slice: &[u32] = &[1, 2, 3];
        let deque: VecDeque<u32> = (0..5).collect();
        let mut cursors = (RangeCursor::new(slice), RangeCursor::new(&deque));

        assert_eq!(cursors.visit_ref(0, &mut Len), 3);
        assert_eq!(cursors.visit_ref(1, &mut Len), 5);

        cursors.visit(1, &mut Step);
        assert_eq!(cursors.1.pos(), 1);
        assert_eq!(cursors.0.pos(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds for a chain of 2 ranges")]
    fn out_of_bounds_slot_panics() {
        let a = vec![1];
        let b = vec![2];
        let cursors = (RangeCursor::new(&a), RangeCursor::new(&b));
        cursors.visit_ref(2, &mut Len);
    }
}
