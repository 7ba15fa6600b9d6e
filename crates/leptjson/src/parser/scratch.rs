//! Staging stack for output whose final size is not known yet.
//!
//! One parse owns a `Stack<u8>` for decoded string bytes and a `Stack<Value>`
//! / `Stack<Member>` for open arrays and objects. A production records the top
//! with [`Stack::mark`] on entry and leaves through exactly one of
//! [`Stack::pop_frame`] (freeze the staged tail into an exactly-sized `Vec`)
//! or [`Stack::rewind`] (drop the staged tail), so the stacks are empty again
//! whenever the outermost production returns.
#![expect(clippy::inline_always)]

use alloc::vec::Vec;

/// Capacity of the first allocation, in elements.
const INITIAL_CAPACITY: usize = 256;

/// Height of a [`Stack`] at the moment a production started staging.
#[derive(Debug)]
#[must_use = "a staged frame must be popped or rewound"]
pub(crate) struct Mark(usize);

#[derive(Debug)]
pub(crate) struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    pub(crate) fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Number of staged elements across all open frames.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn mark(&self) -> Mark {
        Mark(self.data.len())
    }

    #[inline]
    pub(crate) fn push(&mut self, item: T) {
        self.reserve(1);
        self.data.push(item);
    }

    /// Elements staged since `mark`.
    #[cfg(test)]
    pub(crate) fn staged(&self, mark: &Mark) -> &[T] {
        debug_assert!(mark.0 <= self.data.len(), "mark above stack top");
        &self.data[mark.0..]
    }

    /// Moves everything staged since `mark` into an exactly-sized `Vec`.
    pub(crate) fn pop_frame(&mut self, mark: Mark) -> Vec<T> {
        debug_assert!(mark.0 <= self.data.len(), "mark above stack top");
        let mut frame = Vec::with_capacity(self.data.len() - mark.0);
        frame.extend(self.data.drain(mark.0..));
        frame
    }

    /// Drops everything staged since `mark`.
    pub(crate) fn rewind(&mut self, mark: Mark) {
        debug_assert!(mark.0 <= self.data.len(), "mark above stack top");
        self.data.truncate(mark.0);
    }

    /// Grows by half the current capacity (or to [`INITIAL_CAPACITY`]) until
    /// `additional` more elements fit.
    fn reserve(&mut self, additional: usize) {
        let needed = self.data.len() + additional;
        if needed <= self.data.capacity() {
            return;
        }
        let mut capacity = self.data.capacity().max(INITIAL_CAPACITY);
        while capacity < needed {
            capacity += capacity >> 1;
        }
        self.data.reserve_exact(capacity - self.data.len());
    }
}

impl Stack<u8> {
    #[inline]
    pub(crate) fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        self.data.extend_from_slice(bytes);
    }
}

#[cfg(test)]
mod tests {
    use alloc::{rc::Rc, vec};

    use super::*;

    #[test]
    fn first_push_allocates_initial_capacity() {
        let mut s = Stack::new();
        s.push(1u8);
        assert!(s.data.capacity() >= INITIAL_CAPACITY);
    }

    #[test]
    fn growth_is_by_half() {
        let mut s = Stack::new();
        for b in 0..=INITIAL_CAPACITY {
            s.push(u8::try_from(b % 256).unwrap());
        }
        assert_eq!(s.len(), INITIAL_CAPACITY + 1);
        assert!(s.data.capacity() >= INITIAL_CAPACITY + INITIAL_CAPACITY / 2);
    }

    #[test]
    fn growth_preserves_staged_bytes() {
        let mut s = Stack::new();
        let mark = s.mark();
        let input: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
        for chunk in input.chunks(7) {
            s.extend_from_slice(chunk);
        }
        assert_eq!(s.staged(&mark), input.as_slice());
        assert_eq!(s.pop_frame(mark), input);
        assert!(s.is_empty());
    }

    #[test]
    fn nested_frames_pop_in_order() {
        let mut s = Stack::new();
        let outer = s.mark();
        s.push('a');
        let inner = s.mark();
        s.push('b');
        s.push('c');
        assert_eq!(s.pop_frame(inner), vec!['b', 'c']);
        s.push('d');
        let frame = s.pop_frame(outer);
        assert_eq!(frame, vec!['a', 'd']);
        assert!(frame.capacity() < INITIAL_CAPACITY);
        assert!(s.is_empty());
    }

    #[test]
    fn rewind_drops_staged_items() {
        let item = Rc::new(());
        let mut s = Stack::new();
        s.push(Rc::clone(&item));
        let mark = s.mark();
        s.push(Rc::clone(&item));
        s.push(Rc::clone(&item));
        assert_eq!(Rc::strong_count(&item), 4);
        s.rewind(mark);
        assert_eq!(Rc::strong_count(&item), 2);
        assert_eq!(s.len(), 1);
    }
}
