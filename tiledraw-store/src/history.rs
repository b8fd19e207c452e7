//! Bounded undo history
//!
//! `Stack` is an immutable stack that forgets its oldest entries once it
//! grows past its limit. `pushed` and `popped` return new stacks, so a stack
//! can live directly inside a [`Store`](crate::Store).

use std::collections::VecDeque;

/// Default number of undo steps kept
pub const UNDO_STACK_LIMIT: usize = 20;

/// Immutable bounded stack (oldest entry at the bottom)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: VecDeque<T>,
    limit: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new(UNDO_STACK_LIMIT)
    }
}

impl<T> Stack<T> {
    /// Create an empty stack holding at most `limit` entries
    pub fn new(limit: usize) -> Self {
        Stack {
            items: VecDeque::new(),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The most recent entry
    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> Stack<T> {
    /// A stack with `item` on top; the oldest entry is dropped past the limit
    pub fn pushed(&self, item: T) -> Self {
        if self.limit == 0 {
            return self.clone();
        }

        let mut items = self.items.clone();
        items.push_back(item);
        while items.len() > self.limit {
            items.pop_front();
        }
        Stack {
            items,
            limit: self.limit,
        }
    }

    /// The stack without its top entry, and that entry
    pub fn popped(&self) -> (Self, Option<T>) {
        let mut items = self.items.clone();
        let top = items.pop_back();
        (
            Stack {
                items,
                limit: self.limit,
            },
            top,
        )
    }
}
