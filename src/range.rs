use std::cell::Cell;

use crate::direction::Direction;
use crate::traversal::Traversal;

/// A closed interval of integers whose members can be removed while walking it.
///
/// The bounds never change after construction. Which integers are still present
/// is tracked in one record shared by every [`Traversal`] borrowed from this
/// range, so a removal made through one traversal is seen by all of them.
///
/// The membership record and the direction flag are not synchronized, which is
/// why `Range` is `Send` but not `Sync`.
#[derive(Debug)]
pub struct Range {
    lower: i32,
    upper: i32,
    removed: Box<[Cell<bool>]>,
    direction: Cell<Direction>,
}

impl Range {
    /// Accepts the bounds in either order; both are inclusive.
    pub fn new(a: i32, b: i32) -> Self {
        let lower = a.min(b);
        let upper = a.max(b);
        let len = (i64::from(upper) - i64::from(lower) + 1) as usize;
        log::debug!("new range [{lower}, {upper}] with {len} members");
        Self {
            lower,
            upper,
            removed: (0..len).map(|_| Cell::new(false)).collect(),
            direction: Cell::new(Direction::Forward),
        }
    }

    pub fn lower_bound(&self) -> i32 {
        self.lower
    }

    pub fn upper_bound(&self) -> i32 {
        self.upper
    }

    /// Number of integers in the interval, removed or not.
    pub fn len(&self) -> usize {
        self.removed.len()
    }

    /// Always false: even `Range::new(n, n)` holds one integer.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }

    /// Number of integers not yet removed.
    pub fn remaining(&self) -> usize {
        self.removed.iter().filter(|r| !r.get()).count()
    }

    /// Whether `value` lies within the bounds and has not been removed.
    pub fn contains(&self, value: i32) -> bool {
        match self.offset_of(value) {
            Some(offset) => !self.removed[offset].get(),
            None => false,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction.get()
    }

    /// Only affects traversals created afterwards.
    pub fn set_direction(&self, direction: Direction) {
        log::trace!("direction set to {direction}");
        self.direction.set(direction);
    }

    /// `true` for reverse, `false` for forward.
    pub fn set_inverted(&self, is_inverted: bool) {
        self.set_direction(Direction::from_inverted(is_inverted));
    }

    /// Starts a fresh pass in the current direction.
    pub fn iter(&self) -> Traversal<'_> {
        self.traversal(self.direction())
    }

    pub fn forward(&self) -> Traversal<'_> {
        self.traversal(Direction::Forward)
    }

    pub fn reverse(&self) -> Traversal<'_> {
        self.traversal(Direction::Reverse)
    }

    pub fn traversal(&self, direction: Direction) -> Traversal<'_> {
        Traversal::new(self, direction)
    }

    fn offset_of(&self, value: i32) -> Option<usize> {
        if value < self.lower || value > self.upper {
            return None;
        }
        Some((i64::from(value) - i64::from(self.lower)) as usize)
    }

    /// Out-of-bounds offsets, including the sentinels, count as present.
    pub(crate) fn is_removed_at(&self, offset: isize) -> bool {
        usize::try_from(offset)
            .ok()
            .and_then(|offset| self.removed.get(offset))
            .is_some_and(|removed| removed.get())
    }

    pub(crate) fn mark_removed_at(&self, offset: usize) {
        self.removed[offset].set(true);
    }

    pub(crate) fn value_at(&self, offset: isize) -> i32 {
        (i64::from(self.lower) + offset as i64) as i32
    }
}

impl<'r> IntoIterator for &'r Range {
    type Item = i32;
    type IntoIter = Traversal<'r>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
