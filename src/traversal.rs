use crate::direction::Direction;
use crate::range::Range;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraversalError {
    /// Advanced past the last member still present.
    Exhausted,
    InvalidState(InvalidState),
}

/// Reasons [`Traversal::remove`] refuses to remove anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidState {
    /// The traversal has not produced a value yet.
    NotAdvanced,
    /// The value under the cursor is already gone.
    AlreadyRemoved,
}

impl TraversalError {
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}

impl From<InvalidState> for TraversalError {
    fn from(value: InvalidState) -> Self {
        Self::InvalidState(value)
    }
}

#[rustfmt::skip] // keep compact
impl std::fmt::Display for TraversalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted
                => write!(f, "no more elements in range"),
            Self::InvalidState(e)
                => write!(f, "invalid state: {e}"),
        }
    }
}

#[rustfmt::skip]
impl std::fmt::Display for InvalidState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAdvanced
                => write!(f, "a value must be produced before it can be removed"),
            Self::AlreadyRemoved
                => write!(f, "cannot remove repeatedly without advancing"),
        }
    }
}

impl std::error::Error for TraversalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Exhausted => None,
            Self::InvalidState(e) => Some(e),
        }
    }
}

impl std::error::Error for InvalidState {}

/// One pass over a [`Range`] in a fixed direction.
///
/// The cursor is an offset from the lower bound. It starts one step outside the
/// interval (before the lower bound going forward, after the upper bound going
/// in reverse) and moves by [`Direction::step`]. All membership state lives in
/// the borrowed range.
#[derive(Debug, Clone)]
pub struct Traversal<'r> {
    range: &'r Range,
    direction: Direction,
    cursor: isize,
}

impl<'r> Traversal<'r> {
    pub(crate) fn new(range: &'r Range, direction: Direction) -> Self {
        let cursor = match direction {
            Direction::Forward => -1,
            Direction::Reverse => range.len() as isize,
        };
        log::debug!(
            "new {direction} traversal over [{}, {}]",
            range.lower_bound(),
            range.upper_bound()
        );
        Self {
            range,
            direction,
            cursor,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Moves the cursor over any removed values directly ahead, then reports
    /// whether a value is left to produce.
    ///
    /// The skipped values stay skipped even if [`Self::try_next`] is never called.
    pub fn has_next(&mut self) -> bool {
        let step = self.direction.step();
        while self.range.is_removed_at(self.cursor + step) {
            self.cursor += step;
            log::trace!("skipping removed {}", self.range.value_at(self.cursor));
        }
        self.in_bounds(self.cursor + step)
    }

    /// Advances to and returns the next value still present.
    pub fn try_next(&mut self) -> Result<i32, TraversalError> {
        if !self.has_next() {
            return Err(TraversalError::Exhausted);
        }
        self.cursor += self.direction.step();
        Ok(self.range.value_at(self.cursor))
    }

    /// Removes the value most recently produced, from this and every other
    /// traversal over the same range.
    pub fn remove(&mut self) -> Result<(), TraversalError> {
        let Ok(offset) = usize::try_from(self.cursor) else {
            return Err(self.reject(InvalidState::NotAdvanced));
        };
        if offset >= self.range.len() {
            return Err(self.reject(InvalidState::NotAdvanced));
        }
        if self.range.is_removed_at(self.cursor) {
            return Err(self.reject(InvalidState::AlreadyRemoved));
        }
        log::trace!("removing {}", self.range.value_at(self.cursor));
        self.range.mark_removed_at(offset);
        Ok(())
    }

    fn reject(&self, reason: InvalidState) -> TraversalError {
        log::debug!("{} traversal refused removal: {reason}", self.direction);
        reason.into()
    }

    fn in_bounds(&self, offset: isize) -> bool {
        0 <= offset && offset < self.range.len() as isize
    }
}

impl Iterator for Traversal<'_> {
    type Item = i32;
    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl std::iter::FusedIterator for Traversal<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_then_reverse() {
        let range = Range::new(3, 10);
        assert_eq!(range.forward().collect::<Vec<_>>(), (3..=10).collect::<Vec<_>>());
        assert_eq!(range.reverse().collect::<Vec<_>>(), (3..=10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn peeking_consumes_gaps() {
        let range = Range::new(0, 4);
        let mut remover = range.forward();
        remover.try_next().unwrap();
        remover.try_next().unwrap();
        remover.remove().unwrap();

        let mut walker = range.forward();
        assert_eq!(walker.try_next(), Ok(0));
        assert!(walker.has_next());
        // the cursor now sits on the removed 1
        assert_eq!(
            walker.remove(),
            Err(TraversalError::InvalidState(InvalidState::AlreadyRemoved))
        );
        assert_eq!(walker.try_next(), Ok(2));
    }

    #[test]
    fn has_next_is_repeatable() {
        let range = Range::new(1, 2);
        let mut traversal = range.reverse();
        assert!(traversal.has_next());
        assert!(traversal.has_next());
        assert_eq!(traversal.try_next(), Ok(2));
    }

    #[test]
    fn remove_before_advancing() {
        let range = Range::new(1, 3);
        for mut traversal in [range.forward(), range.reverse()] {
            assert_eq!(
                traversal.remove(),
                Err(TraversalError::InvalidState(InvalidState::NotAdvanced))
            );
            // peeking alone does not count as advancing
            assert!(traversal.has_next());
            assert_eq!(
                traversal.remove(),
                Err(TraversalError::InvalidState(InvalidState::NotAdvanced))
            );
        }
        assert_eq!(range.remaining(), 3);
    }

    #[test]
    fn exhausting_a_fully_removed_range() {
        let range = Range::new(7, 8);
        let mut traversal = range.forward();
        while traversal.try_next().is_ok() {
            traversal.remove().unwrap();
        }
        let mut reverse = range.reverse();
        assert!(!reverse.has_next());
        assert_eq!(reverse.try_next(), Err(TraversalError::Exhausted));
        // the skip landed on a removed value, which is not the sentinel
        assert_eq!(
            reverse.remove(),
            Err(TraversalError::InvalidState(InvalidState::AlreadyRemoved))
        );
    }

    #[test]
    fn error_messages() {
        let e = TraversalError::from(InvalidState::NotAdvanced);
        assert!(e.is_invalid_state());
        assert!(std::error::Error::source(&e).is_some());
        assert_eq!(
            e.to_string(),
            "invalid state: a value must be produced before it can be removed"
        );
        assert!(!TraversalError::Exhausted.is_invalid_state());
        assert_eq!(TraversalError::Exhausted.to_string(), "no more elements in range");
    }
}
