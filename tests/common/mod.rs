use bidirange::{Direction, Range};

/// Drives a fresh pass in `direction` to the end using only `has_next`/`try_next`.
pub fn drain(range: &Range, direction: Direction) -> Vec<i32> {
    let mut traversal = range.traversal(direction);
    let mut values = vec![];
    while traversal.has_next() {
        values.push(traversal.try_next().expect("has_next promised a value"));
    }
    values
}

/// Walks forward once, removing every value for which `should_remove` holds.
pub fn remove_where(range: &Range, should_remove: impl Fn(i32) -> bool) {
    let mut traversal = range.forward();
    while let Ok(value) = traversal.try_next() {
        if should_remove(value) {
            traversal.remove().expect("first removal of a produced value");
        }
    }
}
