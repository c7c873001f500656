//! Integer ranges.

use std::fmt;

/// `start..end` or `start..=end` over `Int`.
///
/// Ranges are lazy and restartable: [`RangeValue::iter`] can be called any
/// number of times. A range whose start is past its end is empty, never an
/// error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeValue {
    pub start: i64,
    pub end: i64,
    pub inclusive: bool,
}

impl RangeValue {
    pub const fn new(start: i64, end: i64, inclusive: bool) -> Self {
        RangeValue {
            start,
            end,
            inclusive,
        }
    }

    pub const fn exclusive(start: i64, end: i64) -> Self {
        Self::new(start, end, false)
    }

    pub const fn inclusive(start: i64, end: i64) -> Self {
        Self::new(start, end, true)
    }

    /// Number of elements: `max(0, end - start)`, plus one when inclusive.
    pub fn len(&self) -> u64 {
        let span = i128::from(self.end) - i128::from(self.start) + i128::from(self.inclusive);
        u64::try_from(span.max(0)).unwrap_or(u64::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> RangeIter {
        RangeIter {
            next: self.start,
            end: self.end,
            inclusive: self.inclusive,
            done: self.is_empty(),
        }
    }
}

impl IntoIterator for RangeValue {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = if self.inclusive { "..=" } else { ".." };
        write!(f, "{}{op}{}", self.start, self.end)
    }
}

/// Iterator over a [`RangeValue`]; handles `..=i64::MAX` without overflow.
#[derive(Clone, Debug)]
pub struct RangeIter {
    next: i64,
    end: i64,
    inclusive: bool,
    done: bool,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        let current = self.next;
        let last = if self.inclusive {
            current == self.end
        } else {
            current.checked_add(1).map_or(true, |n| n >= self.end)
        };
        match current.checked_add(1) {
            Some(n) if !last => self.next = n,
            _ => self.done = true,
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = RangeValue::new(self.next, self.end, self.inclusive).len();
        let n = usize::try_from(remaining).unwrap_or(usize::MAX);
        (n, usize::try_from(remaining).ok())
    }
}
