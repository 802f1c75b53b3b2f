//! Bidirectional cursors over the days of a church year.
//!
//! [`Cursor`] is the bare position: it knows how many days there are, which
//! day was yielded last, and which comes next, so callers can step either
//! way or peek at neighbours without losing their place.  [`YearCursor`]
//! pairs a position with a built [`ChurchYear`].

use cc_time::Date;

use crate::calendar_date::CalendarDate;
use crate::church_year::ChurchYear;

/// A position in a sequence of `len` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    len: usize,
    /// Index the next step forward yields.
    next: usize,
    /// Index yielded last; `None` before the first step.
    current: Option<usize>,
}

impl Cursor {
    /// A cursor before the first of `len` days.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            next: 0,
            current: None,
        }
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if there are no days.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Step back and return the new index, or `None` at the first day.
    pub fn previous(&mut self) -> Option<usize> {
        let index = self.current?.checked_sub(1)?;
        self.current = Some(index);
        self.next = index + 1;
        Some(index)
    }

    /// Index yielded last.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Index before the current one, without moving.
    pub fn peek_previous(&self) -> Option<usize> {
        self.current?.checked_sub(1)
    }

    /// Index after the current one, without moving.
    pub fn peek_next(&self) -> Option<usize> {
        (self.next < self.len).then_some(self.next)
    }

    /// Move to `index` as though it had just been yielded.
    pub fn jump_by_index(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.current = Some(index);
        self.next = index + 1;
        Some(index)
    }
}

impl Iterator for Cursor {
    type Item = usize;

    /// Advance and return the new index, or `None` past the last day.
    fn next(&mut self) -> Option<usize> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        self.current = Some(index);
        Some(index)
    }
}

/// A [`Cursor`] over a built [`ChurchYear`], yielding its days.
#[derive(Debug, Clone)]
pub struct YearCursor<'a> {
    year: &'a ChurchYear,
    cursor: Cursor,
}

impl<'a> YearCursor<'a> {
    pub(crate) fn new(year: &'a ChurchYear) -> Self {
        Self {
            year,
            cursor: Cursor::new(year.dates().len()),
        }
    }

    /// Step back one day.
    pub fn previous(&mut self) -> Option<&'a CalendarDate> {
        self.cursor.previous().map(|i| &self.year.dates()[i])
    }

    /// The day yielded last.
    pub fn current(&self) -> Option<&'a CalendarDate> {
        self.cursor.current_index().map(|i| &self.year.dates()[i])
    }

    /// The day before the current one, without moving.
    pub fn get_previous(&self) -> Option<&'a CalendarDate> {
        self.cursor.peek_previous().map(|i| &self.year.dates()[i])
    }

    /// The day after the current one, without moving.
    pub fn get_next(&self) -> Option<&'a CalendarDate> {
        self.cursor.peek_next().map(|i| &self.year.dates()[i])
    }

    /// The day at `index`, without moving.
    pub fn get_by_index(&self, index: usize) -> Option<&'a CalendarDate> {
        self.year.dates().get(index)
    }

    /// The day with ISO key `key`, without moving.
    pub fn get_by_key(&self, key: &str) -> Option<&'a CalendarDate> {
        self.year.get_date(key)
    }

    /// Move to `index`.
    pub fn jump_by_index(&mut self, index: usize) -> Option<&'a CalendarDate> {
        self.cursor
            .jump_by_index(index)
            .map(|i| &self.year.dates()[i])
    }

    /// Move to the day with ISO key `key`.
    pub fn jump_by_key(&mut self, key: &str) -> Option<&'a CalendarDate> {
        let index = key
            .parse::<Date>()
            .ok()
            .and_then(|d| self.year.index_of(d))?;
        self.jump_by_index(index)
    }

    /// Index of the day yielded last.
    pub fn current_index(&self) -> Option<usize> {
        self.cursor.current_index()
    }
}

impl<'a> Iterator for YearCursor<'a> {
    type Item = &'a CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().map(|i| &self.year.dates()[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.cursor.len() - self.cursor.peek_next().unwrap_or(self.cursor.len());
        (left, Some(left))
    }
}

impl ExactSizeIterator for YearCursor<'_> {}
