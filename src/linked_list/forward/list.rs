use core::mem;

use super::iter::{Iter, IterMut, RawIter};
use super::position::Position;
use super::slot::{Arena, HEAD, Link};

/// A singly linked list with an always-present sentinel cell.
///
/// Cells are kept in an arena and chained by index, starting at the
/// sentinel. Insertion and removal happen after a [`Position`], and the
/// sentinel's position, [`before_begin`](Self::before_begin), makes the front
/// of the list an ordinary insertion point.
///
/// The list is not internally synchronized. Share it between threads behind
/// a lock.
pub struct ForwardList<T> {
    cells: Arena<T>,
    len: usize,
}

impl<T> ForwardList<T> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Arena::with_capacity(capacity),
            len: 0,
        }
    }

    /// The number of elements the list can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.cells.reserve(additional);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The position of the sentinel, just before the first element.
    #[inline]
    pub fn before_begin(&self) -> Position {
        Position::BEFORE_BEGIN
    }

    /// The position of the first element, or [`end`](Self::end) if the list
    /// is empty.
    #[inline]
    pub fn begin(&self) -> Position {
        self.position_of(self.cells.first())
    }

    /// The position past the last element.
    #[inline]
    pub fn end(&self) -> Position {
        Position::END
    }

    /// Returns `true` if `pos` is the sentinel position.
    #[inline]
    pub fn is_before_begin(&self, pos: Position) -> bool {
        pos == Position::BEFORE_BEGIN
    }

    /// Returns the position following `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end, references an erased cell, or comes from
    /// another list.
    pub fn advance(&self, pos: Position) -> Position {
        self.position_of(self.cells.slot(self.linked_index(pos)).next())
    }

    /// Returns the element at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the sentinel, the end, an erased cell, or comes
    /// from another list.
    pub fn get(&self, pos: Position) -> &T {
        match self.cells.value(self.element_index(pos)) {
            Some(value) => value,
            None => unreachable!("checked cell holds no value"),
        }
    }

    /// Returns the element at `pos` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the sentinel, the end, an erased cell, or comes
    /// from another list.
    pub fn get_mut(&mut self, pos: Position) -> &mut T {
        let index = self.element_index(pos);
        match self.cells.value_mut(index) {
            Some(value) => value,
            None => unreachable!("checked cell holds no value"),
        }
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cells.first().and_then(|index| self.cells.value(index))
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.cells.first() {
            Some(index) => self.cells.value_mut(index),
            None => None,
        }
    }

    /// Prepends `value` to the list.
    pub fn push_front(&mut self, value: T) {
        let first = self.cells.first();
        let index = self.cells.alloc(value, first);
        self.cells.slot_mut(HEAD).set_next(Some(index));
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_after(Position::BEFORE_BEGIN)
    }

    /// Inserts `value` right after `pos` and returns the position of the new
    /// element.
    ///
    /// Inserting after [`before_begin`](Self::before_begin) is the same as
    /// [`push_front`](Self::push_front).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end, references an erased cell, or comes from
    /// another list.
    pub fn insert_after(&mut self, pos: Position, value: T) -> Position {
        let index = self.linked_index(pos);
        let next = self.cells.slot(index).next();
        let inserted = self.cells.alloc(value, next);
        self.cells.slot_mut(index).set_next(Some(inserted));
        self.len += 1;
        self.position_of(Some(inserted))
    }

    /// Removes the element right after `pos` and returns the position that
    /// now follows `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end, references an erased cell, comes from
    /// another list, or is followed by no element.
    pub fn erase_after(&mut self, pos: Position) -> Position {
        assert!(
            self.remove_after(pos).is_some(),
            "no element follows the position"
        );
        self.advance(pos)
    }

    /// Removes the element right after `pos` and returns it, or `None` if
    /// `pos` is the last cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end, references an erased cell, or comes from
    /// another list.
    pub fn remove_after(&mut self, pos: Position) -> Option<T> {
        let index = self.linked_index(pos);
        let removed = self.cells.slot(index).next()?;
        let next = self.cells.slot(removed).next();
        self.cells.slot_mut(index).set_next(next);
        self.len -= 1;
        Some(self.cells.release(removed))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.len = 0;
    }

    /// Exchanges the contents of two lists without touching any element.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.cells, &mut other.cells);
        mem::swap(&mut self.len, &mut other.len);
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        // SAFETY: the arena stays borrowed for the iterator's lifetime.
        unsafe { RawIter::new(self.cells.as_ptr(), self.cells.tag(), self.cells.first(), self.len) }
    }

    /// Returns an iterator over mutable references to the elements, front to
    /// back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let tag = self.cells.tag();
        let first = self.cells.first();
        // SAFETY: the arena stays exclusively borrowed for the iterator's
        // lifetime.
        unsafe { RawIter::new(self.cells.as_mut_ptr(), tag, first, self.len) }
    }

    /// The position of the last cell, which is the sentinel when the list is
    /// empty.
    fn last(&self) -> Position {
        let mut pos = Position::BEFORE_BEGIN;
        loop {
            let next = self.advance(pos);
            if next.is_end() {
                return pos;
            }
            pos = next;
        }
    }

    fn position_of(&self, index: Option<usize>) -> Position {
        match index {
            Some(index) => match self.cells.generation(index) {
                Some(generation) => Position::cell(index, generation, self.cells.tag()),
                None => unreachable!("chain reached a cell without a value"),
            },
            None => Position::END,
        }
    }

    /// The slot index of the sentinel or element at `pos`.
    fn linked_index(&self, pos: Position) -> usize {
        match pos.index() {
            Some(HEAD) => HEAD,
            Some(index) => self.checked_cell(pos, index),
            None => panic!("position is past the end of the list"),
        }
    }

    /// The slot index of the element at `pos`.
    fn element_index(&self, pos: Position) -> usize {
        match pos.index() {
            Some(HEAD) | None => panic!("position does not reference an element"),
            Some(index) => self.checked_cell(pos, index),
        }
    }

    fn checked_cell(&self, pos: Position, index: usize) -> usize {
        assert!(
            pos.tag() == self.cells.tag(),
            "position does not belong to this list"
        );
        assert!(
            self.cells.generation(index) == Some(pos.generation()),
            "position references an erased cell"
        );
        index
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        list.extend(self.iter().cloned());
        list
    }

    /// Builds the copy in a temporary and swaps it in, so `self` is left
    /// untouched if cloning an element panics.
    fn clone_from(&mut self, source: &Self) {
        let mut temp = source.clone();
        self.swap(&mut temp);
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Appends the items after the current last element.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        let mut pos = self.last();
        for value in iter {
            pos = self.insert_after(pos, value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T: Clone> From<&[T]> for ForwardList<T> {
    fn from(values: &[T]) -> Self {
        let mut list = Self::with_capacity(values.len());
        for value in values.iter().rev() {
            list.push_front(value.clone());
        }
        list
    }
}
