use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::ForwardList;
use super::position::Position;
use super::slot::Slot;

mod sealed {
    use core::ptr::NonNull;

    use super::Slot;

    pub trait Sealed {
        /// The reference handed out for each element.
        type Ref<'a, T: 'a>;

        /// Borrow the value of an occupied cell and read its successor.
        ///
        /// # Safety
        ///
        /// `slot` must point at an occupied cell that stays valid for `'a`.
        /// For exclusive access no other reference to the cell may exist
        /// during `'a`.
        unsafe fn project<'a, T: 'a>(slot: NonNull<Slot<T>>) -> (Self::Ref<'a, T>, Option<usize>);
    }
}

/// The access mode of a [`RawIter`]: [`Shared`] or [`Exclusive`].
pub trait Access: sealed::Sealed {}

/// Shared access, yielding `&T`.
#[derive(Debug)]
pub enum Shared {}

/// Exclusive access, yielding `&mut T`.
#[derive(Debug)]
pub enum Exclusive {}

impl sealed::Sealed for Shared {
    type Ref<'a, T: 'a> = &'a T;

    #[inline]
    unsafe fn project<'a, T: 'a>(slot: NonNull<Slot<T>>) -> (&'a T, Option<usize>) {
        match unsafe { slot.as_ref() } {
            Slot::Occupied { value, next, .. } => (value, *next),
            _ => unreachable!("chain reached a cell without a value"),
        }
    }
}

impl sealed::Sealed for Exclusive {
    type Ref<'a, T: 'a> = &'a mut T;

    #[inline]
    unsafe fn project<'a, T: 'a>(slot: NonNull<Slot<T>>) -> (&'a mut T, Option<usize>) {
        match unsafe { &mut *slot.as_ptr() } {
            Slot::Occupied { value, next, .. } => (value, *next),
            _ => unreachable!("chain reached a cell without a value"),
        }
    }
}

impl Access for Shared {}
impl Access for Exclusive {}

/// A forward iterator over the elements of a [`ForwardList`], generic over
/// the access mode.
pub struct RawIter<'a, T: 'a, A: Access> {
    slots: NonNull<Slot<T>>,
    tag: usize,
    current: Option<usize>,
    remaining: usize,
    _marker: PhantomData<(A::Ref<'a, T>, A)>,
}

/// An iterator over shared references to the elements of a [`ForwardList`].
pub type Iter<'a, T> = RawIter<'a, T, Shared>;

/// An iterator over mutable references to the elements of a [`ForwardList`].
pub type IterMut<'a, T> = RawIter<'a, T, Exclusive>;

impl<'a, T: 'a, A: Access> RawIter<'a, T, A> {
    /// # Safety
    ///
    /// `slots` must be the base of an arena borrowed for `'a` (exclusively
    /// for [`Exclusive`]) and tagged `tag`, `current` the first cell of its
    /// chain and `remaining` the number of cells in that chain.
    #[inline]
    pub(crate) unsafe fn new(
        slots: NonNull<Slot<T>>,
        tag: usize,
        current: Option<usize>,
        remaining: usize,
    ) -> Self {
        Self {
            slots,
            tag,
            current,
            remaining,
            _marker: PhantomData,
        }
    }

    /// The position of the element the next call to `next` yields, or the
    /// end position once the iterator is exhausted.
    #[inline]
    pub fn position(&self) -> Position {
        match self.current {
            Some(index) => {
                // SAFETY: the cell at `current` has not been handed out yet,
                // so nothing else borrows it.
                let slot = unsafe { self.slots.add(index).as_ref() };
                match slot.generation() {
                    Some(generation) => Position::cell(index, generation, self.tag),
                    None => unreachable!("chain reached a cell without a value"),
                }
            }
            None => Position::END,
        }
    }
}

impl<'a, T: 'a, A: Access> Iterator for RawIter<'a, T, A> {
    type Item = A::Ref<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        // SAFETY: chain indices are in bounds of the borrowed arena and the
        // chain is acyclic, so every cell is handed out at most once.
        let (value, next) = unsafe { A::project(self.slots.add(index)) };
        self.current = next;
        self.remaining -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, A: Access> ExactSizeIterator for RawIter<'a, T, A> {}

impl<'a, T: 'a, A: Access> FusedIterator for RawIter<'a, T, A> {}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            tag: self.tag,
            current: self.current,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

// The arena pointer carries no thread affinity of its own; the borrow handed
// out per element decides.
unsafe impl<'a, T: 'a, A: Access> Send for RawIter<'a, T, A> where A::Ref<'a, T>: Send {}
unsafe impl<'a, T: 'a, A: Access> Sync for RawIter<'a, T, A> where A::Ref<'a, T>: Sync {}

/// An owning iterator over the elements of a [`ForwardList`], front to back.
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) fn new(list: ForwardList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}
