use super::slot::HEAD;

/// A non-owning handle to a cell of a [`ForwardList`](super::ForwardList).
///
/// A position references the sentinel (see
/// [`before_begin`](super::ForwardList::before_begin)), an element, or no cell
/// at all, which is the [`end`](super::ForwardList::end) of the list. Two
/// positions are equal iff they reference the same cell. The default
/// position is the end.
///
/// Positions are plain values: reading through one goes through the list
/// with [`get`](super::ForwardList::get) or
/// [`get_mut`](super::ForwardList::get_mut), so the same handle serves shared
/// and exclusive access.
///
/// An element position remembers the list it came from and the generation of
/// its cell. Using it after the cell was erased, after the list was cleared,
/// or with another list panics. Swapping two lists moves their element
/// positions along with the cells. The before-begin and end positions belong
/// to every list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    index: Option<usize>,
    generation: u32,
    tag: usize,
}

impl Position {
    /// The position past the last element of any list.
    pub const END: Self = Self {
        index: None,
        generation: 0,
        tag: 0,
    };

    pub(crate) const BEFORE_BEGIN: Self = Self {
        index: Some(HEAD),
        generation: 0,
        tag: 0,
    };

    #[inline]
    pub(crate) const fn cell(index: usize, generation: u32, tag: usize) -> Self {
        Self {
            index: Some(index),
            generation,
            tag,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> Option<usize> {
        self.index
    }

    #[inline]
    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }

    #[inline]
    pub(crate) const fn tag(self) -> usize {
        self.tag
    }

    /// Returns `true` if the position references no cell.
    #[inline]
    pub const fn is_end(self) -> bool {
        self.index.is_none()
    }
}
