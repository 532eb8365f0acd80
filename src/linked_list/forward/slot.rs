use alloc::vec::Vec;
use core::mem;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Index of the sentinel cell in every arena.
pub(crate) const HEAD: usize = 0;

/// A link to the next cell of a chain.
pub(crate) trait Link {
    /// Get the next cell in the chain
    fn next(&self) -> Option<usize>;

    /// Set the next cell in the chain
    fn set_next(&mut self, next: Option<usize>);
}

/// Source of arena tags. Tag 0 is never handed out.
static NEXT_TAG: AtomicUsize = AtomicUsize::new(1);

#[inline]
fn next_tag() -> usize {
    NEXT_TAG.fetch_add(1, Ordering::Relaxed)
}

/// A cell of the arena backing a [`ForwardList`](super::ForwardList).
///
/// A slot's generation is bumped every time it is released, so a position
/// taken before the release no longer matches the cell stored there later.
pub enum Slot<T> {
    /// The sentinel. Lives at [`HEAD`] for the whole life of the arena.
    Head { next: Option<usize> },
    /// A linked cell holding one element.
    Occupied {
        value: T,
        next: Option<usize>,
        generation: u32,
    },
    /// A released cell, threaded onto the free-list.
    Vacant {
        next_free: Option<usize>,
        generation: u32,
    },
}

impl<T> Slot<T> {
    #[inline]
    pub(crate) fn value(&self) -> Option<&T> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The generation of a cell holding a value.
    #[inline]
    pub(crate) fn generation(&self) -> Option<u32> {
        match self {
            Slot::Occupied { generation, .. } => Some(*generation),
            _ => None,
        }
    }
}

impl<T> Link for Slot<T> {
    #[inline]
    fn next(&self) -> Option<usize> {
        match self {
            Slot::Head { next } | Slot::Occupied { next, .. } => *next,
            Slot::Vacant { .. } => unreachable!("released cells are not part of the chain"),
        }
    }

    #[inline]
    fn set_next(&mut self, link: Option<usize>) {
        match self {
            Slot::Head { next } | Slot::Occupied { next, .. } => *next = link,
            Slot::Vacant { .. } => unreachable!("released cells are not part of the chain"),
        }
    }
}

/// Growable cell storage with a free-list of released slots.
///
/// Slot [`HEAD`] always holds the sentinel; every other slot is either a
/// linked cell or vacant. The tag names the arena's current set of cells: it
/// is fresh for every new arena and renewed by [`clear`](Self::clear).
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    tag: usize,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(Slot::Head { next: None });
        Self {
            slots,
            free: None,
            tag: next_tag(),
        }
    }

    #[inline]
    pub(crate) fn tag(&self) -> usize {
        self.tag
    }

    /// Number of real cells the arena can hold without reallocating.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity() - 1
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    #[inline]
    pub(crate) fn slot(&self, index: usize) -> &Slot<T> {
        &self.slots[index]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Slot<T> {
        &mut self.slots[index]
    }

    /// The generation of cell `index`, or `None` if it holds no value.
    #[inline]
    pub(crate) fn generation(&self, index: usize) -> Option<u32> {
        self.slots.get(index).and_then(Slot::generation)
    }

    #[inline]
    pub(crate) fn value(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Slot::value)
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Slot::value_mut)
    }

    #[inline]
    pub(crate) fn first(&self) -> Option<usize> {
        self.slots[HEAD].next()
    }

    /// Store `value` in a fresh cell linked to `next`, reusing a vacant slot
    /// when one exists.
    pub(crate) fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        match self.free {
            Some(index) => {
                let &Slot::Vacant {
                    next_free,
                    generation,
                } = &self.slots[index]
                else {
                    unreachable!("free-list points at a live cell");
                };
                self.free = next_free;
                self.slots[index] = Slot::Occupied {
                    value,
                    next,
                    generation,
                };
                index
            }
            None => {
                self.slots.push(Slot::Occupied {
                    value,
                    next,
                    generation: 0,
                });
                self.slots.len() - 1
            }
        }
    }

    /// Move the value out of cell `index` and put the slot on the free-list.
    ///
    /// The caller unlinks the cell first.
    pub(crate) fn release(&mut self, index: usize) -> T {
        let Some(generation) = self.slots[index].generation() else {
            panic!("only cells holding a value can be released");
        };
        let vacant = Slot::Vacant {
            next_free: self.free,
            generation: generation.wrapping_add(1),
        };
        self.free = Some(index);
        match mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied { value, .. } => value,
            _ => unreachable!(),
        }
    }

    /// Drop every real cell, keeping the allocation and the sentinel.
    ///
    /// Truncating forgets slot generations, so the arena takes a new tag.
    pub(crate) fn clear(&mut self) {
        self.slots.truncate(1);
        self.slots[HEAD].set_next(None);
        self.free = None;
        self.tag = next_tag();
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> NonNull<Slot<T>> {
        NonNull::from(self.slots.as_slice()).cast()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> NonNull<Slot<T>> {
        NonNull::from(self.slots.as_mut_slice()).cast()
    }
}
