//! # Forward List
//!
//! A singly linked sequence container that inserts and removes after a
//! position.
//!
//! ## Core Components
//!
//! - [`ForwardList`]: the container. Its cells live in an arena and are
//!   chained by index from a sentinel cell.
//! - [`Position`]: a copyable handle to a cell, used to walk the list and as
//!   the anchor of [`ForwardList::insert_after`] and
//!   [`ForwardList::erase_after`].
//! - [`RawIter`]: a forward iterator generic over [`Access`], aliased as
//!   [`Iter`] and [`IterMut`]; [`IntoIter`] consumes the list.
//!
//! ## Preconditions
//!
//! Operations that need a position to reference a cell panic when it does
//! not: advancing or inserting after the end, reading the sentinel, erasing
//! after the last element. A position is invalidated when its cell is
//! erased; its slot may then be reused by a later insertion.
//!
//! # Examples
//!
//! ```
//! use forward_collections::linked_list::forward::ForwardList;
//!
//! let mut list = ForwardList::from([1, 2, 3, 4]);
//! let two = list.advance(list.begin());
//! let next = list.erase_after(two);
//!
//! assert_eq!(*list.get(next), 4);
//! assert_eq!(list, ForwardList::from([1, 2, 4]));
//! assert_eq!(list.len(), 3);
//! ```

mod iter;
mod list;
mod ops;
mod position;
mod slot;

#[cfg(test)]
mod tests;

pub use iter::{Access, Exclusive, IntoIter, Iter, IterMut, RawIter, Shared};
pub use list::ForwardList;
pub use ops::swap;
pub use position::Position;
