//! Linked list implementations.
//!
//! # Examples
//!
//! ```
//! use forward_collections::linked_list::forward::ForwardList;
//!
//! let mut list = ForwardList::from([1, 2, 4]);
//! let two = list.advance(list.begin());
//! list.insert_after(two, 3);
//! list.push_front(0);
//!
//! assert_eq!(list.len(), 5);
//! assert!(list.iter().copied().eq([0, 1, 2, 3, 4]));
//! ```
pub mod forward;
