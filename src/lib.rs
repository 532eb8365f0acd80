//! Collections built on plain ownership and arena storage.
//!
//! The crate is `no_std` and only needs `alloc`.
#![no_std]

extern crate alloc;

pub mod linked_list;
