//! Fixed-length integer sequences with aliasing handle semantics
//!
//! [`SharedSeq`] is a handle to heap storage, not the storage itself:
//! [`SharedSeq::alias`] (and `clone`) produce a second name for the same
//! elements, so a write through either handle is visible through both.
//! The length is fixed at construction; there is no grow/shrink API.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};

/// Handle to a fixed-length, heap-allocated integer sequence
///
/// Cloning the handle shares the storage. Use [`SharedSeq::same_storage`]
/// to distinguish two names for one sequence from two separate sequences.
#[derive(Debug, Clone)]
pub struct SharedSeq(Rc<RefCell<Vec<i64>>>);

impl SharedSeq {
    /// Allocate a sequence with the given elements; length is fixed
    pub fn new(elements: Vec<i64>) -> Self {
        SharedSeq(Rc::new(RefCell::new(elements)))
    }

    /// Bind another name to the same storage (no copy)
    pub fn alias(&self) -> Self {
        self.clone()
    }

    /// Fixed element count
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// True for a zero-length sequence
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Element at `index`, or None past the end
    pub fn get(&self, index: usize) -> Option<i64> {
        self.0.borrow().get(index).copied()
    }

    /// Overwrite the element at `index`
    ///
    /// The write is visible through every alias of this sequence.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` past the fixed length.
    pub fn set(&self, index: usize, value: i64) -> Result<()> {
        let mut elements = self.0.borrow_mut();
        let len = elements.len();
        match elements.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// True when both handles name the same storage
    pub fn same_storage(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}
