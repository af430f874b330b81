//! Mutable named/aged record behind a sharing handle
//!
//! [`PersonHandle`] is the only way to hold a `Person`: cloning the handle
//! copies the reference, not the record, so a field written through one
//! handle is read back through every other handle to the same instance.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The record itself; reachable only through a handle
#[derive(Debug)]
struct Person {
    name: String,
    age: i64,
}

/// Shared-ownership handle to a heap-allocated person record
#[derive(Debug, Clone)]
pub struct PersonHandle(Rc<RefCell<Person>>);

impl PersonHandle {
    /// Allocate a new record and return its first handle
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        PersonHandle(Rc::new(RefCell::new(Person {
            name: name.into(),
            age,
        })))
    }

    /// The record's name
    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    /// The record's current age
    pub fn age(&self) -> i64 {
        self.0.borrow().age
    }

    /// Overwrite the age; visible through every handle to this record
    pub fn set_age(&self, age: i64) {
        self.0.borrow_mut().age = age;
    }

    /// True when both handles point at the same record
    pub fn same_instance(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Display for PersonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let person = self.0.borrow();
        write!(f, "{} ({})", person.name, person.age)
    }
}
