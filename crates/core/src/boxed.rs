//! Boxed integers with an explicit small-value identity cache
//!
//! Rust has no runtime that boxes integers behind the scenes, so the cache
//! the demonstration needs is modeled explicitly: [`IntCache`] interns one
//! shared box per value in -128..=127, and [`IntCache::boxed`] hands out
//! clones of the interned box for in-range values and a fresh allocation
//! otherwise. Identity ([`BoxedInt::same_instance`], pointer equality) is a
//! property of the cache; value equality (`==`) always compares the numbers.

use std::fmt;
use std::rc::Rc;

/// Lowest value the cache interns
pub const CACHE_MIN: i64 = -128;

/// Highest value the cache interns
pub const CACHE_MAX: i64 = 127;

/// A heap-allocated integer with shared ownership
///
/// Cloning a `BoxedInt` clones the handle, not the allocation; two clones
/// of one box are the same instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxedInt(Rc<i64>);

impl BoxedInt {
    /// Box a value, bypassing any cache
    pub fn new(value: i64) -> Self {
        BoxedInt(Rc::new(value))
    }

    /// Unbox: the plain integer value
    pub fn value(&self) -> i64 {
        *self.0
    }

    /// True when both handles point at the same allocation
    ///
    /// This is identity, not value equality: two separately allocated boxes
    /// of the same number are equal but not the same instance.
    pub fn same_instance(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Display for BoxedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interning cache for small boxed integers
///
/// Models the conventional -128..=127 box cache: every request for an
/// in-range value returns a handle to the one interned box for that value.
pub struct IntCache {
    small: Vec<BoxedInt>,
}

impl IntCache {
    /// Build the cache with all 256 small values pre-interned
    pub fn new() -> Self {
        IntCache {
            small: (CACHE_MIN..=CACHE_MAX).map(BoxedInt::new).collect(),
        }
    }

    /// Box a value, sharing the interned box for -128..=127
    pub fn boxed(&self, value: i64) -> BoxedInt {
        if (CACHE_MIN..=CACHE_MAX).contains(&value) {
            self.small[(value - CACHE_MIN) as usize].clone()
        } else {
            BoxedInt::new(value)
        }
    }
}

impl Default for IntCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_unbox_roundtrip() {
        let boxed = BoxedInt::new(42);
        assert_eq!(boxed.value(), 42);
        assert_eq!(boxed.to_string(), "42");
    }

    #[test]
    fn test_clone_shares_instance() {
        let a = BoxedInt::new(7);
        let b = a.clone();
        assert!(BoxedInt::same_instance(&a, &b));
    }

    #[test]
    fn test_separate_boxes_equal_but_distinct() {
        let a = BoxedInt::new(7);
        let b = BoxedInt::new(7);
        assert_eq!(a, b);
        assert!(!BoxedInt::same_instance(&a, &b));
    }

    #[test]
    fn test_cache_shares_in_range_values() {
        let cache = IntCache::new();
        let a = cache.boxed(100);
        let b = cache.boxed(100);
        assert!(BoxedInt::same_instance(&a, &b));
        assert_eq!(a.value(), 100);
    }

    #[test]
    fn test_cache_allocates_out_of_range_values() {
        let cache = IntCache::new();
        let a = cache.boxed(128);
        let b = cache.boxed(128);
        assert!(!BoxedInt::same_instance(&a, &b));
        // Still equal by value.
        assert_eq!(a, b);
    }

    #[test]
    fn test_cache_boundaries() {
        let cache = IntCache::new();
        assert!(BoxedInt::same_instance(
            &cache.boxed(CACHE_MIN),
            &cache.boxed(CACHE_MIN)
        ));
        assert!(BoxedInt::same_instance(
            &cache.boxed(CACHE_MAX),
            &cache.boxed(CACHE_MAX)
        ));
        assert!(!BoxedInt::same_instance(
            &cache.boxed(CACHE_MIN - 1),
            &cache.boxed(CACHE_MIN - 1)
        ));
        assert!(!BoxedInt::same_instance(
            &cache.boxed(CACHE_MAX + 1),
            &cache.boxed(CACHE_MAX + 1)
        ));
    }

    #[test]
    fn test_nullable_box_is_absent() {
        let nullable: Option<BoxedInt> = None;
        assert!(nullable.is_none());

        let present = Some(BoxedInt::new(42));
        assert_eq!(present.map(|b| b.value()), Some(42));
    }
}
