//! Thread-safe shared ownership handle.
//!
//! [`Shared<T>`] is a reference-counted handle: cloning a handle increments a
//! shared atomic count, moving one transfers ownership without touching it,
//! and the pointee is freed exactly when the last handle drops. It is backed
//! by [`std::sync::Arc`] rather than a hand-rolled count-plus-mutex pair, so
//! refcount mutation is lock-free and the observable semantics stay the same.
//!
//! Plugins themselves are not owned through `Shared`; they go through the
//! ABI destroyer (see [`crate::plugin_system::abi`]). `Shared` is the handle
//! used for everything else that outlives a single registry lock, such as
//! resource values and the resource registry itself.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted, thread-safe handle to a shared pointee.
pub struct Shared<T: ?Sized>(Arc<T>);

impl<T> Shared<T> {
    /// Takes ownership of `value` and hands back the first handle to it.
    pub fn new(value: T) -> Self {
        Shared(Arc::new(value))
    }
}

impl<T: ?Sized> Shared<T> {
    /// Borrow the pointee.
    ///
    /// Inherent methods win over `Deref`: on a pointee with its own `get`,
    /// call that one through an explicit `&T` borrow.
    pub fn get(&self) -> &T {
        &self.0
    }

    /// Number of live handles to this pointee.
    pub fn ref_count(this: &Self) -> usize {
        Arc::strong_count(&this.0)
    }

    /// Whether two handles reference the same pointee.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&self.0).finish()
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
