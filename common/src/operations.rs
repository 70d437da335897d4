//! Abstract operations executed by a [`Handler`].

use std::{fmt, marker::PhantomData};

#[cfg(doc)]
use crate::Handler;

/// Operation to insert a value.
#[derive(Clone, Copy, Debug)]
pub struct Insert<T>(pub T);

/// Operation to update a value.
#[derive(Clone, Copy, Debug)]
pub struct Update<T>(pub T);

/// Operation to select a value.
#[derive(Clone, Copy, Debug)]
pub struct Select<T>(pub T);

/// Selector of `W` by `B`.
///
/// Only `B` is stored, so `W` doesn't need to be [`Clone`] or [`fmt::Debug`]
/// for [`By`] to be.
pub struct By<W, B> {
    /// Type of the value to select.
    _what: PhantomData<fn() -> W>,

    /// Value to select by.
    by: B,
}

impl<W, B> By<W, B> {
    /// Creates a new [`By`] with the given value.
    #[must_use]
    pub fn new(by: B) -> Self {
        Self {
            _what: PhantomData,
            by,
        }
    }

    /// Consumes this [`By`] and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.by
    }
}

impl<W, B: Clone> Clone for By<W, B> {
    fn clone(&self) -> Self {
        Self::new(self.by.clone())
    }
}

impl<W, B: Copy> Copy for By<W, B> {}

impl<W, B: fmt::Debug> fmt::Debug for By<W, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("By")
            .field(&std::any::type_name::<W>())
            .field(&self.by)
            .finish()
    }
}
