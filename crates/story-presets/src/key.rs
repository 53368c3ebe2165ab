//! Typed preset keys

use std::fmt;
use std::marker::PhantomData;

/// Name of a preset slot together with the type its value is expected to have.
///
/// The pipeline itself stores untyped JSON values; a key only fixes how
/// callers encode the default and decode the result.
pub struct PresetKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PresetKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for PresetKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PresetKey<T> {}

impl<T> fmt::Debug for PresetKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PresetKey").field(&self.name).finish()
    }
}

impl<T> fmt::Display for PresetKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
