//! Deduplicating change callbacks.

use std::fmt;

/// A single optional callback that never fires twice in a row for the same value.
pub struct Listener<T> {
    callback: Option<Box<dyn FnMut(T)>>,
    last: Option<T>,
}

impl<T> Default for Listener<T> {
    fn default() -> Self {
        Self {
            callback: None,
            last: None,
        }
    }
}

impl<T: Copy + PartialEq> Listener<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the callback, replacing any previous one. The new callback
    /// starts without a last value.
    pub fn set(&mut self, callback: impl FnMut(T) + 'static) {
        self.callback = Some(Box::new(callback));
        self.last = None;
    }

    pub fn clear(&mut self) {
        self.callback = None;
        self.last = None;
    }

    pub fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Last value delivered to the callback.
    pub fn last(&self) -> Option<T> {
        self.last
    }

    /// Deliver `value` unless it equals the last delivered value.
    ///
    /// Returns whether the callback ran. Without a callback nothing is
    /// recorded, so the first value after installing one always fires.
    pub fn notify(&mut self, value: T) -> bool {
        let Some(callback) = self.callback.as_mut() else {
            return false;
        };
        if self.last == Some(value) {
            return false;
        }
        self.last = Some(value);
        callback(value);
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("set", &self.callback.is_some())
            .field("last", &self.last)
            .finish()
    }
}
