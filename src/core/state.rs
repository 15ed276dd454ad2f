//! Storage abstraction shared by the controllers.
//!
//! In the app every cell is a Leptos signal; tests drive the same
//! controllers over plain `RefCell`s.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

/// A readable and writable value.
pub trait StateCell<T> {
    /// Current value, without subscribing to changes.
    fn load(&self) -> T;

    fn store(&self, value: T);

    fn update_with(&self, f: impl FnOnce(T) -> T) {
        self.store(f(self.load()));
    }
}

impl<T> StateCell<T> for RwSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn load(&self) -> T {
        self.get_untracked()
    }

    fn store(&self, value: T) {
        // The owner may already be disposed when a late callback fires.
        self.try_set(value);
    }
}

impl<T: Clone> StateCell<T> for RefCell<T> {
    fn load(&self) -> T {
        self.borrow().clone()
    }

    fn store(&self, value: T) {
        *self.borrow_mut() = value;
    }
}

impl<T, S: StateCell<T> + ?Sized> StateCell<T> for Rc<S> {
    fn load(&self) -> T {
        (**self).load()
    }

    fn store(&self, value: T) {
        (**self).store(value)
    }
}
