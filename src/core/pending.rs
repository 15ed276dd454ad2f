//! Single-slot tracking of in-flight async operations.
//!
//! A slot holds at most one tag naming the operation currently in flight
//! (a connector id for connection attempts, a chain id for network
//! switches). The tag is written before the operation starts and removed
//! when the [`PendingGuard`] is dropped, which happens whether the operation
//! succeeds, fails, or is abandoned mid-flight.

use std::marker::PhantomData;

use super::state::StateCell;

/// Storage for a single optional pending tag.
pub trait PendingSlot<T> {
    fn replace(&self, tag: Option<T>);

    fn current(&self) -> Option<T>;

    fn is_pending(&self) -> bool {
        self.current().is_some()
    }
}

impl<T, S: StateCell<Option<T>> + ?Sized> PendingSlot<T> for S {
    fn replace(&self, tag: Option<T>) {
        self.store(tag);
    }

    fn current(&self) -> Option<T> {
        self.load()
    }
}

/// Marks a slot as pending for as long as the guard lives.
///
/// Starting a new guard on a slot that is already pending overwrites the
/// tag (last request wins). Dropping any guard clears the slot.
#[must_use = "the slot is cleared as soon as the guard is dropped"]
pub struct PendingGuard<'a, T, S: PendingSlot<T> + ?Sized> {
    slot: &'a S,
    _tag: PhantomData<T>,
}

impl<'a, T, S: PendingSlot<T> + ?Sized> PendingGuard<'a, T, S> {
    pub fn begin(slot: &'a S, tag: T) -> Self {
        slot.replace(Some(tag));
        Self {
            slot,
            _tag: PhantomData,
        }
    }
}

impl<T, S: PendingSlot<T> + ?Sized> Drop for PendingGuard<'_, T, S> {
    fn drop(&mut self) {
        self.slot.replace(None);
    }
}

/// Run `operation` with `slot` marked as pending under `tag`.
pub async fn track<T, S, F>(slot: &S, tag: T, operation: F) -> F::Output
where
    S: PendingSlot<T> + ?Sized,
    F: Future,
{
    let _guard = PendingGuard::begin(slot, tag);
    operation.await
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_guard_sets_and_clears() {
        let slot = RefCell::new(None::<String>);
        {
            let _guard = PendingGuard::begin(&slot, "io.metamask".to_string());
            assert_eq!(slot.current().as_deref(), Some("io.metamask"));
            assert!(slot.is_pending());
        }
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_last_request_wins() {
        let slot = RefCell::new(None::<&str>);
        let first = PendingGuard::begin(&slot, "a");
        let second = PendingGuard::begin(&slot, "b");
        assert_eq!(slot.current(), Some("b"));
        drop(first);
        // The first attempt settling clears the slot regardless of owner.
        assert_eq!(slot.current(), None);
        drop(second);
        assert_eq!(slot.current(), None);
    }

    #[tokio::test]
    async fn test_track_clears_on_error() {
        let slot = Rc::new(RefCell::new(None::<u64>));
        let observed = slot.clone();
        let result: Result<(), &str> = track(&slot, 11155111, async move {
            assert_eq!(observed.current(), Some(11155111));
            Err("rejected")
        })
        .await;
        assert_eq!(result, Err("rejected"));
        assert!(!slot.is_pending());
    }

    #[tokio::test]
    async fn test_track_clears_when_dropped() {
        let slot = RefCell::new(None::<&str>);
        tokio::select! {
            biased;
            _ = track(&slot, "injected", std::future::pending::<()>()) => unreachable!(),
            _ = async { assert_eq!(slot.current(), Some("injected")) } => {}
        }
        assert_eq!(slot.current(), None);
    }
}
