// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the manager's injected dependencies.
//!
//! These are ordinary implementations of the [`crate::store`] and
//! [`crate::signal`] contracts, kept public so downstream hosts can reuse
//! them in their own tests. All of them hand out shared handles via `Rc`, so
//! a clone kept by the test still observes state after the original moved
//! into the manager.

use crate::error::{Error, Result};
use crate::signal::{SchemeCallback, SchemeSource, SchemeSubscription};
use crate::store::PreferenceStore;
use crate::theme::Appearance;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<RefCell<Option<String>>>,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a value, as after a previous session.
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(value.to_string()))),
            fail_writes: false,
        }
    }

    /// Simulates an unavailable store: writes fail, reads still serve the
    /// last value.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The currently stored value, observable from a cloned handle.
    #[must_use]
    pub fn stored(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&mut self, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Config("store unavailable".to_string()));
        }
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct TestSourceInner {
    current: Option<Appearance>,
    callback: Option<SchemeCallback>,
    subscriptions: usize,
    cancellations: usize,
}

/// Manually driven scheme source.
///
/// [`emit`](Self::emit) plays the role of the OS firing its change
/// notification at an arbitrary point in time.
#[derive(Clone, Default)]
pub struct TestSource {
    inner: Rc<RefCell<TestSourceInner>>,
}

impl TestSource {
    #[must_use]
    pub fn new(appearance: Appearance) -> Self {
        let source = Self::default();
        source.inner.borrow_mut().current = Some(appearance);
        source
    }

    /// Source whose signal cannot be read; `current()` degrades to light.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Changes the signal and fires the subscribed callback, if any.
    pub fn emit(&self, appearance: Appearance) {
        self.inner.borrow_mut().current = Some(appearance);
        // Take the callback out before invoking it so it may re-enter the
        // source without overlapping borrows.
        let callback = self.inner.borrow_mut().callback.take();
        if let Some(mut callback) = callback {
            callback(appearance);
            self.inner.borrow_mut().callback = Some(callback);
        }
    }

    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.inner.borrow().subscriptions
    }

    #[must_use]
    pub fn cancellation_count(&self) -> usize {
        self.inner.borrow().cancellations
    }
}

impl SchemeSource for TestSource {
    fn current(&self) -> Appearance {
        self.inner.borrow().current.unwrap_or(Appearance::Light)
    }

    fn subscribe(&self, callback: SchemeCallback) -> SchemeSubscription {
        let mut inner = self.inner.borrow_mut();
        inner.subscriptions += 1;
        inner.callback = Some(callback);
        drop(inner);

        let handle = Rc::clone(&self.inner);
        SchemeSubscription::new(move || {
            let mut inner = handle.borrow_mut();
            inner.cancellations += 1;
            inner.callback = None;
        })
    }
}

/// Presentation sink that records every appearance it is asked to apply.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    applied: Rc<RefCell<Vec<Appearance>>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply callback to hand to a `ThemeManager`.
    #[must_use]
    pub fn callback(&self) -> Box<dyn FnMut(Appearance)> {
        let applied = Rc::clone(&self.applied);
        Box::new(move |appearance| applied.borrow_mut().push(appearance))
    }

    /// Everything applied so far, in order.
    #[must_use]
    pub fn applied(&self) -> Vec<Appearance> {
        self.applied.borrow().clone()
    }

    /// The most recently applied appearance.
    #[must_use]
    pub fn last(&self) -> Option<Appearance> {
        self.applied.borrow().last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(), None);

        store.set("dark").unwrap();
        assert_eq!(store.get(), Some("dark".to_string()));
    }

    #[test]
    fn memory_store_clone_shares_state() {
        let mut store = MemoryStore::new();
        let observer = store.clone();

        store.set("light").unwrap();

        assert_eq!(observer.stored(), Some("light".to_string()));
    }

    #[test]
    fn failing_memory_store_keeps_previous_value() {
        let mut store = MemoryStore::with_value("dark");
        store.fail_writes(true);

        assert!(store.set("light").is_err());
        assert_eq!(store.get(), Some("dark".to_string()));
    }

    #[test]
    fn unavailable_source_reports_light() {
        assert_eq!(TestSource::unavailable().current(), Appearance::Light);
    }

    #[test]
    fn emit_reaches_the_subscribed_callback() {
        let source = TestSource::new(Appearance::Light);
        let sink = RecordingSink::new();

        let _subscription = source.subscribe(sink.callback());
        source.emit(Appearance::Dark);

        assert_eq!(sink.applied(), vec![Appearance::Dark]);
        assert_eq!(source.current(), Appearance::Dark);
    }

    #[test]
    fn cancelled_subscription_stops_delivery() {
        let source = TestSource::new(Appearance::Light);
        let sink = RecordingSink::new();

        let mut subscription = source.subscribe(sink.callback());
        subscription.cancel();
        source.emit(Appearance::Dark);

        assert!(sink.applied().is_empty());
        assert_eq!(source.cancellation_count(), 1);
    }
}
