// SPDX-License-Identifier: MPL-2.0
//! Theme preference manager.
//!
//! [`ThemeManager`] owns the current [`ThemeMode`], a cached snapshot of the
//! system signal, and the last appearance pushed to the presentation sink.
//! The effective appearance is never cached on its own: every operation
//! re-resolves it from the latest preference and signal, and the sink is
//! notified only on actual transitions.
//!
//! The manager runs on a single event-processing context (no locking); the
//! scheme subscription callback may still fire between any two operations,
//! which is safe because each mutation is a plain last-write-wins assignment
//! followed by a re-resolution.

use crate::signal::{SchemeSource, SchemeSubscription};
use crate::store::PreferenceStore;
use crate::theme::{Appearance, ThemeMode};
use std::cell::RefCell;
use std::rc::Rc;

/// Presentation sink callback. Assumed idempotent and infallible; any
/// rendering failure is the sink's own concern.
pub type ApplyFn = Box<dyn FnMut(Appearance)>;

struct Inner {
    mode: ThemeMode,
    scheme: Appearance,
    applied: Option<Appearance>,
    store: Box<dyn PreferenceStore>,
    apply: ApplyFn,
}

impl Inner {
    /// Re-resolves and pushes to the sink only on an actual transition.
    fn refresh(&mut self) {
        let resolved = self.mode.resolve(self.scheme);
        if self.applied != Some(resolved) {
            self.applied = Some(resolved);
            (self.apply)(resolved);
        }
    }

    fn scheme_changed(&mut self, scheme: Appearance) {
        // Always cache the signal; it only takes visible effect while the
        // preference follows the system.
        self.scheme = scheme;
        if self.mode == ThemeMode::System {
            self.refresh();
        }
    }
}

/// Reconciles the persisted preference with the system signal and drives the
/// presentation sink.
///
/// Construct once per session with injected dependencies, then call
/// [`initialize`](Self::initialize). Dropping the manager cancels the scheme
/// subscription, so the sink is never invoked after the hosting surface is
/// gone.
pub struct ThemeManager {
    inner: Rc<RefCell<Inner>>,
    source: Rc<dyn SchemeSource>,
    default_mode: ThemeMode,
    subscription: Option<SchemeSubscription>,
}

impl ThemeManager {
    #[must_use]
    pub fn new(store: Box<dyn PreferenceStore>, source: Rc<dyn SchemeSource>, apply: ApplyFn) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                mode: ThemeMode::default(),
                scheme: Appearance::Light,
                applied: None,
                store,
                apply,
            })),
            source,
            default_mode: ThemeMode::default(),
            subscription: None,
        }
    }

    /// Overrides the mode used when the store holds no usable value.
    #[must_use]
    pub fn with_default_mode(mut self, mode: ThemeMode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Reads the store once, snapshots the signal, notifies the sink with the
    /// resolved appearance, and subscribes to signal changes.
    ///
    /// The sink notification happens synchronously before this returns, so
    /// there is no window in which a wrong appearance is visible. Idempotent:
    /// calling again neither re-reads the store, re-registers the
    /// subscription, nor re-notifies the sink.
    pub fn initialize(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        // An absent or foreign stored value falls back to the default mode.
        let mode = self
            .inner
            .borrow()
            .store
            .get()
            .and_then(|raw| raw.parse::<ThemeMode>().ok())
            .unwrap_or(self.default_mode);
        let scheme = self.source.current();

        {
            let mut inner = self.inner.borrow_mut();
            inner.mode = mode;
            inner.scheme = scheme;
            inner.refresh();
        }

        let inner = Rc::clone(&self.inner);
        let subscription = self
            .source
            .subscribe(Box::new(move |scheme| inner.borrow_mut().scheme_changed(scheme)));
        self.subscription = Some(subscription);
    }

    /// Switches the preference, persists it best-effort, and notifies the
    /// sink if the resolved appearance changed.
    ///
    /// A store that cannot be written never fails the operation: persistence
    /// is a convenience, the in-memory state and the sink notification
    /// proceed regardless.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        let mut inner = self.inner.borrow_mut();
        inner.mode = mode;
        if let Err(error) = inner.store.set(mode.as_str()) {
            eprintln!("Failed to save theme preference: {}", error);
        }
        inner.refresh();
    }

    /// Feeds a new system signal value into the manager.
    ///
    /// This is what the scheme subscription calls internally; hosts whose
    /// notification channel cannot be modeled as a [`SchemeSource`]
    /// subscription call it directly. The sink is notified only when the
    /// preference follows the system and the resolved appearance actually
    /// changed.
    pub fn handle_scheme_change(&self, scheme: Appearance) {
        self.inner.borrow_mut().scheme_changed(scheme);
    }

    /// Current preference.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.inner.borrow().mode
    }

    /// Effective appearance resolved from the latest preference and signal.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        let inner = self.inner.borrow();
        inner.mode.resolve(inner.scheme)
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.appearance() == Appearance::Dark
    }

    /// Cancels the scheme subscription. Dropping the manager does the same;
    /// either way the cancellation runs exactly once.
    pub fn shutdown(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}

impl Drop for ThemeManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}
