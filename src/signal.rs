// SPDX-License-Identifier: MPL-2.0
//! System appearance signal.
//!
//! A [`SchemeSource`] reports the OS-level light/dark preference and, when
//! the platform supports it, notifies subscribers of changes. The signal is
//! transient and externally owned; this crate only observes it.

use crate::theme::Appearance;
use std::fmt;

/// Callback invoked with the new appearance when the system signal changes.
pub type SchemeCallback = Box<dyn FnMut(Appearance)>;

pub trait SchemeSource {
    /// Current OS appearance. Sources that cannot answer report `Light`.
    fn current(&self) -> Appearance;

    /// Registers a change callback and returns its cancellation handle.
    fn subscribe(&self, callback: SchemeCallback) -> SchemeSubscription;
}

/// Cancellation handle for a [`SchemeSource`] subscription.
///
/// Cancels at most once: either on an explicit [`cancel`](Self::cancel) call
/// or when the handle is dropped, whichever comes first.
pub struct SchemeSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl SchemeSubscription {
    #[must_use]
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for sources without a change stream.
    #[must_use]
    pub fn none() -> Self {
        Self { cancel: None }
    }

    /// Cancels the subscription. Subsequent calls are no-ops.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for SchemeSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for SchemeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// OS appearance source backed by the `dark-light` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DarkLightSource;

impl SchemeSource for DarkLightSource {
    fn current(&self) -> Appearance {
        // Detection failure and an unspecified answer both degrade to light.
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Appearance::Dark,
            _ => Appearance::Light,
        }
    }

    fn subscribe(&self, _callback: SchemeCallback) -> SchemeSubscription {
        // dark-light exposes point-in-time detection only. Hosts with a
        // native notification channel forward changes through
        // `ThemeManager::handle_scheme_change`.
        SchemeSubscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn subscription_cancels_exactly_once() {
        let cancellations = Rc::new(Cell::new(0));
        let counter = Rc::clone(&cancellations);
        let mut subscription = SchemeSubscription::new(move || counter.set(counter.get() + 1));

        assert!(subscription.is_active());
        subscription.cancel();
        subscription.cancel();

        assert!(!subscription.is_active());
        assert_eq!(cancellations.get(), 1);
    }

    #[test]
    fn dropping_an_active_subscription_cancels_it() {
        let cancellations = Rc::new(Cell::new(0));
        let counter = Rc::clone(&cancellations);
        {
            let _subscription = SchemeSubscription::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(cancellations.get(), 1);
    }

    #[test]
    fn dropping_a_cancelled_subscription_does_not_cancel_again() {
        let cancellations = Rc::new(Cell::new(0));
        let counter = Rc::clone(&cancellations);
        {
            let mut subscription =
                SchemeSubscription::new(move || counter.set(counter.get() + 1));
            subscription.cancel();
        }
        assert_eq!(cancellations.get(), 1);
    }

    #[test]
    fn none_subscription_is_inactive() {
        let subscription = SchemeSubscription::none();
        assert!(!subscription.is_active());
    }

    #[test]
    fn dark_light_source_does_not_panic() {
        // Result depends on the host environment; just verify the fallback
        // path never panics.
        let _ = DarkLightSource.current();
    }
}
