use std::fmt;

/// A listener invoked with each change a provider observes.
pub type Listener<T> = std::sync::Arc<dyn Fn(T) + Send + Sync>;

/// A handle to a registered listener.
///
/// The listener stays registered until the handle is dropped or
/// [`Subscription::unsubscribe`] is called, whichever comes first. Views
/// acquire a subscription when they mount and release it when they unmount.
#[must_use = "dropping a Subscription deregisters its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the operation that deregisters a listener.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release, for hosts that lack the
    /// observed capability.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Deregister the listener now.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_releases_once_on_unsubscribe() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));

        subscription.unsubscribe();

        assert_eq!(released.get(), 1);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_releases_on_drop() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        {
            let _subscription = Subscription::new(move || counter.set(counter.get() + 1));
            assert_eq!(released.get(), 0);
        }
        assert_eq!(released.get(), 1);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_allows_inert_subscriptions() {
        let subscription = Subscription::inert();
        assert_eq!(format!("{subscription:?}"), "Subscription { active: false }");
        drop(subscription);
    }
}
