//! Mount-scoped liveness token for async work started by a component.
//!
//! A fetch spawned on mount may settle after the component is gone. The
//! token is flipped by `on_cleanup`, and results are committed only while it
//! is still live.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct MountToken {
    live: Arc<AtomicBool>,
}

impl MountToken {
    pub fn new() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)) }
    }

    /// Cancel this token when the current reactive owner is cleaned up.
    #[must_use]
    pub fn bind_to_owner(self) -> Self {
        let token = self.clone();
        on_cleanup(move || token.cancel());
        self
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.live.store(false, Ordering::Relaxed);
    }

    /// Apply `value` only if the token is still live. Returns whether it was applied.
    pub fn commit<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if !self.is_live() {
            return false;
        }
        apply(value);
        true
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}
