use crate::layout::{Layout, LayoutBackend, LayoutGuard};

use std::{thread, time::Duration};

use tracing::{debug, info, instrument};

/// Time given to the foreground window to apply a layout change.
pub(crate) const LAYOUT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Queries and switches the active keyboard layout.
pub(crate) struct LayoutSwitcher<B> {
    backend: B,
    settle_delay: Duration,
}

impl<B: LayoutBackend> LayoutSwitcher<B> {
    pub(crate) fn new(backend: B, settle_delay: Duration) -> Self {
        Self {
            backend,
            settle_delay,
        }
    }

    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    pub(crate) fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Layout of the foreground window, `Unknown` if unreadable or foreign.
    pub(crate) fn current(&self) -> Layout {
        self.backend
            .active()
            .map(|raw| raw.layout())
            .unwrap_or(Layout::Unknown)
    }

    /// Activate the first installed layout for `target`.
    ///
    /// No-op when `target` is already active. Returns `false` when the
    /// target is not installed; callers treat that as a silent skip.
    #[instrument(skip(self))]
    pub(crate) fn switch(&self, target: Layout) -> bool {
        let Some(lang) = target.lang_id() else {
            return false;
        };

        if self.current() == target {
            return true;
        }

        let Some(raw) = self
            .backend
            .installed()
            .into_iter()
            .find(|raw| (raw.0 & 0xFFFF) as u16 == lang)
        else {
            debug!(layout = %target, "Layout not installed, skipping switch");
            return false;
        };

        if !self.backend.activate(raw) {
            debug!(layout = %target, "Layout activation rejected");
            return false;
        }

        thread::sleep(self.settle_delay);
        info!(layout = %target, "Layout switched");
        true
    }

    /// Switch to `target` for the lifetime of the returned guard.
    ///
    /// The guard restores the exact layout that was active before the
    /// switch when dropped. Nothing is restored if no switch happened.
    pub(crate) fn scoped(&self, target: Option<Layout>) -> LayoutGuard<'_, B> {
        let Some(target) = target else {
            return LayoutGuard::inactive(self);
        };

        let original = self.backend.active();
        let original_layout = original.map(|raw| raw.layout()).unwrap_or(Layout::Unknown);

        if original_layout == target || !self.switch(target) {
            return LayoutGuard::inactive(self);
        }

        LayoutGuard::restoring(self, original)
    }
}
