use crate::layout::{LayoutBackend, LayoutSwitcher, RawLayout};

use std::thread;

use tracing::{debug, warn};

/// RAII guard that restores the pre-switch keyboard layout when dropped.
///
/// Created by [`LayoutSwitcher::scoped`]. Restoration runs on every exit
/// path of the scope that holds it, including early returns after a failed
/// key injection and panic unwinding. Restoration is best-effort: if the
/// OS rejects it, the operator's next manual layout switch fixes it.
pub(crate) struct LayoutGuard<'a, B: LayoutBackend> {
    switcher: &'a LayoutSwitcher<B>,
    restore_to: Option<RawLayout>,
    switched: bool,
}

impl<'a, B: LayoutBackend> LayoutGuard<'a, B> {
    /// Guard for a scope where no switch happened.
    pub(crate) fn inactive(switcher: &'a LayoutSwitcher<B>) -> Self {
        Self {
            switcher,
            restore_to: None,
            switched: false,
        }
    }

    /// Guard that will put `original` back on drop.
    pub(crate) fn restoring(switcher: &'a LayoutSwitcher<B>, original: Option<RawLayout>) -> Self {
        Self {
            switcher,
            restore_to: original,
            switched: true,
        }
    }

    /// Whether entering the scope changed the layout.
    pub(crate) fn switched(&self) -> bool {
        self.switched
    }
}

impl<B: LayoutBackend> Drop for LayoutGuard<'_, B> {
    fn drop(&mut self) {
        if !self.switched {
            return;
        }

        let Some(original) = self.restore_to else {
            debug!("No layout was active before the switch, nothing to restore");
            return;
        };

        if self.switcher.backend().activate(original) {
            thread::sleep(self.switcher.settle_delay());
            debug!(layout = %original.layout(), "Layout restored");
        } else {
            warn!(layout = %original.layout(), "Failed to restore layout");
        }
    }
}
