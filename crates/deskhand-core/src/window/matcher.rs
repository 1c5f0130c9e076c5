//! Process-to-window matching for show/minimise toggling.

use crate::window::{ProcessWindowProvider, WindowHandle};

use std::collections::HashSet;

use tracing::{debug, instrument};

/// Finds top-level windows by a fragment of their owning process's image name.
pub(crate) struct WindowMatcher<P> {
    provider: P,
}

impl<P: ProcessWindowProvider> WindowMatcher<P> {
    pub(crate) fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Pids whose image name contains `fragment`, case-insensitively.
    ///
    /// An empty fragment matches nothing.
    fn matching_pids(&self, fragment: &str) -> HashSet<u32> {
        let needle = fragment.trim().to_lowercase();
        if needle.is_empty() {
            return HashSet::new();
        }

        self.provider
            .processes()
            .into_iter()
            .filter(|process| process.image_name.to_lowercase().contains(&needle))
            .map(|process| process.pid)
            .collect()
    }

    /// Windows owned by any process matching `fragment`, in z-order.
    pub(crate) fn find_windows(&self, fragment: &str, require_visible: bool) -> Vec<WindowHandle> {
        let pids = self.matching_pids(fragment);
        if pids.is_empty() {
            return Vec::new();
        }
        self.windows_for(&pids, require_visible)
    }

    fn windows_for(&self, pids: &HashSet<u32>, require_visible: bool) -> Vec<WindowHandle> {
        self.provider
            .windows()
            .into_iter()
            .filter(|window| pids.contains(&window.pid))
            .filter(|window| !require_visible || window.visible)
            .map(|window| window.handle)
            .collect()
    }

    /// Restore and foreground the first visible window of a matching process.
    ///
    /// Returns `false` only when no process matches. A matching process
    /// without a visible window, or a refused foreground request, still
    /// counts as activated.
    #[instrument(skip(self))]
    pub(crate) fn activate(&self, fragment: &str) -> bool {
        let pids = self.matching_pids(fragment);
        if pids.is_empty() {
            debug!("No running process matches");
            return false;
        }

        match self.windows_for(&pids, true).first() {
            Some(&window) => {
                self.provider.restore(window);
                if !self.provider.bring_to_front(window) {
                    debug!(window = window.0, "Foreground request refused");
                }
            }
            None => debug!(pids = pids.len(), "Process running but has no visible window"),
        }

        true
    }

    /// Minimise every window owned by a matching process.
    ///
    /// Returns `false` only when no process matches.
    #[instrument(skip(self))]
    pub(crate) fn minimize(&self, fragment: &str) -> bool {
        let pids = self.matching_pids(fragment);
        if pids.is_empty() {
            debug!("No running process matches");
            return false;
        }

        let windows = self.windows_for(&pids, false);
        for &window in &windows {
            self.provider.minimize(window);
        }
        debug!(count = windows.len(), "Minimised windows");

        true
    }
}
