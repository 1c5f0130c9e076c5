mod matcher;
mod os;

pub(crate) use matcher::WindowMatcher;

pub use os::OsWindowProvider;

/// A running process as seen by the window matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    /// Process id.
    pub pid: u32,
    /// Executable image name, e.g. `notepad.exe`.
    pub image_name: String,
}

/// Opaque top-level window handle (an `HWND` on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// A top-level window and the process that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowInfo {
    /// Window handle.
    pub handle: WindowHandle,
    /// Owning process id.
    pub pid: u32,
    /// Whether the window was visible when enumerated.
    pub visible: bool,
}

/// OS capability for process listing and top-level window control.
///
/// Window operations are best-effort and report success as a `bool`; they
/// never fail the surrounding action.
pub trait ProcessWindowProvider: Send {
    /// Snapshot of running processes.
    fn processes(&self) -> Vec<ProcessInfo>;

    /// Snapshot of top-level windows in z-order.
    fn windows(&self) -> Vec<WindowInfo>;

    /// Un-minimise a window.
    fn restore(&self, window: WindowHandle) -> bool;

    /// Try to bring a window to the foreground.
    fn bring_to_front(&self, window: WindowHandle) -> bool;

    /// Minimise a window.
    fn minimize(&self, window: WindowHandle) -> bool;
}
