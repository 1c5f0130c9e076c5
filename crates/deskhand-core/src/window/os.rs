use crate::window::{ProcessInfo, ProcessWindowProvider, WindowHandle, WindowInfo};

use sysinfo::{ProcessesToUpdate, System};

/// Process/window provider for the host OS.
///
/// Processes come from `sysinfo` on every platform. Window enumeration and
/// control use the Win32 API; on other platforms no windows are reported,
/// so toggling falls through to launching.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsWindowProvider;

impl OsWindowProvider {
    fn list_processes() -> Vec<ProcessInfo> {
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::All, true);

        system
            .processes()
            .iter()
            .map(|(pid, process)| ProcessInfo {
                pid: pid.as_u32(),
                image_name: process.name().to_string_lossy().into_owned(),
            })
            .collect()
    }
}

#[cfg(target_os = "windows")]
mod win32 {
    use crate::window::{WindowHandle, WindowInfo};

    use std::ffi::c_void;

    use tracing::debug;
    use windows::Win32::{
        Foundation::{BOOL, HWND, LPARAM, TRUE},
        UI::WindowsAndMessaging::{
            EnumWindows, GetWindowThreadProcessId, IsWindowVisible, SW_MINIMIZE, SW_RESTORE,
            SetForegroundWindow, ShowWindow,
        },
    };

    fn hwnd(window: WindowHandle) -> HWND {
        HWND(window.0 as *mut c_void)
    }

    unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
        // SAFETY: lparam is the &mut Vec passed by `enumerate` below, alive
        // for the whole EnumWindows call.
        let windows = unsafe { &mut *(lparam.0 as *mut Vec<WindowInfo>) };
        let mut pid: u32 = 0;
        // SAFETY: hwnd comes straight from EnumWindows.
        let visible = unsafe {
            GetWindowThreadProcessId(hwnd, Some(&mut pid));
            IsWindowVisible(hwnd).as_bool()
        };
        windows.push(WindowInfo {
            handle: WindowHandle(hwnd.0 as isize),
            pid,
            visible,
        });
        TRUE
    }

    pub(super) fn enumerate() -> Vec<WindowInfo> {
        let mut windows: Vec<WindowInfo> = Vec::new();
        // SAFETY: the callback only touches `windows` through lparam.
        let result = unsafe {
            EnumWindows(
                Some(collect_window),
                LPARAM(&mut windows as *mut Vec<WindowInfo> as isize),
            )
        };
        if let Err(e) = result {
            debug!(error = ?e, "EnumWindows stopped early");
        }
        windows
    }

    pub(super) fn restore(window: WindowHandle) -> bool {
        // SAFETY: ShowWindow tolerates stale handles.
        let _ = unsafe { ShowWindow(hwnd(window), SW_RESTORE) };
        true
    }

    pub(super) fn bring_to_front(window: WindowHandle) -> bool {
        // SAFETY: SetForegroundWindow tolerates stale handles.
        unsafe { SetForegroundWindow(hwnd(window)) }.as_bool()
    }

    pub(super) fn minimize(window: WindowHandle) -> bool {
        // SAFETY: ShowWindow tolerates stale handles.
        let _ = unsafe { ShowWindow(hwnd(window), SW_MINIMIZE) };
        true
    }
}

#[cfg(target_os = "windows")]
impl ProcessWindowProvider for OsWindowProvider {
    fn processes(&self) -> Vec<ProcessInfo> {
        Self::list_processes()
    }

    fn windows(&self) -> Vec<WindowInfo> {
        win32::enumerate()
    }

    fn restore(&self, window: WindowHandle) -> bool {
        win32::restore(window)
    }

    fn bring_to_front(&self, window: WindowHandle) -> bool {
        win32::bring_to_front(window)
    }

    fn minimize(&self, window: WindowHandle) -> bool {
        win32::minimize(window)
    }
}

#[cfg(not(target_os = "windows"))]
impl ProcessWindowProvider for OsWindowProvider {
    fn processes(&self) -> Vec<ProcessInfo> {
        Self::list_processes()
    }

    fn windows(&self) -> Vec<WindowInfo> {
        tracing::debug!("Window enumeration is only available on Windows");
        Vec::new()
    }

    fn restore(&self, _window: WindowHandle) -> bool {
        false
    }

    fn bring_to_front(&self, _window: WindowHandle) -> bool {
        false
    }

    fn minimize(&self, _window: WindowHandle) -> bool {
        false
    }
}
