use crate::layout::{LayoutBackend, RawLayout};

/// Layout backend for the host OS.
///
/// On Windows this reads the foreground thread's `HKL` and asks the
/// foreground window to change layout with `WM_INPUTLANGCHANGEREQUEST`.
/// Other platforms report no active layout, so combos run without switching.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsLayoutBackend;

#[cfg(target_os = "windows")]
impl LayoutBackend for OsLayoutBackend {
    fn active(&self) -> Option<RawLayout> {
        use windows::Win32::UI::{
            Input::KeyboardAndMouse::GetKeyboardLayout,
            WindowsAndMessaging::{GetForegroundWindow, GetWindowThreadProcessId},
        };

        // SAFETY: plain Win32 queries with no pointer arguments we own.
        unsafe {
            let hwnd = GetForegroundWindow();
            if hwnd.is_invalid() {
                return None;
            }
            let thread_id = GetWindowThreadProcessId(hwnd, None);
            let hkl = GetKeyboardLayout(thread_id);
            Some(RawLayout(hkl.0 as usize as u64))
        }
    }

    fn installed(&self) -> Vec<RawLayout> {
        use windows::Win32::UI::{Input::KeyboardAndMouse::GetKeyboardLayoutList, TextServices::HKL};

        // SAFETY: the buffer is sized from the first call and outlives the second.
        unsafe {
            let count = GetKeyboardLayoutList(None);
            if count <= 0 {
                return Vec::new();
            }
            let mut buffer = vec![HKL::default(); count as usize];
            let written = GetKeyboardLayoutList(Some(&mut buffer));
            buffer
                .into_iter()
                .take(written.max(0) as usize)
                .map(|hkl| RawLayout(hkl.0 as usize as u64))
                .collect()
        }
    }

    fn activate(&self, layout: RawLayout) -> bool {
        use windows::Win32::{
            Foundation::{LPARAM, WPARAM},
            UI::WindowsAndMessaging::{GetForegroundWindow, PostMessageW, WM_INPUTLANGCHANGEREQUEST},
        };

        // SAFETY: posting a message to the foreground window; the HKL is
        // passed by value in LPARAM.
        unsafe {
            let hwnd = GetForegroundWindow();
            if hwnd.is_invalid() {
                return false;
            }
            PostMessageW(
                hwnd,
                WM_INPUTLANGCHANGEREQUEST,
                WPARAM(0),
                LPARAM(layout.0 as usize as isize),
            )
            .is_ok()
        }
    }
}

#[cfg(not(target_os = "windows"))]
impl LayoutBackend for OsLayoutBackend {
    fn active(&self) -> Option<RawLayout> {
        None
    }

    fn installed(&self) -> Vec<RawLayout> {
        Vec::new()
    }

    fn activate(&self, _layout: RawLayout) -> bool {
        false
    }
}
