use tracing::error;
use windows::Win32::{
  Foundation::{HWND, LPARAM, LRESULT, WPARAM},
  UI::WindowsAndMessaging::{self, DefWindowProcW, DestroyWindow, PostQuitMessage},
};

/// Stateless window procedure: a close request destroys the window, the
/// destroy notification posts the quit message that ends the pump, and every
/// other message goes straight to the OS default handler.
pub extern "system" fn wnd_proc(
  hwnd: HWND,
  msg: u32,
  w_param: WPARAM,
  l_param: LPARAM,
) -> LRESULT {
  match msg {
    WindowsAndMessaging::WM_CLOSE => {
      if let Err(error) = unsafe { DestroyWindow(hwnd) } {
        error!("{error}");
      }
      LRESULT(0)
    }
    WindowsAndMessaging::WM_DESTROY => {
      unsafe { PostQuitMessage(0) };
      LRESULT(0)
    }
    _ => unsafe { DefWindowProcW(hwnd, msg, w_param, l_param) },
  }
}
