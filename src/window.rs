#[cfg(feature = "rwh_06")]
use rwh_06::{
  DisplayHandle,
  HandleError,
  HasDisplayHandle,
  HasWindowHandle,
  RawDisplayHandle,
  RawWindowHandle,
  Win32WindowHandle,
  WindowHandle,
  WindowsDisplayHandle,
};
use tracing::debug;
use windows::{
  core::HSTRING,
  Win32::{
    Foundation::{HINSTANCE, HWND},
    UI::WindowsAndMessaging::{
      self,
      CreateWindowExW,
      DispatchMessageW,
      GetMessageW,
      SetWindowTextW,
      TranslateMessage,
      MSG,
    },
  },
};

use self::{class::WindowClass, settings::WindowSettings};
use crate::{error::WindowResult, utilities};

pub mod class;
pub mod procedure;
pub mod settings;

/// One top-level window. Creation requires a registered [`WindowClass`], and
/// the class must stay registered for the window's whole lifetime.
pub struct Window {
  hinstance: HINSTANCE,
  hwnd: HWND,
}

impl Window {
  pub fn create(class: &WindowClass, settings: &WindowSettings) -> WindowResult<Self> {
    let title = HSTRING::from(settings.title.as_str());

    let hwnd = unsafe {
      CreateWindowExW(
        utilities::window_ex_style(settings),
        class.name(),
        &title,
        utilities::window_style(settings),
        WindowsAndMessaging::CW_USEDEFAULT,
        WindowsAndMessaging::CW_USEDEFAULT,
        settings.size.width,
        settings.size.height,
        None,
        None,
        class.hinstance(),
        None,
      )?
    };

    debug!("created window {hwnd:?}");

    Ok(Self {
      hinstance: class.hinstance(),
      hwnd,
    })
  }

  /// Blocks until the window is destroyed, dispatching every message to the
  /// window procedure. Returns the exit code carried by the quit message.
  ///
  /// Must run on the thread that created the window.
  pub fn pump(&self) -> WindowResult<i32> {
    let mut msg = MSG::default();
    loop {
      let result = unsafe { GetMessageW(&mut msg, None, 0, 0) };
      match result.0 {
        -1 => return Err(windows::core::Error::from_win32().into()),
        0 => break,
        _ => unsafe {
          let _ = TranslateMessage(&msg);
          DispatchMessageW(&msg);
        },
      }
    }

    debug!("message pump exited");
    Ok(msg.wParam.0 as i32)
  }

  pub fn set_title(&self, title: impl AsRef<str>) -> WindowResult<()> {
    let title = HSTRING::from(title.as_ref());
    unsafe { SetWindowTextW(self.hwnd, &title)? };
    Ok(())
  }

  pub fn hwnd(&self) -> HWND {
    self.hwnd
  }

  pub fn hinstance(&self) -> HINSTANCE {
    self.hinstance
  }

  #[cfg(feature = "rwh_06")]
  pub fn raw_window_handle(&self) -> RawWindowHandle {
    let mut handle = Win32WindowHandle::new(
      std::num::NonZeroIsize::new(self.hwnd.0 as isize)
        .expect("window handle should not be zero"),
    );
    handle.hinstance = std::num::NonZeroIsize::new(self.hinstance.0 as isize);
    RawWindowHandle::from(handle)
  }

  #[cfg(feature = "rwh_06")]
  pub fn raw_display_handle(&self) -> RawDisplayHandle {
    RawDisplayHandle::from(WindowsDisplayHandle::new())
  }
}

#[cfg(feature = "rwh_06")]
impl HasWindowHandle for Window {
  fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
    Ok(unsafe { WindowHandle::borrow_raw(self.raw_window_handle()) })
  }
}

#[cfg(feature = "rwh_06")]
impl HasDisplayHandle for Window {
  fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
    Ok(unsafe { DisplayHandle::borrow_raw(self.raw_display_handle()) })
  }
}
