use tracing::{debug, warn};
use windows::{
  core::{HSTRING, PCWSTR},
  Win32::{
    Foundation::HINSTANCE,
    UI::WindowsAndMessaging::{
      self,
      LoadCursorW,
      RegisterClassExW,
      UnregisterClassW,
      WNDCLASSEXW,
    },
  },
};

use super::{procedure, settings::WindowSettings};
use crate::{error::WindowResult, utilities};

/// A registered window class. Registration must happen before any window of
/// the class is created, and every window of the class must be destroyed
/// before the class is unregistered.
pub struct WindowClass {
  name: HSTRING,
  hinstance: HINSTANCE,
  registered: bool,
}

impl WindowClass {
  pub fn register(settings: &WindowSettings) -> WindowResult<Self> {
    let hinstance = utilities::module_instance()?;
    let name = HSTRING::from(settings.class_name.as_str());

    let class = WNDCLASSEXW {
      cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
      style: WindowsAndMessaging::CS_VREDRAW | WindowsAndMessaging::CS_HREDRAW,
      lpfnWndProc: Some(procedure::wnd_proc),
      hInstance: hinstance,
      hCursor: unsafe { LoadCursorW(None, WindowsAndMessaging::IDC_ARROW)? },
      lpszClassName: PCWSTR(name.as_ptr()),
      ..Default::default()
    };

    let atom = unsafe { RegisterClassExW(&class) };
    if atom == 0 {
      return Err(windows::core::Error::from_win32().into());
    }

    debug!("registered window class `{}`", settings.class_name);

    Ok(Self {
      name,
      hinstance,
      registered: true,
    })
  }

  pub fn name(&self) -> PCWSTR {
    PCWSTR(self.name.as_ptr())
  }

  pub fn hinstance(&self) -> HINSTANCE {
    self.hinstance
  }

  /// Unregisters the class exactly once, surfacing the OS error if the call
  /// fails.
  pub fn unregister(mut self) -> WindowResult<()> {
    self.registered = false;
    unsafe { UnregisterClassW(PCWSTR(self.name.as_ptr()), self.hinstance)? };
    debug!("unregistered window class `{}`", self.name);
    Ok(())
  }
}

impl Drop for WindowClass {
  fn drop(&mut self) {
    // fallback for callers that skipped unregister
    if self.registered {
      if let Err(error) =
        unsafe { UnregisterClassW(PCWSTR(self.name.as_ptr()), self.hinstance) }
      {
        warn!("{error}");
      }
    }
  }
}
