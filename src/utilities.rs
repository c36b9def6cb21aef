use std::ops::BitAnd;

use windows::Win32::{
  Foundation::HINSTANCE,
  System::LibraryLoader::GetModuleHandleW,
  UI::WindowsAndMessaging::{self, WINDOW_EX_STYLE, WINDOW_STYLE},
};

use crate::{
  error::WindowResult,
  window::settings::{Visibility, WindowSettings},
};

/// Instance handle of the running executable.
pub fn module_instance() -> WindowResult<HINSTANCE> {
  let module = unsafe { GetModuleHandleW(None)? };
  Ok(module.into())
}

pub(crate) fn window_style(settings: &WindowSettings) -> WINDOW_STYLE {
  let mut style = WindowsAndMessaging::WS_OVERLAPPEDWINDOW;

  if !settings.resizeable {
    style &= !(WindowsAndMessaging::WS_SIZEBOX
      | WindowsAndMessaging::WS_MAXIMIZEBOX
      | WindowsAndMessaging::WS_MINIMIZEBOX);
  }

  if let Visibility::Shown = settings.visibility {
    style |= WindowsAndMessaging::WS_VISIBLE;
  }

  style
}

pub(crate) fn window_ex_style(_settings: &WindowSettings) -> WINDOW_EX_STYLE {
  WindowsAndMessaging::WS_EX_WINDOWEDGE | WindowsAndMessaging::WS_EX_APPWINDOW
}

pub fn is_flag_set<T: Copy + BitAnd<T, Output = T> + PartialEq<T>>(
  var: T,
  flag: T,
) -> bool {
  (var & flag) == flag
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn visible_settings_set_ws_visible() {
    let settings = WindowSettings::default().with_visibility(Visibility::Shown);
    let style = window_style(&settings);
    assert!(is_flag_set(style, WindowsAndMessaging::WS_VISIBLE));
    assert!(is_flag_set(style, WindowsAndMessaging::WS_OVERLAPPEDWINDOW));
  }

  #[test]
  fn hidden_settings_clear_ws_visible() {
    let settings = WindowSettings::default().with_visibility(Visibility::Hidden);
    let style = window_style(&settings);
    assert!(!is_flag_set(style, WindowsAndMessaging::WS_VISIBLE));
  }

  #[test]
  fn fixed_size_settings_drop_sizebox() {
    let settings = WindowSettings::default().with_resizeable(false);
    let style = window_style(&settings);
    assert!(!is_flag_set(style, WindowsAndMessaging::WS_SIZEBOX));
    assert!(!is_flag_set(style, WindowsAndMessaging::WS_MAXIMIZEBOX));
  }

  #[test]
  fn flag_set_checks_all_bits() {
    assert!(is_flag_set(0b0110_u32, 0b0110));
    assert!(!is_flag_set(0b0100_u32, 0b0110));
  }
}
