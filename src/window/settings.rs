#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Visibility {
  #[default]
  Shown,
  Hidden,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Size {
  pub width: i32,
  pub height: i32,
}

impl Default for Size {
  fn default() -> Self {
    Self {
      width: 800,
      height: 600,
    }
  }
}

impl From<(i32, i32)> for Size {
  fn from(value: (i32, i32)) -> Self {
    Self {
      width: value.0,
      height: value.1,
    }
  }
}

impl From<Size> for (i32, i32) {
  fn from(val: Size) -> Self {
    (val.width, val.height)
  }
}

/// Everything the window class and window are created from. Plain data; no
/// OS calls happen until the settings reach [`WindowClass::register`] or
/// [`Window::create`].
///
/// [`WindowClass::register`]: crate::window::class::WindowClass::register
/// [`Window::create`]: crate::window::Window::create
#[derive(Debug, Clone)]
pub struct WindowSettings {
  pub title: String,
  pub class_name: String,
  pub size: Size,
  pub visibility: Visibility,
  pub resizeable: bool,
}

impl Default for WindowSettings {
  fn default() -> Self {
    Self {
      title: "Window".into(),
      class_name: "winpump".into(),
      size: Size::default(),
      visibility: Visibility::default(),
      resizeable: true,
    }
  }
}

impl WindowSettings {
  pub fn with_title(mut self, title: impl Into<String>) -> Self {
    self.title = title.into();
    self
  }

  pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
    self.class_name = class_name.into();
    self
  }

  pub fn with_size(mut self, size: impl Into<Size>) -> Self {
    self.size = size.into();
    self
  }

  pub fn with_visibility(mut self, visibility: Visibility) -> Self {
    self.visibility = visibility;
    self
  }

  pub fn with_resizeable(mut self, resizeable: bool) -> Self {
    self.resizeable = resizeable;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let settings = WindowSettings::default();
    assert_eq!(settings.title, "Window");
    assert_eq!(settings.class_name, "winpump");
    assert_eq!(settings.size, Size {
      width: 800,
      height: 600,
    });
    assert_eq!(settings.visibility, Visibility::Shown);
    assert!(settings.resizeable);
  }

  #[test]
  fn builder_chain() {
    let settings = WindowSettings::default()
      .with_title("Win32 API example")
      .with_class_name("WinApiEx")
      .with_size((1280, 720))
      .with_visibility(Visibility::Hidden)
      .with_resizeable(false);
    assert_eq!(settings.title, "Win32 API example");
    assert_eq!(settings.class_name, "WinApiEx");
    assert_eq!(<(i32, i32)>::from(settings.size), (1280, 720));
    assert_eq!(settings.visibility, Visibility::Hidden);
    assert!(!settings.resizeable);
  }
}
