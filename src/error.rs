use std::io;

use thiserror::Error;

pub type WindowResult<T> = Result<T, WindowError>;

#[derive(Error, Debug)]
pub enum WindowError {
  #[error("{0}")]
  Error(String),
  #[error("{0}")]
  Io(#[from] io::Error),
  #[error("{0}")]
  Win32(#[from] windows::core::Error),
}

#[macro_export]
macro_rules! window_error {
  () => {
    $crate::error::WindowError::Error("window error".to_string())
  };
  ($($arg:tt)*) => {{
    $crate::error::WindowError::Error(format!($($arg)*))
  }}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn macro_formats_message() {
    let error = window_error!("failed to {} window class", "register");
    assert_eq!(error.to_string(), "failed to register window class");
  }

  #[test]
  fn macro_default_message() {
    assert_eq!(window_error!().to_string(), "window error");
  }
}
