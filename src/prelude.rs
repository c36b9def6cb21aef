pub use crate::{
  error::{WindowError, WindowResult},
  report::ErrorLog,
  window::{
    class::WindowClass,
    settings::{Size, Visibility, WindowSettings},
    Window,
  },
};
