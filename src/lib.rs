#![deny(unsafe_op_in_unsafe_fn)]

//! The smallest useful slice of Win32 windowing: register a class, open a
//! window, pump messages until it closes, unregister the class. Everything
//! else is forwarded to the operating system untouched.

pub mod error;
pub mod prelude;
pub mod report;
pub mod utilities;
pub mod window;
