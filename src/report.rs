use std::fmt::{self, Display};

use tracing::error;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Accumulates failure messages in the order they were hit. The log never
/// recovers or retries anything; it only decides the process exit code and
/// what gets printed on the way out.
#[derive(Debug, Default)]
pub struct ErrorLog {
  entries: Vec<String>,
}

impl ErrorLog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends a failure message and echoes it to the tracing layer.
  pub fn record(&mut self, failure: impl Display) {
    let message = failure.to_string();
    error!("{message}");
    self.entries.push(message);
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn lines(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(String::as_str)
  }

  /// Process exit code for a run that produced this log: 0 when clean, 1
  /// when anything was recorded.
  pub fn exit_code(&self) -> u8 {
    if self.is_empty() {
      EXIT_SUCCESS
    } else {
      EXIT_FAILURE
    }
  }
}

impl Display for ErrorLog {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for entry in &self.entries {
      writeln!(f, "Error: {entry}")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starts_empty() {
    let log = ErrorLog::new();
    assert!(log.is_empty());
    assert_eq!(log.to_string(), "");
  }

  #[test]
  fn preserves_insertion_order() {
    let mut log = ErrorLog::new();
    log.record("failed to create window");
    log.record("failed to unregister window class");
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines, [
      "failed to create window",
      "failed to unregister window class",
    ]);
  }

  #[test]
  fn displays_one_line_per_entry() {
    let mut log = ErrorLog::new();
    log.record("failed to register window class");
    assert_eq!(log.to_string(), "Error: failed to register window class\n");
  }

  #[test]
  fn clean_log_exits_zero() {
    assert_eq!(ErrorLog::new().exit_code(), EXIT_SUCCESS);
  }

  #[test]
  fn recorded_failure_exits_one() {
    let mut log = ErrorLog::new();
    log.record("failed to create window");
    assert_eq!(log.exit_code(), EXIT_FAILURE);
  }
}
