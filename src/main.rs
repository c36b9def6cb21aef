use std::process::ExitCode;

use winpump::prelude::*;

fn main() -> ExitCode {
  tracing_subscriber::fmt::init();

  let mut log = ErrorLog::new();
  run(&mut log);

  if !log.is_empty() {
    print!("{log}");
  }

  ExitCode::from(log.exit_code())
}

fn run(log: &mut ErrorLog) {
  let settings = WindowSettings::default()
    .with_title("Win32 API example")
    .with_class_name("WinApiEx")
    .with_size((1280, 720));

  let class = match WindowClass::register(&settings) {
    Ok(class) => class,
    Err(error) => {
      log.record(error);
      return;
    }
  };

  let window = match Window::create(&class, &settings) {
    Ok(window) => window,
    Err(error) => {
      log.record(error);
      return;
    }
  };

  if let Err(error) = window.pump() {
    log.record(error);
  }

  if let Err(error) = class.unregister() {
    log.record(error);
  }
}
