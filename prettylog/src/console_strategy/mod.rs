
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::Mutex;

use colored::Colorize;

use crate::level::Level;
use crate::log_strategy::LogStrategy;

/// Default platform sink: one `L/tag: line` record per line on stdout.
///
/// Priorities the console cannot represent are remapped before writing:
/// anything above `ASSERT` is shown as `DEBUG`.
#[derive(Debug)]
pub struct ConsoleLogStrategy {
  // Pre-allocate buffer to avoid allocations in hot path
  buffer: Mutex<String>,
  colors: bool,
}

impl ConsoleLogStrategy {
  pub fn new() -> Self {
    Self {
      buffer: Mutex::new(String::with_capacity(256)),
      colors: true,
    }
  }

  /// Turn per-level colouring on or off.
  pub fn with_colors(mut self, colors: bool) -> Self {
    self.colors = colors;
    self
  }

  /// Appends the record for one line, newline included, to `buf`.
  pub fn format_line(&self, buf: &mut String, priority: i32, tag: &str, message: &str) {
    let level = Level::clamp_priority(priority);
    let head = format!("{}/{}:", level.as_char(), tag);

    if self.colors {
      let _ = writeln!(buf, "{} {}", paint(level, &head), paint(level, message));
    } else {
      let _ = writeln!(buf, "{} {}", head, message);
    }
  }
}

fn paint(level: Level, text: &str) -> colored::ColoredString {
  match level {
    Level::Verbose => text.dimmed(),
    Level::Debug => text.blue(),
    Level::Info => text.green(),
    Level::Warn => text.yellow(),
    Level::Error => text.red(),
    Level::Assert => text.red().bold(),
  }
}

impl Default for ConsoleLogStrategy {
  fn default() -> Self {
    Self::new()
  }
}

impl LogStrategy for ConsoleLogStrategy {
  fn log(&self, priority: i32, tag: &str, message: &str) {
    if let Ok(mut buf) = self.buffer.lock() {
      buf.clear();
      self.format_line(&mut buf, priority, tag, message);

      // Single write call
      let _ = io::stdout().write_all(buf.as_bytes());
    }
  }

  fn flush(&self) {
    let _ = io::stdout().flush();
  }
}
