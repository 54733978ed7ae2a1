
/// Lowest recognised priority.
pub const VERBOSE: i32 = 2;
pub const DEBUG: i32 = 3;
pub const INFO: i32 = 4;
pub const WARN: i32 = 5;
pub const ERROR: i32 = 6;
/// Highest recognised priority. Anything above it is out of range for a sink.
pub const ASSERT: i32 = 7;

/// Severity of a log call.
///
/// Priorities travel through the strategies as plain `i32` values so that
/// out-of-range input can reach the sink and be clamped there. `Level` is the
/// typed view of the recognised range `VERBOSE..=ASSERT`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Level {
  /// Very detailed information, mostly useful while developing
  #[default]
  Verbose = VERBOSE,
  /// Debug-level information
  Debug = DEBUG,
  /// General informational messages
  Info = INFO,
  /// Something looks wrong but the program keeps going
  Warn = WARN,
  /// A failure the caller should know about
  Error = ERROR,
  /// "What a terrible failure": conditions that should never happen
  Assert = ASSERT,
}

impl Level {
  /// Returns the level for a recognised priority, `None` otherwise.
  pub fn from_priority(priority: i32) -> Option<Level> {
    match priority {
      VERBOSE => Some(Level::Verbose),
      DEBUG => Some(Level::Debug),
      INFO => Some(Level::Info),
      WARN => Some(Level::Warn),
      ERROR => Some(Level::Error),
      ASSERT => Some(Level::Assert),
      _ => None,
    }
  }

  /// Maps any priority onto a level the platform sink accepts.
  ///
  /// Priorities above `ASSERT` become `Debug`, priorities below `VERBOSE`
  /// become `Verbose`.
  pub fn clamp_priority(priority: i32) -> Level {
    if priority > ASSERT {
      return Level::Debug;
    }
    Level::from_priority(priority).unwrap_or(Level::Verbose)
  }

  pub fn priority(self) -> i32 {
    self as i32
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Level::Verbose => "VERBOSE",
      Level::Debug => "DEBUG",
      Level::Info => "INFO",
      Level::Warn => "WARN",
      Level::Error => "ERROR",
      Level::Assert => "ASSERT",
    }
  }

  /// One-letter code used by the console sink.
  pub fn as_char(self) -> char {
    match self {
      Level::Verbose => 'V',
      Level::Debug => 'D',
      Level::Info => 'I',
      Level::Warn => 'W',
      Level::Error => 'E',
      Level::Assert => 'A',
    }
  }
}

impl From<Level> for i32 {
  fn from(level: Level) -> Self {
    level.priority()
  }
}

impl From<&tracing::Level> for Level {
  fn from(level: &tracing::Level) -> Self {
    match *level {
      tracing::Level::TRACE => Level::Verbose,
      tracing::Level::DEBUG => Level::Debug,
      tracing::Level::INFO => Level::Info,
      tracing::Level::WARN => Level::Warn,
      tracing::Level::ERROR => Level::Error,
    }
  }
}

impl std::fmt::Display for Level {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Name of a raw priority for text formats, `"UNKNOWN"` when out of range.
pub fn priority_name(priority: i32) -> &'static str {
  Level::from_priority(priority)
    .map(Level::as_str)
    .unwrap_or("UNKNOWN")
}
