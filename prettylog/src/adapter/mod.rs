
use std::sync::Arc;

use crate::error::Result;
use crate::event::LogEvent;
use crate::format_strategy::FormatStrategy;
use crate::level::Level;

/// An output registered with a [`crate::printer::Printer`].
pub trait LogAdapter: Send + Sync + 'static {
  /// Whether an event with this priority and tag should reach `log` at all.
  fn is_loggable(&self, priority: i32, tag: Option<&str>) -> bool;

  fn log(&self, event: &LogEvent<'_>) -> Result<()>;

  /// Optional: flush whatever the adapter writes to.
  fn flush(&self) {}
}

/// Adapter that feeds a [`FormatStrategy`] every event at or above `min_level`.
pub struct FormatAdapter {
  format_strategy: Arc<dyn FormatStrategy>,
  min_level: Level,
}

impl FormatAdapter {
  /// Logs everything.
  pub fn new(format_strategy: Arc<dyn FormatStrategy>) -> Self {
    Self {
      format_strategy,
      min_level: Level::Verbose,
    }
  }

  pub fn with_min_level(mut self, min_level: Level) -> Self {
    self.min_level = min_level;
    self
  }

  pub fn min_level(&self) -> Level {
    self.min_level
  }
}

impl LogAdapter for FormatAdapter {
  fn is_loggable(&self, priority: i32, _tag: Option<&str>) -> bool {
    priority >= self.min_level.priority()
  }

  fn log(&self, event: &LogEvent<'_>) -> Result<()> {
    self.format_strategy.log(event)
  }

  fn flush(&self) {
    self.format_strategy.flush();
  }
}
