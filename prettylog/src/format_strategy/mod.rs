use std::sync::Arc;

use crate::error::Result;
use crate::event::LogEvent;

/// Turns a [`LogEvent`] into output lines and hands them to a sink.
///
/// Formatting is synchronous: when `log` returns, every line of the event has
/// been passed on.
pub trait FormatStrategy: Send + Sync + 'static {
  fn log(&self, event: &LogEvent<'_>) -> Result<()>;

  /// Optional: flush the underlying sink.
  fn flush(&self) {}
}

impl<F: FormatStrategy + ?Sized> FormatStrategy for Arc<F> {
  fn log(&self, event: &LogEvent<'_>) -> Result<()> {
    (**self).log(event)
  }

  fn flush(&self) {
    (**self).flush()
  }
}
