
use crate::call_site::CallSite;

/// A single log call on its way to the formatters.
///
/// Events live only for the duration of the call: they are built by the
/// printer, rendered synchronously by every loggable adapter and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEvent<'a> {
  /// Raw priority. Usually one of the [`crate::level`] constants, but any
  /// value is accepted; sinks clamp what they cannot represent.
  pub priority: i32,

  /// Per-call tag, appended to the formatter's base tag when it differs.
  pub tag: Option<&'a str>,

  pub message: &'a str,

  /// Where the call was made. Formatters that attribute the caller fail
  /// without it.
  pub call_site: Option<CallSite>,
}

impl<'a> LogEvent<'a> {
  pub fn new(priority: i32, message: &'a str) -> Self {
    Self {
      priority,
      tag: None,
      message,
      call_site: None,
    }
  }

  pub fn with_tag(mut self, tag: Option<&'a str>) -> Self {
    self.tag = tag;
    self
  }

  pub fn with_call_site(mut self, call_site: CallSite) -> Self {
    self.call_site = Some(call_site);
    self
  }
}

/// One line of formatted output, ready for a [`crate::log_strategy::LogStrategy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedLine {
  pub priority: i32,
  pub tag: String,
  pub text: String,
}

impl RenderedLine {
  pub fn new(priority: i32, tag: impl Into<String>, text: impl Into<String>) -> Self {
    Self {
      priority,
      tag: tag.into(),
      text: text.into(),
    }
  }
}

impl std::fmt::Display for RenderedLine {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.text)
  }
}
