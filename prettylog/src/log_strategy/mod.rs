
/// Where formatted lines end up.
///
/// Implementations are side-effect only: no error returns, no async. A sink
/// that cannot write reports the failure itself and drops the line.
pub trait LogStrategy: Send + Sync + 'static {
  /// Write one already-formatted line.
  fn log(&self, priority: i32, tag: &str, message: &str);

  /// Optional: block until every line handed to `log` so far is written.
  fn flush(&self) {}
}

impl<S: LogStrategy + ?Sized> LogStrategy for std::sync::Arc<S> {
  fn log(&self, priority: i32, tag: &str, message: &str) {
    (**self).log(priority, tag, message)
  }

  fn flush(&self) {
    (**self).flush()
  }
}

/// Records every line it receives. Test helper.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct CapturingLogStrategy {
  lines: std::sync::Mutex<Vec<crate::event::RenderedLine>>,
}

#[cfg(test)]
impl CapturingLogStrategy {
  pub(crate) fn new() -> std::sync::Arc<Self> {
    std::sync::Arc::new(Self::default())
  }

  pub(crate) fn lines(&self) -> Vec<crate::event::RenderedLine> {
    self.lines.lock().unwrap().clone()
  }

  pub(crate) fn texts(&self) -> Vec<String> {
    self.lines().into_iter().map(|line| line.text).collect()
  }
}

#[cfg(test)]
impl LogStrategy for CapturingLogStrategy {
  fn log(&self, priority: i32, tag: &str, message: &str) {
    self
      .lines
      .lock()
      .unwrap()
      .push(crate::event::RenderedLine::new(priority, tag, message));
  }
}
