//! # Pretty Module
//!
//! Bordered, caller-attributed rendering of log events.
//!
//! Every event becomes a framed block:
//!
//! ```text
//! ┌────────────────────────────────────────────
//! │ Thread: main
//! ├┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄
//! │ client.send  (client.rs:42)
//! │ first line of the message
//! │ second line of the message
//! └────────────────────────────────────────────
//! ```
//!
//! Messages longer than the chunk size (4000 bytes by default, just under the
//! ~4076 byte limit of a logcat entry) are split into several chunks, each cut
//! on a UTF-8 character boundary.
//!
//! The rendered lines are handed one by one to the configured
//! [`LogStrategy`]. Lines of two blocks logged concurrently from different
//! threads may interleave at the sink; blocks are not written atomically.

mod __test__;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::console_strategy::ConsoleLogStrategy;
use crate::error::{LogError, Result};
use crate::event::{LogEvent, RenderedLine};
use crate::format_strategy::FormatStrategy;
use crate::log_strategy::LogStrategy;
use crate::utils::{current_thread_name, format_tag};

pub const DEFAULT_TAG: &str = "PRETTY_LOGGER";
pub const DEFAULT_CHUNK_SIZE: usize = 4000;
/// Smallest usable chunk: one four-byte UTF-8 character.
pub const MIN_CHUNK_SIZE: usize = 4;

const TOP_LEFT_CORNER: char = '┌';
const BOTTOM_LEFT_CORNER: char = '└';
const MIDDLE_CORNER: char = '├';
const HORIZONTAL_LINE: char = '│';
const DOUBLE_DIVIDER: &str = "────────────────────────────────────────────────────────";
const SINGLE_DIVIDER: &str = "┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄";

/// `┌` followed by the double divider twice.
pub fn top_border() -> String {
  format!("{}{}{}", TOP_LEFT_CORNER, DOUBLE_DIVIDER, DOUBLE_DIVIDER)
}

/// `└` followed by the double divider twice.
pub fn bottom_border() -> String {
  format!("{}{}{}", BOTTOM_LEFT_CORNER, DOUBLE_DIVIDER, DOUBLE_DIVIDER)
}

/// `├` followed by the single divider twice.
pub fn middle_border() -> String {
  format!("{}{}{}", MIDDLE_CORNER, SINGLE_DIVIDER, SINGLE_DIVIDER)
}

/// Options for [`PrettyFormatStrategy`], e.g. as part of an application config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrettyFormatConfig {
  /// Emit a `Thread: <name>` line and a divider above the call site
  pub show_thread_info: bool,
  /// Base tag; per-call tags are appended as `tag-per_call`
  pub tag: String,
  /// Maximum number of message bytes per chunk
  pub chunk_size: usize,
}

impl Default for PrettyFormatConfig {
  fn default() -> Self {
    Self {
      show_thread_info: true,
      tag: DEFAULT_TAG.to_string(),
      chunk_size: DEFAULT_CHUNK_SIZE,
    }
  }
}

impl PrettyFormatConfig {
  /// Replaces unset values with defaults: empty tag, zero or too small chunk.
  fn normalized(mut self) -> Self {
    if self.tag.is_empty() {
      self.tag = DEFAULT_TAG.to_string();
    }
    if self.chunk_size == 0 {
      self.chunk_size = DEFAULT_CHUNK_SIZE;
    }
    self.chunk_size = self.chunk_size.max(MIN_CHUNK_SIZE);
    self
  }
}

/// Formatter that frames each event and attributes it to its call site.
pub struct PrettyFormatStrategy {
  config: PrettyFormatConfig,
  log_strategy: Arc<dyn LogStrategy>,
}

impl std::fmt::Debug for PrettyFormatStrategy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PrettyFormatStrategy")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}

impl PrettyFormatStrategy {
  pub fn builder() -> PrettyFormatStrategyBuilder {
    PrettyFormatStrategyBuilder::default()
  }

  pub fn config(&self) -> &PrettyFormatConfig {
    &self.config
  }

  /// Builds the full block for `event` without writing anything.
  ///
  /// # Errors
  /// [`LogError::UnresolvedCallSite`] when the event has no call site.
  pub fn render(&self, event: &LogEvent<'_>) -> Result<Vec<RenderedLine>> {
    let tag = format_tag(&self.config.tag, event.tag);
    let call_site = match event.call_site {
      Some(site) => site,
      None => return Err(LogError::UnresolvedCallSite { tag }),
    };

    let mut texts = Vec::with_capacity(8);
    texts.push(top_border());

    if self.config.show_thread_info {
      texts.push(format!("{} Thread: {}", HORIZONTAL_LINE, current_thread_name()));
      texts.push(middle_border());
    }
    texts.push(format!("{} {}", HORIZONTAL_LINE, call_site));

    for chunk in chunk_message(event.message, self.config.chunk_size) {
      for line in content_lines(chunk) {
        texts.push(format!("{} {}", HORIZONTAL_LINE, line));
      }
    }

    texts.push(bottom_border());

    Ok(
      texts
        .into_iter()
        .map(|text| RenderedLine::new(event.priority, tag.as_str(), text))
        .collect(),
    )
  }
}

impl FormatStrategy for PrettyFormatStrategy {
  fn log(&self, event: &LogEvent<'_>) -> Result<()> {
    for line in self.render(event)? {
      self.log_strategy.log(line.priority, &line.tag, &line.text);
    }
    Ok(())
  }

  fn flush(&self) {
    self.log_strategy.flush();
  }
}

/// Splits `message` into consecutive pieces of at most `chunk_size` bytes.
///
/// Pieces always end on a character boundary, so concatenating them gives back
/// `message`. A message that fits yields itself, an empty message yields one
/// empty piece. `chunk_size` is raised to [`MIN_CHUNK_SIZE`] if smaller.
pub fn chunk_message(message: &str, chunk_size: usize) -> Vec<&str> {
  let chunk_size = chunk_size.max(MIN_CHUNK_SIZE);
  if message.len() <= chunk_size {
    return vec![message];
  }

  let mut chunks = Vec::with_capacity(message.len() / chunk_size + 1);
  let mut start = 0;
  while start < message.len() {
    let mut end = (start + chunk_size).min(message.len());
    while !message.is_char_boundary(end) {
      end -= 1;
    }
    chunks.push(&message[start..end]);
    start = end;
  }
  chunks
}

/// Lines of one chunk: split on `\n`, trailing `\r` stripped, trailing empty
/// lines dropped, never fewer than one line.
fn content_lines(chunk: &str) -> Vec<&str> {
  let mut lines: Vec<&str> = chunk
    .split('\n')
    .map(|line| line.strip_suffix('\r').unwrap_or(line))
    .collect();

  while lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
    lines.pop();
  }
  lines
}

/// Fluent construction of a [`PrettyFormatStrategy`].
///
/// ```rust,ignore
/// let pretty = PrettyFormatStrategy::builder()
///   .tag("APP")
///   .show_thread_info(false)
///   .log_strategy(Arc::new(ConsoleLogStrategy::new()))
///   .build();
/// ```
#[derive(Default)]
pub struct PrettyFormatStrategyBuilder {
  config: PrettyFormatConfig,
  log_strategy: Option<Arc<dyn LogStrategy>>,
}

impl PrettyFormatStrategyBuilder {
  /// Replace every option with the values of `config`.
  pub fn config(mut self, config: PrettyFormatConfig) -> Self {
    self.config = config;
    self
  }

  pub fn tag(mut self, tag: impl Into<String>) -> Self {
    self.config.tag = tag.into();
    self
  }

  pub fn show_thread_info(mut self, show: bool) -> Self {
    self.config.show_thread_info = show;
    self
  }

  pub fn chunk_size(mut self, chunk_size: usize) -> Self {
    self.config.chunk_size = chunk_size;
    self
  }

  pub fn log_strategy(mut self, log_strategy: Arc<dyn LogStrategy>) -> Self {
    self.log_strategy = Some(log_strategy);
    self
  }

  /// Unset values fall back to defaults; the sink defaults to the console.
  pub fn build(self) -> PrettyFormatStrategy {
    PrettyFormatStrategy {
      config: self.config.normalized(),
      log_strategy: self
        .log_strategy
        .unwrap_or_else(|| Arc::new(ConsoleLogStrategy::new())),
    }
  }
}
