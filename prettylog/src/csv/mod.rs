
use std::fmt::Write as _;
use std::sync::Arc;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::disk_strategy::DiskLogStrategy;
use crate::error::Result;
use crate::event::LogEvent;
use crate::format_strategy::FormatStrategy;
use crate::level::priority_name;
use crate::log_strategy::LogStrategy;
use crate::pretty::DEFAULT_TAG;
use crate::utils::format_tag;

pub const DEFAULT_DATE_FORMAT: &str = "%Y.%m.%d %H:%M:%S%.3f";
const NEW_LINE_REPLACEMENT: &str = " <br> ";
const SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvFormatConfig {
  pub tag: String,
  /// `chrono` format string for the human-readable time column
  pub date_format: String,
}

impl Default for CsvFormatConfig {
  fn default() -> Self {
    Self {
      tag: DEFAULT_TAG.to_string(),
      date_format: DEFAULT_DATE_FORMAT.to_string(),
    }
  }
}

/// One `millis,time,LEVEL,tag,message` row per event, meant for disk logs.
pub struct CsvFormatStrategy {
  config: CsvFormatConfig,
  log_strategy: Arc<dyn LogStrategy>,
}

impl std::fmt::Debug for CsvFormatStrategy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CsvFormatStrategy")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}

impl CsvFormatStrategy {
  pub fn builder() -> CsvFormatStrategyBuilder {
    CsvFormatStrategyBuilder::default()
  }

  pub fn config(&self) -> &CsvFormatConfig {
    &self.config
  }

  /// Formats `event` as it would be logged at time `now`.
  pub fn format_row(&self, event: &LogEvent<'_>, now: DateTime<Local>) -> String {
    let tag = format_tag(&self.config.tag, event.tag);
    self.render_row(event, &tag, now)
  }

  fn render_row(&self, event: &LogEvent<'_>, tag: &str, now: DateTime<Local>) -> String {
    let mut message = event.message.replace("\r\n", NEW_LINE_REPLACEMENT);
    if message.contains('\n') {
      message = message.replace('\n', NEW_LINE_REPLACEMENT);
    }

    let mut row = String::with_capacity(message.len() + 64);
    row.push_str(&now.timestamp_millis().to_string());
    row.push(SEPARATOR);
    write_date(&mut row, now, &self.config.date_format);
    row.push(SEPARATOR);
    row.push_str(priority_name(event.priority));
    row.push(SEPARATOR);
    row.push_str(tag);
    row.push(SEPARATOR);
    row.push_str(&message);
    row
  }
}

impl FormatStrategy for CsvFormatStrategy {
  fn log(&self, event: &LogEvent<'_>) -> Result<()> {
    let tag = format_tag(&self.config.tag, event.tag);
    let row = self.render_row(event, &tag, Local::now());
    self.log_strategy.log(event.priority, &tag, &row);
    Ok(())
  }

  fn flush(&self) {
    self.log_strategy.flush();
  }
}

/// Appends `now` in `format`, falling back to the default format when chrono
/// rejects it.
fn write_date(row: &mut String, now: DateTime<Local>, format: &str) {
  let start = row.len();
  if write!(row, "{}", now.format(format)).is_err() {
    row.truncate(start);
    let _ = write!(row, "{}", now.format(DEFAULT_DATE_FORMAT));
  }
}

/// Empty formats and formats with unknown specifiers such as `%Q` are invalid.
pub fn is_valid_date_format(format: &str) -> bool {
  !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

#[derive(Default)]
pub struct CsvFormatStrategyBuilder {
  config: CsvFormatConfig,
  log_strategy: Option<Arc<dyn LogStrategy>>,
}

impl CsvFormatStrategyBuilder {
  pub fn config(mut self, config: CsvFormatConfig) -> Self {
    self.config = config;
    self
  }

  pub fn tag(mut self, tag: impl Into<String>) -> Self {
    self.config.tag = tag.into();
    self
  }

  pub fn date_format(mut self, date_format: impl Into<String>) -> Self {
    self.config.date_format = date_format.into();
    self
  }

  pub fn log_strategy(mut self, log_strategy: Arc<dyn LogStrategy>) -> Self {
    self.log_strategy = Some(log_strategy);
    self
  }

  /// Without an explicit sink, starts a [`DiskLogStrategy`] under `./logs`.
  pub fn build(mut self) -> Result<CsvFormatStrategy> {
    if self.config.tag.is_empty() {
      self.config.tag = DEFAULT_TAG.to_string();
    }
    if !is_valid_date_format(&self.config.date_format) {
      eprintln!(
        "[CsvFormat] invalid date format {:?}, using {:?}",
        self.config.date_format, DEFAULT_DATE_FORMAT
      );
      self.config.date_format = DEFAULT_DATE_FORMAT.to_string();
    }

    let log_strategy = match self.log_strategy {
      Some(strategy) => strategy,
      None => Arc::new(DiskLogStrategy::new("./logs")?),
    };

    Ok(CsvFormatStrategy {
      config: self.config,
      log_strategy,
    })
  }
}
