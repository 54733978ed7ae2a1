
use std::error::Error;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::adapter::{FormatAdapter, LogAdapter};
use crate::call_site::CallSite;
use crate::csv::CsvFormatStrategy;
use crate::disk_strategy::DiskLogStrategy;
use crate::error::Result;
use crate::pretty::PrettyFormatStrategy;
use crate::printer::Printer;

/// Process-wide printer behind the logging macros
static PRINTER: OnceLock<Printer> = OnceLock::new();

/// The global printer. Starts with no adapters.
pub fn printer() -> &'static Printer {
  PRINTER.get_or_init(Printer::new)
}

pub fn add_adapter(adapter: Arc<dyn LogAdapter>) {
  printer().add_adapter(adapter);
}

pub fn clear_adapters() {
  printer().clear_adapters();
}

/// Flush every global adapter. Call before exiting when a disk adapter is registered.
pub fn flush() {
  printer().flush();
}

/// Entry point of the logging macros.
///
/// The macros always capture a call site, so the pretty formatter cannot fail
/// here; anything that still goes wrong is reported on stderr.
pub fn log(
  priority: i32,
  tag: Option<&str>,
  message: &str,
  error: Option<&(dyn Error + 'static)>,
  call_site: CallSite,
) {
  if let Err(e) = printer().log(priority, tag, message, error, Some(call_site)) {
    eprintln!("[prettylog] {}", e);
  }
}

/// Entry point of the `json!` macro.
pub fn json(tag: Option<&str>, json: &str, call_site: CallSite) {
  if let Err(e) = printer().json(tag, json, Some(call_site)) {
    eprintln!("[prettylog] {}", e);
  }
}

/// Register a pretty console adapter with default settings - fastest setup
pub fn init_pretty() {
  let pretty = PrettyFormatStrategy::builder().build();
  add_adapter(Arc::new(FormatAdapter::new(Arc::new(pretty))));
}

/// Register a pretty adapter built from `builder`
pub fn init_pretty_with(builder: crate::pretty::PrettyFormatStrategyBuilder) {
  add_adapter(Arc::new(FormatAdapter::new(Arc::new(builder.build()))));
}

/// Register a CSV adapter writing rolling files under `folder`
pub fn init_disk(folder: impl Into<PathBuf>) -> Result<()> {
  let disk = DiskLogStrategy::new(folder)?;
  let csv = CsvFormatStrategy::builder()
    .log_strategy(Arc::new(disk))
    .build()?;
  add_adapter(Arc::new(FormatAdapter::new(Arc::new(csv))));
  Ok(())
}
