
use std::error::Error;
use std::fmt::Debug;
use std::sync::{Arc, PoisonError, RwLock};

use crate::adapter::LogAdapter;
use crate::call_site::CallSite;
use crate::error::Result;
use crate::event::LogEvent;
use crate::level::{ASSERT, DEBUG, ERROR, INFO, VERBOSE, WARN};

pub const EMPTY_MESSAGE: &str = "Empty/NULL log message";
pub const EMPTY_JSON: &str = "Empty/Null json content";
pub const INVALID_JSON: &str = "Invalid Json";

/// Fans every log call out to the registered adapters.
///
/// Adapters are consulted in registration order; each one decides through
/// [`LogAdapter::is_loggable`] whether it wants the event.
#[derive(Default)]
pub struct Printer {
  adapters: RwLock<Vec<Arc<dyn LogAdapter>>>,
}

impl Printer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_adapter(&self, adapter: Arc<dyn LogAdapter>) {
    self
      .adapters
      .write()
      .unwrap_or_else(PoisonError::into_inner)
      .push(adapter);
  }

  pub fn clear_adapters(&self) {
    self
      .adapters
      .write()
      .unwrap_or_else(PoisonError::into_inner)
      .clear();
  }

  pub fn adapter_count(&self) -> usize {
    self
      .adapters
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .len()
  }

  /// Logs `message`, with `error` and its sources appended when given.
  ///
  /// Every loggable adapter sees the event even if an earlier one failed; the
  /// first failure is returned.
  pub fn log(
    &self,
    priority: i32,
    tag: Option<&str>,
    message: &str,
    error: Option<&(dyn Error + 'static)>,
    call_site: Option<CallSite>,
  ) -> Result<()> {
    let message = compose_message(message, error);
    let event = LogEvent {
      priority,
      tag,
      message: &message,
      call_site,
    };

    // Snapshot so adapters may touch the printer without deadlocking
    let adapters: Vec<Arc<dyn LogAdapter>> = self
      .adapters
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .clone();

    let mut first_error = None;
    for adapter in adapters {
      if !adapter.is_loggable(priority, tag) {
        continue;
      }
      if let Err(e) = adapter.log(&event) {
        first_error.get_or_insert(e);
      }
    }

    match first_error {
      Some(e) => Err(e),
      None => Ok(()),
    }
  }

  /// Flush every adapter, e.g. before the process exits.
  pub fn flush(&self) {
    let adapters: Vec<Arc<dyn LogAdapter>> = self
      .adapters
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .clone();
    for adapter in adapters {
      adapter.flush();
    }
  }

  pub fn verbose(&self, message: &str, call_site: CallSite) -> Result<()> {
    self.log(VERBOSE, None, message, None, Some(call_site))
  }

  pub fn debug(&self, message: &str, call_site: CallSite) -> Result<()> {
    self.log(DEBUG, None, message, None, Some(call_site))
  }

  /// Logs `{:?}` of any value at DEBUG.
  pub fn debug_value<T: Debug + ?Sized>(&self, value: &T, call_site: CallSite) -> Result<()> {
    self.debug(&format!("{:?}", value), call_site)
  }

  pub fn info(&self, message: &str, call_site: CallSite) -> Result<()> {
    self.log(INFO, None, message, None, Some(call_site))
  }

  pub fn warn(&self, message: &str, call_site: CallSite) -> Result<()> {
    self.log(WARN, None, message, None, Some(call_site))
  }

  pub fn error(
    &self,
    error: Option<&(dyn Error + 'static)>,
    message: &str,
    call_site: CallSite,
  ) -> Result<()> {
    self.log(ERROR, None, message, error, Some(call_site))
  }

  /// What a terrible failure: logs at ASSERT.
  pub fn wtf(&self, message: &str, call_site: CallSite) -> Result<()> {
    self.log(ASSERT, None, message, None, Some(call_site))
  }

  /// Pretty-prints a JSON document at DEBUG.
  ///
  /// Input that is not an object or array is reported as invalid at DEBUG;
  /// input that fails to parse is reported at ERROR with the parse error.
  pub fn json(&self, tag: Option<&str>, json: &str, call_site: Option<CallSite>) -> Result<()> {
    let json = json.trim();
    if json.is_empty() {
      return self.log(DEBUG, tag, EMPTY_JSON, None, call_site);
    }
    if !(json.starts_with('{') || json.starts_with('[')) {
      return self.log(DEBUG, tag, INVALID_JSON, None, call_site);
    }

    match serde_json::from_str::<serde_json::Value>(json) {
      Ok(value) => {
        let pretty = serde_json::to_string_pretty(&value)?;
        self.log(DEBUG, tag, &pretty, None, call_site)
      },
      Err(e) => self.log(
        ERROR,
        tag,
        INVALID_JSON,
        Some(&e as &(dyn Error + 'static)),
        call_site,
      ),
    }
  }
}

impl std::fmt::Debug for Printer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Printer")
      .field("adapters", &self.adapter_count())
      .finish()
  }
}

/// Message text as handed to the adapters.
fn compose_message(message: &str, error: Option<&(dyn Error + 'static)>) -> String {
  match error {
    Some(error) if message.is_empty() => error_chain(error),
    Some(error) => format!("{} : {}", message, error_chain(error)),
    None if message.is_empty() => EMPTY_MESSAGE.to_string(),
    None => message.to_string(),
  }
}

/// `Display` of the error followed by one `Caused by:` line per source.
pub fn error_chain(error: &(dyn Error + 'static)) -> String {
  let mut chain = error.to_string();
  let mut source = error.source();
  while let Some(cause) = source {
    chain.push_str("\nCaused by: ");
    chain.push_str(&cause.to_string());
    source = cause.source();
  }
  chain
}
