//! # Trace Layer
//!
//! Routes `tracing` events through a [`Printer`], so code instrumented with
//! `tracing::info!` and friends gets the same framed output as the prettylog
//! macros.
//!
//! ```rust,ignore
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! prettylog::logger::init_pretty();
//! let subscriber = tracing_subscriber::Registry::default().with(PrettyLayer::global());
//! tracing::subscriber::set_global_default(subscriber)?;
//!
//! tracing::warn!(tag = "NET", retries = 3, "upstream slow");
//! ```
//!
//! The `message` field becomes the log message, a `tag` field becomes the
//! per-call tag and every other field is appended as ` key=value`. The call
//! site comes from the event metadata; the enclosing function is not known.


use std::fmt::Write as _;
use std::sync::Arc;

use tracing::{field::Field, Event as TracingEvent, Subscriber};
use tracing_subscriber::{layer::Context, registry::LookupSpan, Layer};

use crate::call_site::CallSite;
use crate::level::Level;
use crate::logger;
use crate::printer::Printer;

#[derive(Debug, Clone)]
enum PrinterRef {
  Global,
  Shared(Arc<Printer>),
}

#[derive(Debug, Clone)]
pub struct PrettyLayer {
  printer: PrinterRef,
}

impl PrettyLayer {
  /// Layer feeding the given printer.
  pub fn new(printer: Arc<Printer>) -> Self {
    Self {
      printer: PrinterRef::Shared(printer),
    }
  }

  /// Layer feeding the global printer of [`crate::logger`].
  pub fn global() -> Self {
    Self {
      printer: PrinterRef::Global,
    }
  }

  fn printer(&self) -> &Printer {
    match &self.printer {
      PrinterRef::Global => logger::printer(),
      PrinterRef::Shared(printer) => printer,
    }
  }
}

impl<S> Layer<S> for PrettyLayer
where
  S: Subscriber + for<'a> LookupSpan<'a>,
{
  fn on_event(&self, event: &TracingEvent<'_>, _ctx: Context<'_, S>) {
    let metadata = event.metadata();
    let level = Level::from(metadata.level());

    let mut visitor = MessageVisitor::default();
    event.record(&mut visitor);

    let call_site = match (metadata.module_path(), metadata.file(), metadata.line()) {
      (Some(module_path), Some(file), Some(line)) => {
        Some(CallSite::new(module_path, None, file, line))
      },
      _ => None,
    };

    let message = visitor.finish();
    if let Err(e) = self.printer().log(
      level.priority(),
      visitor.tag.as_deref(),
      &message,
      None,
      call_site,
    ) {
      eprintln!("[PrettyLayer] {}", e);
    }
  }
}

#[derive(Default)]
struct MessageVisitor {
  message: Option<String>,
  tag: Option<String>,
  fields: String,
}

impl MessageVisitor {
  fn finish(&mut self) -> String {
    let mut message = self.message.take().unwrap_or_default();
    message.push_str(&self.fields);
    message
  }
}

impl tracing::field::Visit for MessageVisitor {
  fn record_str(&mut self, field: &Field, value: &str) {
    match field.name() {
      "message" => self.message = Some(value.to_string()),
      "tag" => self.tag = Some(value.to_string()),
      name => {
        let _ = write!(self.fields, " {}={}", name, value);
      },
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
    match field.name() {
      "message" => self.message = Some(format!("{:?}", value)),
      "tag" => self.tag = Some(format!("{:?}", value)),
      name => {
        let _ = write!(self.fields, " {}={:?}", name, value);
      },
    }
  }
}
