use std::io;

/// Errors surfaced by formatters and the printer.
///
/// Sink failures are not represented here: strategies report them on stderr and
/// carry on.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
  /// The event carried no call site, so the header cannot be attributed.
  #[error(
    "cannot attribute log call for tag `{tag}`: no call site was captured; \
     log through the prettylog macros or attach a CallSite to the event"
  )]
  UnresolvedCallSite { tag: String },

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LogError>;
