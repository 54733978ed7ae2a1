//! # prettylog
//!
//! Bordered, caller-attributed log output with pluggable format and output
//! strategies.
//!
//! ```rust,ignore
//! prettylog::logger::init_pretty();
//! prettylog::info!("hello");
//! ```
//!
//! prints
//!
//! ```text
//! I/PRETTY_LOGGER: ┌──────────────────────────────────────────
//! I/PRETTY_LOGGER: │ Thread: main
//! I/PRETTY_LOGGER: ├┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄
//! I/PRETTY_LOGGER: │ app.main  (main.rs:2)
//! I/PRETTY_LOGGER: │ hello
//! I/PRETTY_LOGGER: └──────────────────────────────────────────
//! ```

pub mod adapter;
pub mod call_site;
pub mod console_strategy;
pub mod csv;
pub mod disk_strategy;
pub mod error;
pub mod event;
pub mod format_strategy;
pub mod level;
pub mod log_strategy;
pub mod logger;
mod macros;
pub mod pretty;
pub mod printer;
pub mod trace_layer;
pub mod utils;

pub use adapter::{FormatAdapter, LogAdapter};
pub use call_site::CallSite;
pub use console_strategy::ConsoleLogStrategy;
pub use csv::CsvFormatStrategy;
pub use disk_strategy::{DiskLogConfig, DiskLogStrategy};
pub use error::{LogError, Result};
pub use event::{LogEvent, RenderedLine};
pub use format_strategy::FormatStrategy;
pub use level::Level;
pub use log_strategy::LogStrategy;
pub use pretty::{PrettyFormatConfig, PrettyFormatStrategy};
pub use printer::Printer;
pub use trace_layer::PrettyLayer;
