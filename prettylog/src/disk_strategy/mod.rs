//! # Disk Strategy
//!
//! Appends formatted lines to rolling files from a dedicated writer thread.
//!
//! ## Architecture
//!
//! - **Producers**: any thread calling [`LogStrategy::log`] pushes the line onto a
//!   bounded channel
//! - **Consumer**: one writer thread owns the open file and appends lines in the
//!   order they were queued
//! - **Rolling**: files are named `<prefix>_<n>.<ext>`; once the current file has
//!   reached `max_file_bytes` the writer moves on to `n + 1`
//!
//! A full queue blocks the producer until the writer catches up. Write failures
//! are reported on stderr and the line is dropped.
//!
//! ```rust,ignore
//! let disk = DiskLogStrategy::new("./logs")?;
//! disk.log(INFO, "APP", "written on the writer thread");
//! disk.flush(); // returns once the line is on disk
//! ```

mod __test__;

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};

use crate::log_strategy::LogStrategy;

/// 500 KiB, the size at which a log file is considered full.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 500 * 1024;
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Settings for [`DiskLogStrategy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskLogConfig {
  /// Directory the log files live in. Created on start if missing.
  pub folder: PathBuf,
  pub max_file_bytes: u64,
  pub file_prefix: String,
  pub file_extension: String,
  /// Lines that may be queued before `log` blocks.
  pub queue_capacity: usize,
}

impl DiskLogConfig {
  pub fn new(folder: impl Into<PathBuf>) -> Self {
    Self {
      folder: folder.into(),
      ..Self::default()
    }
  }

  /// Path of the `index`-th log file.
  pub fn file_path(&self, index: usize) -> PathBuf {
    self.folder.join(format!(
      "{}_{}.{}",
      self.file_prefix, index, self.file_extension
    ))
  }
}

impl Default for DiskLogConfig {
  fn default() -> Self {
    Self {
      folder: PathBuf::from("./logs"),
      max_file_bytes: DEFAULT_MAX_FILE_BYTES,
      file_prefix: "logs".to_string(),
      file_extension: "csv".to_string(),
      queue_capacity: DEFAULT_QUEUE_CAPACITY,
    }
  }
}

/// Messages sent from the strategy to its writer thread.
#[derive(Debug)]
enum DiskMessage {
  /// A line to append, without its trailing newline
  Line(String),
  /// Flush the open file, then acknowledge on the given channel
  Flush(Sender<()>),
  /// Flush and stop the writer loop
  Shutdown,
}

/// [`LogStrategy`] that appends every line to a rolling file set.
#[derive(Debug)]
pub struct DiskLogStrategy {
  sender: Sender<DiskMessage>,
  handle: Option<JoinHandle<()>>,
  config: DiskLogConfig,
}

impl DiskLogStrategy {
  /// Start a writer for `folder` with default limits.
  pub fn new(folder: impl Into<PathBuf>) -> io::Result<Self> {
    Self::with_config(DiskLogConfig::new(folder))
  }

  /// Create the folder if needed and spawn the writer thread.
  pub fn with_config(config: DiskLogConfig) -> io::Result<Self> {
    fs::create_dir_all(&config.folder)?;

    let (sender, receiver) = crossbeam_channel::bounded::<DiskMessage>(config.queue_capacity.max(1));
    let writer = RollingFileWriter::new(config.clone());
    let handle = thread::Builder::new()
      .name("prettylog-disk".to_string())
      .spawn(move || Self::writer_loop(receiver, writer))?;

    Ok(Self {
      sender,
      handle: Some(handle),
      config,
    })
  }

  pub fn config(&self) -> &DiskLogConfig {
    &self.config
  }

  /// Runs on the writer thread until `Shutdown` arrives or every sender is gone.
  fn writer_loop(receiver: Receiver<DiskMessage>, mut writer: RollingFileWriter) {
    while let Ok(msg) = receiver.recv() {
      match msg {
        DiskMessage::Line(line) => {
          if let Err(e) = writer.write_line(&line) {
            eprintln!(
              "[DiskLog] failed to write to {}: {}",
              writer.current_path().display(),
              e
            );
          }
        },
        DiskMessage::Flush(ack) => {
          writer.flush();
          let _ = ack.send(());
        },
        DiskMessage::Shutdown => {
          writer.flush();
          break;
        },
      }
    }
  }
}

impl LogStrategy for DiskLogStrategy {
  fn log(&self, _priority: i32, _tag: &str, message: &str) {
    let _ = self.sender.send(DiskMessage::Line(message.to_string()));
  }

  fn flush(&self) {
    let (ack, done) = crossbeam_channel::bounded::<()>(1);
    if self.sender.send(DiskMessage::Flush(ack)).is_ok() {
      let _ = done.recv();
    }
  }
}

impl Drop for DiskLogStrategy {
  fn drop(&mut self) {
    let _ = self.sender.send(DiskMessage::Shutdown);
    if let Some(handle) = self.handle.take() {
      if handle.join().is_err() {
        eprintln!("[DiskLog] writer thread panicked");
      }
    }
  }
}

/// Owns the currently open log file. Lives on the writer thread.
#[derive(Debug)]
struct RollingFileWriter {
  config: DiskLogConfig,
  index: usize,
  file: Option<File>,
  written: u64,
}

impl RollingFileWriter {
  fn new(config: DiskLogConfig) -> Self {
    Self {
      config,
      index: 0,
      file: None,
      written: 0,
    }
  }

  fn current_path(&self) -> PathBuf {
    self.config.file_path(self.index)
  }

  fn write_line(&mut self, line: &str) -> io::Result<()> {
    if self.file.is_some() && self.written >= self.config.max_file_bytes {
      self.file = None;
      self.index += 1;
    }

    let mut file = match self.file.take() {
      Some(file) => file,
      None => self.open_current()?,
    };

    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    self.written += line.len() as u64 + 1;
    self.file = Some(file);
    Ok(())
  }

  /// Opens the newest existing file if it still has room, otherwise the one
  /// after it. Older files are never appended to.
  fn open_current(&mut self) -> io::Result<File> {
    while self.config.file_path(self.index + 1).exists() {
      self.index += 1;
    }

    match fs::metadata(self.current_path()) {
      Ok(meta) if meta.len() >= self.config.max_file_bytes => {
        self.index += 1;
        self.written = 0;
      },
      Ok(meta) => self.written = meta.len(),
      Err(e) if e.kind() == io::ErrorKind::NotFound => self.written = 0,
      Err(e) => return Err(e),
    }
    open_append(&self.current_path())
  }

  fn flush(&mut self) {
    if let Some(file) = self.file.as_mut() {
      if let Err(e) = file.flush() {
        eprintln!("[DiskLog] flush failed: {}", e);
      }
    }
  }
}

fn open_append(path: &Path) -> io::Result<File> {
  OpenOptions::new().create(true).append(true).open(path)
}
