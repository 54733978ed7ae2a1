#[cfg(test)]
mod __test__ {
  use std::fs;
  use std::sync::Arc;
  use std::thread;

  use crate::disk_strategy::{DiskLogConfig, DiskLogStrategy, DEFAULT_MAX_FILE_BYTES};
  use crate::level::INFO;
  use crate::log_strategy::LogStrategy;

  fn read(path: std::path::PathBuf) -> String {
    fs::read_to_string(path).unwrap()
  }

  #[test]
  fn test_config_defaults() {
    let config = DiskLogConfig::default();
    assert_eq!(config.max_file_bytes, DEFAULT_MAX_FILE_BYTES);
    assert_eq!(config.file_prefix, "logs");
    assert_eq!(config.file_extension, "csv");
    assert!(config.file_path(3).ends_with("logs_3.csv"));
  }

  #[test]
  fn test_config_deserializes_partial_json() {
    let config: DiskLogConfig =
      serde_json::from_str(r#"{"folder":"/var/log/app","max_file_bytes":2048}"#).unwrap();
    assert_eq!(config.folder, std::path::PathBuf::from("/var/log/app"));
    assert_eq!(config.max_file_bytes, 2048);
    assert_eq!(config.file_prefix, "logs");
  }

  #[test]
  fn test_creates_folder_and_writes_lines_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("nested").join("logs");
    let disk = DiskLogStrategy::new(&folder).unwrap();

    disk.log(INFO, "APP", "first");
    disk.log(INFO, "APP", "second");
    disk.flush();

    assert_eq!(read(folder.join("logs_0.csv")), "first\nsecond\n");
  }

  #[test]
  fn test_rolls_over_when_file_is_full() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = DiskLogConfig::new(dir.path());
    config.max_file_bytes = 10;
    let disk = DiskLogStrategy::with_config(config.clone()).unwrap();

    disk.log(INFO, "APP", "0123456789");
    disk.log(INFO, "APP", "abc");
    disk.log(INFO, "APP", "def");
    disk.flush();

    assert_eq!(read(config.file_path(0)), "0123456789\n");
    assert_eq!(read(config.file_path(1)), "abc\ndef\n");
    assert!(!config.file_path(2).exists());
  }

  #[test]
  fn test_resumes_after_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = DiskLogConfig::new(dir.path());
    config.max_file_bytes = 8;

    fs::write(config.file_path(0), "full-file\n").unwrap();
    fs::write(config.file_path(1), "half\n").unwrap();

    let disk = DiskLogStrategy::with_config(config.clone()).unwrap();
    disk.log(INFO, "APP", "more");
    disk.flush();

    assert_eq!(read(config.file_path(0)), "full-file\n");
    assert_eq!(read(config.file_path(1)), "half\nmore\n");
  }

  #[test]
  fn test_resumes_newest_file_even_when_older_has_room() {
    let dir = tempfile::tempdir().unwrap();
    let config = DiskLogConfig::new(dir.path());

    fs::write(config.file_path(0), "old0\n").unwrap();
    fs::write(config.file_path(1), "old1\n").unwrap();

    let disk = DiskLogStrategy::with_config(config.clone()).unwrap();
    disk.log(INFO, "APP", "new");
    disk.flush();

    assert_eq!(read(config.file_path(0)), "old0\n");
    assert_eq!(read(config.file_path(1)), "old1\nnew\n");
  }

  #[test]
  fn test_rolls_past_full_newest_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = DiskLogConfig::new(dir.path());
    config.max_file_bytes = 8;

    fs::write(config.file_path(0), "a\n").unwrap();
    fs::write(config.file_path(1), "full-file\n").unwrap();

    let disk = DiskLogStrategy::with_config(config.clone()).unwrap();
    disk.log(INFO, "APP", "next");
    disk.flush();

    assert_eq!(read(config.file_path(0)), "a\n");
    assert_eq!(read(config.file_path(1)), "full-file\n");
    assert_eq!(read(config.file_path(2)), "next\n");
  }

  #[test]
  fn test_drop_flushes_pending_lines() {
    let dir = tempfile::tempdir().unwrap();
    let config = DiskLogConfig::new(dir.path());
    {
      let disk = DiskLogStrategy::with_config(config.clone()).unwrap();
      for i in 0..100 {
        disk.log(INFO, "APP", &format!("line {}", i));
      }
    }

    let content = read(config.file_path(0));
    assert_eq!(content.lines().count(), 100);
    assert!(content.ends_with("line 99\n"));
  }

  #[test]
  fn test_concurrent_producers_lose_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = DiskLogConfig::new(dir.path());
    config.queue_capacity = 4;
    let disk = Arc::new(DiskLogStrategy::with_config(config.clone()).unwrap());

    let handles: Vec<_> = (0..4)
      .map(|t| {
        let disk = Arc::clone(&disk);
        thread::spawn(move || {
          for i in 0..50 {
            disk.log(INFO, "APP", &format!("t{}-{}", t, i));
          }
        })
      })
      .collect();
    for handle in handles {
      handle.join().unwrap();
    }
    disk.flush();

    assert_eq!(read(config.file_path(0)).lines().count(), 200);
  }
}
