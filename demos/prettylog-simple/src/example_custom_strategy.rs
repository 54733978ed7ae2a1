use std::sync::Arc;

use prettylog::{
  logger, FormatAdapter, Level, LogStrategy, PrettyFormatConfig, PrettyFormatStrategy,
};

/// Writes lines to stderr with a fixed prefix
struct StderrLogStrategy {
  prefix: &'static str,
}

impl LogStrategy for StderrLogStrategy {
  fn log(&self, priority: i32, tag: &str, message: &str) {
    eprintln!("{} [{}] {}: {}", self.prefix, priority, tag, message);
  }
}

/// Example 2: config loaded from JSON, custom sink, minimum level
pub fn example_custom_strategy() {
  println!("\n=== Example 2: Custom strategy ===");

  let config: PrettyFormatConfig =
    match serde_json::from_str(r#"{"tag":"DEMO","show_thread_info":false,"chunk_size":64}"#) {
      Ok(config) => config,
      Err(e) => {
        eprintln!("bad config: {}", e);
        return;
      },
    };

  let pretty = PrettyFormatStrategy::builder()
    .config(config)
    .log_strategy(Arc::new(StderrLogStrategy { prefix: "demo" }))
    .build();

  logger::clear_adapters();
  logger::add_adapter(Arc::new(
    FormatAdapter::new(Arc::new(pretty)).with_min_level(Level::Info),
  ));

  prettylog::debug!("filtered out by the adapter");
  prettylog::info!("{}", "chunked ".repeat(20));
}
