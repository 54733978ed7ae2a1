use std::thread;

use prettylog::{logger, PrettyLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, Registry};

/// Example 3: tracing events rendered by prettylog
pub fn example_tracing_bridge() {
  println!("\n=== Example 3: Tracing bridge ===");

  logger::clear_adapters();
  logger::init_pretty();

  let subscriber = Registry::default().with(PrettyLayer::global());
  tracing::subscriber::with_default(subscriber, || {
    info!("served through tracing");
    warn!(tag = "DB", rows = 1200, "slow query");

    // Each thread renders its own block; lines of concurrent blocks may interleave
    let handle = thread::Builder::new()
      .name("worker-1".to_string())
      .spawn(|| prettylog::info!("hello from a named thread"));
    if let Ok(handle) = handle {
      let _ = handle.join();
    }
  });
}
