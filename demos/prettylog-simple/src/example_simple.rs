use std::io;

use prettylog::logger;

/// Example 1: console output with default settings
pub fn example_simple() {
  println!("=== Example 1: Pretty console logging ===");

  logger::clear_adapters();
  logger::init_pretty();

  prettylog::debug!("debug information");
  prettylog::info!("application started on port {}", 8080);
  prettylog::warn!(tag: "NET", "upstream slow: {}ms", 950);

  let err = io::Error::new(io::ErrorKind::NotFound, "config.toml is missing");
  prettylog::error!(err: &err, "could not load configuration");

  prettylog::info!("first line\nsecond line\nthird line");
  prettylog::json!(r#"{"user":"duck","roles":["admin","ops"],"active":true}"#);
  prettylog::wtf!("this should never happen");
}
