use prettylog::logger;

/// Example 4: CSV rows written to rolling files under /tmp/prettylog-demo
pub fn example_disk_logging() -> Result<(), Box<dyn std::error::Error>> {
  println!("\n=== Example 4: Disk logging ===");

  logger::clear_adapters();
  logger::init_disk("/tmp/prettylog-demo")?;

  for i in 0..10 {
    prettylog::info!(tag: "JOB", "processed batch {}", i);
  }
  prettylog::error!("batch 7 had\ntwo failures");

  logger::flush();
  println!("Check /tmp/prettylog-demo/logs_0.csv");
  Ok(())
}
