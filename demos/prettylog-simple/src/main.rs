mod example_custom_strategy;
mod example_disk_logging;
mod example_simple;
mod example_tracing_bridge;

use crate::{
  example_custom_strategy::example_custom_strategy, example_disk_logging::example_disk_logging,
  example_simple::example_simple, example_tracing_bridge::example_tracing_bridge,
};

fn main() {
  println!("prettylog examples");
  println!("==================");

  example_simple();
  example_custom_strategy();
  example_tracing_bridge();

  if let Err(e) = example_disk_logging() {
    eprintln!("disk example failed: {}", e);
  }

  prettylog::logger::flush();
}
