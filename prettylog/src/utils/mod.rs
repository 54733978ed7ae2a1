
/// Name of the calling thread, or its `ThreadId(..)` form when unnamed.
pub fn current_thread_name() -> String {
  let thread = std::thread::current();
  match thread.name() {
    Some(name) => name.to_string(),
    None => format!("{:?}", thread.id()),
  }
}

/// `base-tag` when a non-empty per-call tag differs from the base tag,
/// otherwise the base tag.
pub fn format_tag(base: &str, tag: Option<&str>) -> String {
  match tag {
    Some(tag) if !tag.is_empty() && tag != base => format!("{}-{}", base, tag),
    _ => base.to_string(),
  }
}
