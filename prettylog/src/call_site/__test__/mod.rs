#[cfg(test)]
mod __test__ {
  use crate::call_site::{enclosing_function, CallSite};

  #[test]
  fn test_call_site_macro_resolves_enclosing_function() {
    let site = crate::call_site!();
    assert_eq!(site.function, Some("test_call_site_macro_resolves_enclosing_function"));
    assert_eq!(site.module_path, module_path!());
    assert_eq!(site.file, file!());
    assert!(site.line > 0);
  }

  #[test]
  fn test_call_site_macro_inside_closure() {
    let capture = || crate::call_site!();
    let site = capture();
    assert_eq!(site.function, Some("test_call_site_macro_inside_closure"));
  }

  #[test]
  fn test_call_site_lines_differ_per_expansion() {
    let first = crate::call_site!();
    let second = crate::call_site!();
    assert_eq!(second.line, first.line + 1);
  }

  #[test]
  fn test_enclosing_function_strips_closures() {
    assert_eq!(
      enclosing_function("app::net::connect::{{closure}}::{{closure}}::probe", "probe"),
      Some("connect")
    );
    assert_eq!(enclosing_function("app::main::probe", "probe"), Some("main"));
  }

  #[test]
  fn test_enclosing_function_rejects_foreign_probe() {
    assert_eq!(enclosing_function("app::main::other", "probe"), None);
    assert_eq!(enclosing_function("probe", "probe"), None);
  }

  #[test]
  fn test_simple_name_and_file_name() {
    let site = CallSite::new("my_app::net::client", Some("send"), "src/net/client.rs", 42);
    assert_eq!(site.simple_name(), "client");
    assert_eq!(site.file_name(), "client.rs");

    let root = CallSite::new("my_app", None, "main.rs", 1);
    assert_eq!(root.simple_name(), "my_app");
    assert_eq!(root.file_name(), "main.rs");
  }

  #[test]
  fn test_display_with_and_without_function() {
    let site = CallSite::new("my_app::net::client", Some("send"), "src/net/client.rs", 42);
    assert_eq!(site.to_string(), "client.send  (client.rs:42)");

    let site = CallSite::new("my_app::net::client", None, "src/net/client.rs", 42);
    assert_eq!(site.to_string(), "client  (client.rs:42)");
  }
}
