//! # Call Site
//!
//! Caller attribution for the pretty header.
//!
//! Instead of walking the stack at runtime and counting wrapper frames, every
//! log call carries the location it was made from. The [`call_site!`] macro
//! fills it in from `module_path!()`, `file!()` and `line!()`, and recovers the
//! enclosing function name by asking for the type name of a function item
//! declared inside it.
//!
//! ```rust,ignore
//! fn connect() {
//!   let site = prettylog::call_site!();
//!   assert_eq!(site.function, Some("connect"));
//! }
//! ```
//!
//! [`call_site!`]: crate::call_site!

mod __test__;

use std::path::Path;

/// Where a log call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
  /// Full module path, e.g. `my_app::net::client`.
  pub module_path: &'static str,
  /// Name of the enclosing function, when known.
  pub function: Option<&'static str>,
  /// Source file as reported by `file!()`.
  pub file: &'static str,
  pub line: u32,
}

impl CallSite {
  pub fn new(
    module_path: &'static str,
    function: Option<&'static str>,
    file: &'static str,
    line: u32,
  ) -> Self {
    Self {
      module_path,
      function,
      file,
      line,
    }
  }

  /// Last segment of the module path, the analogue of a simple class name.
  pub fn simple_name(&self) -> &'static str {
    match self.module_path.rfind("::") {
      Some(idx) => &self.module_path[idx + 2..],
      None => self.module_path,
    }
  }

  /// File name without its directories.
  pub fn file_name(&self) -> &'static str {
    Path::new(self.file)
      .file_name()
      .and_then(|name| name.to_str())
      .unwrap_or(self.file)
  }
}

impl std::fmt::Display for CallSite {
  /// `Simple.function  (file.rs:12)`, or `Simple  (file.rs:12)` when the
  /// function is unknown.
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self.function {
      Some(function) => write!(
        f,
        "{}.{}  ({}:{})",
        self.simple_name(),
        function,
        self.file_name(),
        self.line
      ),
      None => write!(
        f,
        "{}  ({}:{})",
        self.simple_name(),
        self.file_name(),
        self.line
      ),
    }
  }
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
  std::any::type_name::<T>()
}

/// Extracts the enclosing function from the type name of a probe function
/// declared inside it, e.g. `app::net::connect::{{closure}}::__probe` gives
/// `connect`.
#[doc(hidden)]
pub fn enclosing_function(probe_path: &'static str, probe: &str) -> Option<&'static str> {
  let mut path = probe_path
    .strip_suffix(probe)
    .and_then(|p| p.strip_suffix("::"))?;

  while let Some(stripped) = path.strip_suffix("::{{closure}}") {
    path = stripped;
  }

  let name = match path.rfind("::") {
    Some(idx) => &path[idx + 2..],
    None => path,
  };

  if name.is_empty() {
    None
  } else {
    Some(name)
  }
}

/// Captures the [`CallSite`] of the place the macro is expanded in.
#[macro_export]
macro_rules! call_site {
  () => {{
    fn __prettylog_probe() {}
    $crate::call_site::CallSite::new(
      ::std::module_path!(),
      $crate::call_site::enclosing_function(
        $crate::call_site::type_name_of(__prettylog_probe),
        "__prettylog_probe",
      ),
      ::std::file!(),
      ::std::line!(),
    )
  }};
}
