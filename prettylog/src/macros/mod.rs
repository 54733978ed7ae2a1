//! Logging macros over the global [`crate::logger`].
//!
//! Every macro captures its [`crate::call_site::CallSite`], formats its
//! arguments with `format!` and evaluates to `()`.
//!
//! ```rust,ignore
//! prettylog::info!("listening on {}", addr);
//! prettylog::warn!(tag: "NET", "retrying in {}ms", delay);
//! prettylog::error!(err: &e, "request {} failed", id);
//! prettylog::error!(tag: "DB", err: &e, "rollback");
//! prettylog::log!(prettylog::level::INFO, "raw priority");
//! prettylog::json!(tag: "API", body);
//! ```

/// Log at an explicit priority.
#[macro_export]
macro_rules! log {
  ($priority:expr, tag: $tag:expr, err: $err:expr, $($arg:tt)+) => {
    $crate::logger::log(
      $priority,
      ::std::option::Option::Some($tag),
      &::std::format!($($arg)+),
      ::std::option::Option::Some($err as &(dyn ::std::error::Error + 'static)),
      $crate::call_site!(),
    )
  };
  ($priority:expr, err: $err:expr, $($arg:tt)+) => {
    $crate::logger::log(
      $priority,
      ::std::option::Option::None,
      &::std::format!($($arg)+),
      ::std::option::Option::Some($err as &(dyn ::std::error::Error + 'static)),
      $crate::call_site!(),
    )
  };
  ($priority:expr, tag: $tag:expr, $($arg:tt)+) => {
    $crate::logger::log(
      $priority,
      ::std::option::Option::Some($tag),
      &::std::format!($($arg)+),
      ::std::option::Option::None,
      $crate::call_site!(),
    )
  };
  ($priority:expr, $($arg:tt)+) => {
    $crate::logger::log(
      $priority,
      ::std::option::Option::None,
      &::std::format!($($arg)+),
      ::std::option::Option::None,
      $crate::call_site!(),
    )
  };
}

#[macro_export]
macro_rules! verbose {
  ($($arg:tt)+) => { $crate::log!($crate::level::VERBOSE, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
  ($($arg:tt)+) => { $crate::log!($crate::level::DEBUG, $($arg)+) };
}

#[macro_export]
macro_rules! info {
  ($($arg:tt)+) => { $crate::log!($crate::level::INFO, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
  ($($arg:tt)+) => { $crate::log!($crate::level::WARN, $($arg)+) };
}

#[macro_export]
macro_rules! error {
  ($($arg:tt)+) => { $crate::log!($crate::level::ERROR, $($arg)+) };
}

/// What a terrible failure: log at ASSERT.
#[macro_export]
macro_rules! wtf {
  ($($arg:tt)+) => { $crate::log!($crate::level::ASSERT, $($arg)+) };
}

/// Pretty-print a JSON document at DEBUG.
#[macro_export]
macro_rules! json {
  (tag: $tag:expr, $json:expr) => {
    $crate::logger::json(
      ::std::option::Option::Some($tag),
      ::std::convert::AsRef::<str>::as_ref(&$json),
      $crate::call_site!(),
    )
  };
  ($json:expr) => {
    $crate::logger::json(
      ::std::option::Option::None,
      ::std::convert::AsRef::<str>::as_ref(&$json),
      $crate::call_site!(),
    )
  };
}
