#[cfg(test)]
mod __test__ {
  use std::sync::Arc;

  use crate::call_site::CallSite;
  use crate::error::LogError;
  use crate::event::LogEvent;
  use crate::format_strategy::FormatStrategy;
  use crate::level::{DEBUG, INFO, WARN};
  use crate::log_strategy::CapturingLogStrategy;
  use crate::pretty::{
    bottom_border, chunk_message, middle_border, top_border, PrettyFormatConfig,
    PrettyFormatStrategy, DEFAULT_CHUNK_SIZE, DEFAULT_TAG, MIN_CHUNK_SIZE,
  };

  const SITE: CallSite = CallSite {
    module_path: "my_app::net::client",
    function: Some("send"),
    file: "src/net/client.rs",
    line: 42,
  };
  const HEADER: &str = "│ client.send  (client.rs:42)";

  fn event(message: &str) -> LogEvent<'_> {
    LogEvent::new(INFO, message).with_call_site(SITE)
  }

  fn quiet() -> (PrettyFormatStrategy, Arc<CapturingLogStrategy>) {
    let sink = CapturingLogStrategy::new();
    let pretty = PrettyFormatStrategy::builder()
      .show_thread_info(false)
      .log_strategy(sink.clone())
      .build();
    (pretty, sink)
  }

  #[test]
  fn test_borders_have_fixed_width() {
    assert_eq!(top_border().chars().count(), 113);
    assert!(top_border().starts_with('┌'));
    assert!(bottom_border().starts_with('└'));
    assert!(middle_border().starts_with('├'));
    assert!(middle_border().chars().skip(1).all(|c| c == '┄'));
  }

  #[test]
  fn test_builder_defaults() {
    let pretty = PrettyFormatStrategy::builder().build();
    assert_eq!(pretty.config(), &PrettyFormatConfig::default());
    assert_eq!(pretty.config().tag, DEFAULT_TAG);
    assert!(pretty.config().show_thread_info);
    assert_eq!(pretty.config().chunk_size, DEFAULT_CHUNK_SIZE);
  }

  #[test]
  fn test_builder_defaults_empty_tag_and_zero_chunk() {
    let pretty = PrettyFormatStrategy::builder()
      .tag("")
      .chunk_size(0)
      .build();
    assert_eq!(pretty.config().tag, DEFAULT_TAG);
    assert_eq!(pretty.config().chunk_size, DEFAULT_CHUNK_SIZE);

    let tiny = PrettyFormatStrategy::builder().chunk_size(1).build();
    assert_eq!(tiny.config().chunk_size, MIN_CHUNK_SIZE);
  }

  #[test]
  fn test_builder_from_json_config() {
    let config: PrettyFormatConfig =
      serde_json::from_str(r#"{"tag":"APP","show_thread_info":false}"#).unwrap();
    let pretty = PrettyFormatStrategy::builder().config(config).build();

    assert_eq!(pretty.config().tag, "APP");
    assert!(!pretty.config().show_thread_info);
    assert_eq!(pretty.config().chunk_size, DEFAULT_CHUNK_SIZE);
  }

  #[test]
  fn test_hello_with_default_configuration() {
    let sink = CapturingLogStrategy::new();
    let pretty = PrettyFormatStrategy::builder()
      .log_strategy(sink.clone())
      .build();

    let name = "pretty-hello".to_string();
    let texts = std::thread::Builder::new()
      .name(name)
      .spawn(move || {
        pretty.log(&event("hello")).unwrap();
        sink.texts()
      })
      .unwrap()
      .join()
      .unwrap();

    assert_eq!(
      texts,
      vec![
        top_border(),
        "│ Thread: pretty-hello".to_string(),
        middle_border(),
        HEADER.to_string(),
        "│ hello".to_string(),
        bottom_border(),
      ]
    );
  }

  #[test]
  fn test_hello_without_thread_info() {
    let (pretty, sink) = quiet();
    pretty.log(&event("hello")).unwrap();

    assert_eq!(
      sink.texts(),
      vec![top_border(), HEADER.to_string(), "│ hello".to_string(), bottom_border()]
    );
  }

  #[test]
  fn test_every_line_carries_priority_and_tag() {
    let sink = CapturingLogStrategy::new();
    let pretty = PrettyFormatStrategy::builder()
      .tag("APP")
      .log_strategy(sink.clone())
      .build();

    let ev = LogEvent::new(WARN, "careful")
      .with_tag(Some("NET"))
      .with_call_site(SITE);
    pretty.log(&ev).unwrap();

    let lines = sink.lines();
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|l| l.priority == WARN && l.tag == "APP-NET"));
  }

  #[test]
  fn test_per_call_tag_equal_to_base_is_not_repeated() {
    let pretty = PrettyFormatStrategy::builder().tag("APP").build();
    let ev = LogEvent::new(DEBUG, "x")
      .with_tag(Some("APP"))
      .with_call_site(SITE);
    let lines = pretty.render(&ev).unwrap();
    assert!(lines.iter().all(|l| l.tag == "APP"));
  }

  #[test]
  fn test_thread_line_directly_after_top_border() {
    let pretty = PrettyFormatStrategy::builder().build();
    let lines = pretty.render(&event("x")).unwrap();

    assert_eq!(lines[0].text, top_border());
    assert!(lines[1].text.starts_with("│ Thread: "));
    assert_eq!(lines[2].text, middle_border());
    assert_eq!(lines[3].text, HEADER);
  }

  #[test]
  fn test_multiline_message_is_framed_per_line() {
    let (pretty, sink) = quiet();
    pretty.log(&event("one\ntwo\r\n\nfour\n")).unwrap();

    let texts = sink.texts();
    assert_eq!(
      &texts[2..texts.len() - 1],
      &["│ one", "│ two", "│ ", "│ four"]
    );
  }

  #[test]
  fn test_empty_message_renders_one_content_line() {
    let (pretty, sink) = quiet();
    pretty.log(&event("")).unwrap();
    assert_eq!(sink.texts()[2], "│ ");
    assert_eq!(sink.texts().len(), 4);
  }

  #[test]
  fn test_header_without_function() {
    let (pretty, sink) = quiet();
    let site = CallSite::new("my_app::db", None, "src/db.rs", 9);
    pretty
      .log(&LogEvent::new(INFO, "x").with_call_site(site))
      .unwrap();
    assert_eq!(sink.texts()[1], "│ db  (db.rs:9)");
  }

  #[test]
  fn test_missing_call_site_fails_without_output() {
    let (pretty, sink) = quiet();
    let result = pretty.log(&LogEvent::new(INFO, "who called me?").with_tag(Some("NET")));

    match result {
      Err(LogError::UnresolvedCallSite { tag }) => assert_eq!(tag, "PRETTY_LOGGER-NET"),
      other => panic!("expected UnresolvedCallSite, got {:?}", other),
    }
    assert!(sink.lines().is_empty());
  }

  #[test]
  fn test_message_at_chunk_size_is_one_block() {
    let (pretty, sink) = quiet();
    let message = "a".repeat(DEFAULT_CHUNK_SIZE);
    pretty.log(&event(&message)).unwrap();

    let texts = sink.texts();
    assert_eq!(texts.len(), 4);
    assert_eq!(texts.iter().filter(|t| **t == top_border()).count(), 1);
    assert_eq!(texts.iter().filter(|t| **t == bottom_border()).count(), 1);
  }

  #[test]
  fn test_long_message_is_chunked_inside_one_frame() {
    let (pretty, sink) = quiet();
    let message = "b".repeat(DEFAULT_CHUNK_SIZE * 2 + 10);
    pretty.log(&event(&message)).unwrap();

    let texts = sink.texts();
    assert_eq!(texts.len(), 2 + 3 + 1);
    assert_eq!(texts[2].len(), "│ ".len() + DEFAULT_CHUNK_SIZE);
    assert_eq!(texts[4].len(), "│ ".len() + 10);
    assert_eq!(texts.iter().filter(|t| **t == top_border()).count(), 1);
    assert_eq!(texts.last().unwrap(), &bottom_border());
  }

  #[test]
  fn test_chunk_message_small_and_empty() {
    assert_eq!(chunk_message("hello", 4000), vec!["hello"]);
    assert_eq!(chunk_message("", 4000), vec![""]);
  }

  #[test]
  fn test_chunk_message_never_splits_a_character() {
    // 'é' is 2 bytes, '€' is 3 bytes, '𝄞' is 4 bytes
    let sample = "aé€𝄞 line\nnext é€𝄞";
    let message = sample.repeat(300);

    for chunk_size in [4, 5, 6, 7, 13, 64, 1000, 4000] {
      let chunks = chunk_message(&message, chunk_size);
      assert!(chunks.len() > 1, "chunk size {}", chunk_size);
      assert!(chunks.iter().all(|c| c.len() <= chunk_size && !c.is_empty()));
      assert_eq!(chunks.concat().as_bytes(), message.as_bytes());
    }
  }

  #[test]
  fn test_chunk_message_backs_off_to_boundary() {
    // 3999 ASCII bytes then a 3-byte char straddling the 4000 boundary
    let message = format!("{}€tail", "x".repeat(3999));
    let chunks = chunk_message(&message, 4000);

    assert_eq!(chunks[0].len(), 3999);
    assert!(chunks[1].starts_with('€'));
    assert_eq!(chunks.concat(), message);
  }

  #[test]
  fn test_chunk_message_clamps_tiny_chunk_size() {
    let chunks = chunk_message("𝄞𝄞", 1);
    assert_eq!(chunks, vec!["𝄞", "𝄞"]);
  }
}
