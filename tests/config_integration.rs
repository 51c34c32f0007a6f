mod common;

use common::test_utils::create_temp_file;
use flowlines::{annotate_listing, ArrowConfig, FlowlinesError, GlyphSet, SelfLoopPolicy};

const LOOP: &str = "\
0000000000001000 <spin>:
    1000:\teb fe\tjmp    1000 <spin>
    1002:\t75 fc\tjne    1000 <spin>
";

#[test]
fn test_arrow_config_defaults() {
    let config = ArrowConfig::default();

    assert_eq!(config.glyphs, GlyphSet::default());
    assert_eq!(config.glyphs.corner_down, '┌');
    assert_eq!(config.glyphs.corner_up, '└');
    assert_eq!(config.glyphs.exit_marker, '<');
    assert_eq!(config.glyphs.entry_marker, '>');
    assert_eq!(config.glyphs.blank, ' ');
    assert_eq!(config.self_loops, SelfLoopPolicy::Marker);
    assert!(!config.parallel);
}

#[test]
fn test_empty_json_is_default() {
    let config = ArrowConfig::from_json_str("{}").expect("empty object");
    assert_eq!(config, ArrowConfig::default());
}

#[test]
fn test_config_from_file() {
    let file = create_temp_file(
        br#"{
            "glyphs": { "vertical": "|", "corner_down": ".", "corner_up": "'" },
            "self_loops": "drop",
            "jump_prefixes": ["j", "b"]
        }"#,
    );
    let config = ArrowConfig::from_path(file.path()).expect("load config");

    assert_eq!(config.glyphs.vertical, '|');
    assert_eq!(config.glyphs.exit_marker, '<');
    assert_eq!(config.self_loops, SelfLoopPolicy::Drop);
    assert!(config.is_jump_mnemonic("bne"));
}

#[test]
fn test_config_changes_output() {
    let unicode = annotate_listing(LOOP, &ArrowConfig::default());
    let ascii = annotate_listing(LOOP, &ArrowConfig::ascii());
    let lines: Vec<&str> = ascii.lines().collect();

    assert!(unicode.contains('┌'));
    assert!(!ascii.contains('┌'));
    assert!(lines[1].starts_with("'.>"));
    assert!(lines[2].starts_with(" '<"));

    let dropped = ArrowConfig {
        self_loops: SelfLoopPolicy::Drop,
        ..ArrowConfig::ascii()
    };
    let out = annotate_listing(LOOP, &dropped);
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[1].starts_with(".>"));
    assert!(lines[2].starts_with("'<"));
}

#[test]
fn test_missing_config_file() {
    let err = ArrowConfig::from_path("/nonexistent/flowlines.json").unwrap_err();
    assert!(matches!(err, FlowlinesError::Io(_)));
}

#[test]
fn test_malformed_config() {
    let err = ArrowConfig::from_json_str("{ glyphs: ").unwrap_err();
    assert!(matches!(err, FlowlinesError::Serialization(_)));

    let err = ArrowConfig::from_json_str(r#"{"self_loops":"sometimes"}"#).unwrap_err();
    assert!(matches!(err, FlowlinesError::Serialization(_)));
}
