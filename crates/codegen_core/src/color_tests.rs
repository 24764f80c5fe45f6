//! Tests for colour parsing

use super::*;

#[test]
fn test_named_colors() {
    assert_eq!(parse_color("black").unwrap(), Rgba([0, 0, 0, 255]));
    assert_eq!(parse_color("white").unwrap(), Rgba([255, 255, 255, 255]));
    assert_eq!(parse_color("red").unwrap(), Rgba([255, 0, 0, 255]));
}

#[test]
fn test_named_colors_ignore_case_and_whitespace() {
    assert_eq!(parse_color("  Navy ").unwrap(), Rgba([0, 0, 128, 255]));
}

#[test]
fn test_hex_colors() {
    assert_eq!(parse_color("#ff8800").unwrap(), Rgba([255, 136, 0, 255]));
    assert_eq!(parse_color("#0f0").unwrap(), Rgba([0, 255, 0, 255]));
}

#[test]
fn test_hex_color_with_alpha() {
    assert_eq!(parse_color("#00000080").unwrap(), Rgba([0, 0, 0, 128]));
}

#[test]
fn test_functional_notation() {
    assert_eq!(
        parse_color("rgb(10, 20, 30)").unwrap(),
        Rgba([10, 20, 30, 255])
    );
}

#[test]
fn test_unknown_color_is_rejected() {
    let err = parse_color("not-a-color").unwrap_err();

    match err {
        GenerationError::UnsupportedColor { value, reason } => {
            assert_eq!(value, "not-a-color");
            assert!(!reason.is_empty());
        }
        other => panic!("Expected UnsupportedColor, got {other:?}"),
    }
}

#[test]
fn test_malformed_hex_is_rejected() {
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("#gggggg").is_err());
}
