//! Tests for crate-level limits and helpers

use super::*;

#[test]
fn test_default_limits() {
    assert_eq!(Limits::default().max_data_length, DEFAULT_MAX_DATA_LENGTH);
}

#[test]
fn test_check_data_accepts_payload_at_limit() {
    assert!(check_data("abcd", &Limits::new(4)).is_ok());
}

#[test]
fn test_check_data_counts_bytes_not_chars() {
    // "é" is two bytes in UTF-8
    let err = check_data("éé", &Limits::new(3)).unwrap_err();

    assert!(matches!(
        err,
        GenerationError::DataTooLong { actual: 4, max: 3 }
    ));
}

#[test]
fn test_check_data_rejects_empty() {
    assert!(matches!(
        check_data("", &Limits::default()),
        Err(GenerationError::EmptyData)
    ));
}

#[test]
fn test_check_dimensions_side_limit() {
    assert_eq!(
        check_dimensions(MAX_IMAGE_SIDE, 100).unwrap(),
        (MAX_IMAGE_SIDE as u32, 100)
    );
    assert!(check_dimensions(MAX_IMAGE_SIDE + 1, 1).is_err());
    assert!(check_dimensions(1, MAX_IMAGE_SIDE + 1).is_err());
}

/// Both sides under the cap can still exceed the pixel budget
#[test]
fn test_check_dimensions_pixel_limit() {
    assert!(check_dimensions(4096, 4096).is_ok());

    let err = check_dimensions(15_300, 15_300).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::ImageTooLarge {
            width: 15_300,
            height: 15_300
        }
    ));
}
