//! Tests for linear barcode generation

use super::*;
use crate::PNG_MAGIC;

/// Sample the middle row of a rendered barcode back into modules.
fn sample_modules(img: &GrayImage, style: &BarcodeStyle) -> Vec<u8> {
    let y = img.height() / 2;
    let margin = style.quiet_zone * style.module_width;
    let count = (img.width() - 2 * margin) / style.module_width;

    (0..count)
        .map(|i| {
            let x = margin + i * style.module_width;
            u8::from(img.get_pixel(x, y).0[0] < 128)
        })
        .collect()
}

// ============================================================================
// Request Tests
// ============================================================================

#[test]
fn test_new_defaults_to_code128() {
    let request = BarcodeRequest::new("abc");

    assert_eq!(request.symbology, "code128");
}

#[test]
fn test_validate_unknown_type_is_reported_first() {
    let request = BarcodeRequest::new("").with_symbology("not-a-real-code");
    let err = request.validate(&Limits::default()).unwrap_err();

    assert!(matches!(err, GenerationError::UnknownSymbology { .. }));
}

#[test]
fn test_validate_rejects_empty_data() {
    let err = BarcodeRequest::new("")
        .validate(&Limits::default())
        .unwrap_err();

    assert!(matches!(err, GenerationError::EmptyData));
}

#[test]
fn test_validate_rejects_long_data() {
    let err = BarcodeRequest::new("12345")
        .validate(&Limits::new(4))
        .unwrap_err();

    assert_eq!(err.class(), crate::ErrorClass::Client);
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_render_modules_dimensions() {
    let style = BarcodeStyle {
        module_width: 3,
        bar_height: 20,
        quiet_zone: 2,
    };
    let img = render_modules(&[1, 0, 1, 1], &style).unwrap();

    assert_eq!(img.width(), (4 + 2 * 2) * 3);
    assert_eq!(img.height(), 20 + 2 * 2 * 3);
}

#[test]
fn test_render_modules_quiet_zone_is_blank() {
    let style = BarcodeStyle::default();
    let img = render_modules(&[1, 1, 1], &style).unwrap();

    assert!(img.get_pixel(0, img.height() / 2).0[0] == 255);
    assert!(img.get_pixel(img.width() / 2, 0).0[0] == 255);
}

#[test]
fn test_render_modules_rejects_oversized_images() {
    let style = BarcodeStyle {
        module_width: 100,
        bar_height: 10,
        quiet_zone: 0,
    };
    let modules = vec![1u8; 200];
    let err = render_modules(&modules, &style).unwrap_err();

    assert!(matches!(err, GenerationError::ImageTooLarge { .. }));
}

#[test]
fn test_rendered_bars_match_encoded_modules() {
    let style = BarcodeStyle::default();
    let modules = Symbology::Code128.encode("Hello, World!").unwrap();
    let img = render_modules(&modules, &style).unwrap();

    assert_eq!(sample_modules(&img, &style), modules);
}

#[test]
fn test_png_round_trip_preserves_bars() {
    let style = BarcodeStyle::default();
    let request = BarcodeRequest::new("590123412345").with_symbology("ean13");
    let bytes = generate_barcode_with_style(&request, &Limits::default(), &style).unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
    let expected = Symbology::Ean13.encode("590123412345").unwrap();

    assert_eq!(sample_modules(&decoded, &style), expected);
}

// ============================================================================
// Generation Tests
// ============================================================================

#[test]
fn test_generate_barcode_returns_png() {
    let bytes = generate_barcode(&BarcodeRequest::new("ABC-123"), &Limits::default()).unwrap();

    assert!(bytes.starts_with(&PNG_MAGIC));
}

#[test]
fn test_generate_barcode_invalid_payload_is_encoding_error() {
    let request = BarcodeRequest::new("not digits").with_symbology("ean13");
    let err = generate_barcode(&request, &Limits::default()).unwrap_err();

    assert_eq!(err.class(), crate::ErrorClass::Encoding);
}

#[test]
fn test_generate_barcode_is_deterministic() {
    let request = BarcodeRequest::new("idempotent");
    let first = generate_barcode(&request, &Limits::default()).unwrap();
    let second = generate_barcode(&request, &Limits::default()).unwrap();

    assert_eq!(first, second);
}
