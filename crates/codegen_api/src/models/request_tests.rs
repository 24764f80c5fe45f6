//! Tests for request models

use super::*;

fn qr_query(box_size: i64, border: i64) -> QrQuery {
    QrQuery {
        data: "hello".to_string(),
        box_size,
        border,
        fill_color: "black".to_string(),
        back_color: "white".to_string(),
    }
}

#[test]
fn test_barcode_query_defaults_to_code128() {
    let query: BarcodeQuery = serde_json::from_value(serde_json::json!({
        "data": "ABC"
    }))
    .unwrap();

    assert_eq!(query.barcode_type, "code128");
}

#[test]
fn test_barcode_query_requires_data() {
    let result: Result<BarcodeQuery, _> = serde_json::from_value(serde_json::json!({
        "barcode_type": "ean13"
    }));

    assert!(result.is_err());
}

#[test]
fn test_barcode_query_translates_to_request() {
    let request = BarcodeRequest::from(BarcodeQuery {
        data: "590123412345".to_string(),
        barcode_type: "ean13".to_string(),
    });

    assert_eq!(request.data, "590123412345");
    assert_eq!(request.symbology, "ean13");
}

#[test]
fn test_qr_query_defaults() {
    let query: QrQuery = serde_json::from_value(serde_json::json!({
        "data": "hello"
    }))
    .unwrap();

    assert_eq!(query.box_size, 10);
    assert_eq!(query.border, 4);
    assert_eq!(query.fill_color, "black");
    assert_eq!(query.back_color, "white");
}

#[test]
fn test_qr_query_translates_to_request() {
    let request = QrRequest::try_from(qr_query(5, 0)).unwrap();

    assert_eq!(request.module_size, 5);
    assert_eq!(request.border, 0);
    assert_eq!(request.data, "hello");
}

#[test]
fn test_qr_query_rejects_box_size_out_of_range() {
    for box_size in [0, 101, -3] {
        let err = QrRequest::try_from(qr_query(box_size, 4)).unwrap_err();
        assert!(matches!(err, GenerationError::OutOfRange { .. }), "{box_size}");
    }
}

#[test]
fn test_qr_query_rejects_border_out_of_range() {
    let err = QrRequest::try_from(qr_query(10, 51)).unwrap_err();

    assert!(err.to_string().contains("'border'"));
}

#[test]
fn test_qr_query_range_checked_before_empty_data() {
    let mut query = qr_query(0, 4);
    query.data = String::new();

    let err = QrRequest::try_from(query).unwrap_err();
    assert!(matches!(err, GenerationError::OutOfRange { .. }));
}
