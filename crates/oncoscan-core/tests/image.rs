use oncoscan_core::error::ValidationError;
use oncoscan_core::models::image::{CaseImage, is_supported_image};
use oncoscan_core::models::prediction::PredictionResponse;

#[test]
fn accepts_supported_extensions_in_any_case() {
    for name in ["a.jpg", "b.JPG", "c.jpeg", "d.JpEg", "e.png", "f.PNG", "x-ray.v2.png"] {
        assert!(is_supported_image(name), "{name}");
    }
}

#[test]
fn rejects_other_extensions() {
    for name in ["scan.gif", "scan.bmp", "scan.png.exe", "scan", "png", "scan.jpg ", ""] {
        assert!(!is_supported_image(name), "{name:?}");
    }
}

#[test]
fn content_type_follows_extension() {
    let jpeg = CaseImage::new("SCAN.JPEG", vec![0xff, 0xd8]).unwrap();
    assert_eq!(jpeg.content_type(), "image/jpeg");
    let png = CaseImage::new("scan.png", vec![0x89]).unwrap();
    assert_eq!(png.content_type(), "image/png");
}

#[test]
fn unsupported_image_carries_file_name() {
    let err = CaseImage::new("notes.pdf", vec![]).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnsupportedImage {
            file_name: "notes.pdf".to_string()
        }
    );
    assert_eq!(err.user_message(), "Only JPG, JPEG or PNG images are allowed");
}

#[test]
fn debug_output_omits_image_bytes() {
    let image = CaseImage::new("scan.png", vec![7; 4096]).unwrap();
    let rendered = format!("{image:?}");
    assert!(rendered.contains("len: 4096"));
    assert!(!rendered.contains("7, 7"));
}

#[test]
fn response_contract_tolerates_missing_and_unknown_keys() {
    let ok = PredictionResponse::from_slice(br#"{"success":true,"result":"Benign","id":7}"#).unwrap();
    assert!(ok.success);
    assert_eq!(ok.result.as_deref(), Some("Benign"));
    assert_eq!(ok.message(), None);

    let failed = PredictionResponse::from_slice(br#"{"success":false,"message":""}"#).unwrap();
    assert!(!failed.success);
    assert_eq!(failed.message(), None);

    assert!(PredictionResponse::from_slice(b"<html>").is_err());
}
