use oncoscan_core::error::{RequiredField, ValidationError};
use oncoscan_core::models::case::{CaseDraft, CaseField, Gender};
use oncoscan_core::models::image::CaseImage;

fn complete_draft() -> CaseDraft {
    let mut draft = CaseDraft::default();
    draft.set(CaseField::Name, "Jane Roe");
    draft.set(CaseField::Age, "42");
    draft.set(CaseField::Gender, "Female");
    draft.set(CaseField::Email, "jane@example.com");
    draft.set(CaseField::Number, "555-0100");
    draft.image = Some(CaseImage::new("scan.png", vec![1, 2, 3]).unwrap());
    draft
}

#[test]
fn empty_draft_reports_every_field_in_form_order() {
    let err = CaseDraft::default().validate().unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingFields {
            fields: RequiredField::ALL.to_vec()
        }
    );
}

#[test]
fn each_missing_text_field_is_reported_alone() {
    for field in [
        CaseField::Name,
        CaseField::Age,
        CaseField::Gender,
        CaseField::Email,
        CaseField::Number,
    ] {
        let mut draft = complete_draft();
        draft.set(field, "");
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: vec![field.into()]
            },
            "field {field}"
        );
    }
}

#[test]
fn missing_image_is_reported() {
    let mut draft = complete_draft();
    draft.image = None;
    assert_eq!(draft.missing_fields(), vec![RequiredField::Image]);
}

#[test]
fn whitespace_only_counts_as_missing() {
    let mut draft = complete_draft();
    draft.set(CaseField::Email, "   ");
    assert_eq!(draft.missing_fields(), vec![RequiredField::Email]);
}

#[test]
fn set_leaves_other_fields_untouched() {
    let mut draft = complete_draft();
    draft.set(CaseField::Age, "43");
    assert_eq!(draft.get(CaseField::Age), "43");
    assert_eq!(draft.get(CaseField::Name), "Jane Roe");
    assert_eq!(draft.get(CaseField::Number), "555-0100");
    assert!(draft.image.is_some());
}

#[test]
fn complete_draft_validates_into_submission() {
    let submission = complete_draft().validate().unwrap();
    assert_eq!(submission.gender, Gender::Female);
    assert_eq!(submission.image.file_name(), "scan.png");

    let keys: Vec<_> = submission.text_fields().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, ["name", "age", "gender", "email", "number"]);
    assert_eq!(submission.text_fields()[2].1, "Female");
}

#[test]
fn unknown_gender_is_rejected_with_fill_all_message() {
    let mut draft = complete_draft();
    draft.set(CaseField::Gender, "Other");
    let err = draft.validate().unwrap_err();
    assert_eq!(err, ValidationError::InvalidGender("Other".to_string()));
    assert_eq!(err.user_message(), "Please fill in all fields");
}

#[test]
fn case_field_parses_form_control_names() {
    assert_eq!("number".parse::<CaseField>().unwrap(), CaseField::Number);
    assert_eq!("phoneNumber".parse::<CaseField>().unwrap(), CaseField::Number);
    assert_eq!("email".parse::<CaseField>().unwrap(), CaseField::Email);
    assert_eq!(
        "image".parse::<CaseField>(),
        Err(ValidationError::UnknownField("image".to_string()))
    );
}
