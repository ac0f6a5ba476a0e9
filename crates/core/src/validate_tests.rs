// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    issue = { "issue", CardType::Issue },
    task = { "task", CardType::Task },
    bug = { "bug", CardType::Bug },
)]
fn card_type_segment_valid(raw: &str, expected: CardType) {
    assert_eq!(validate_card_type(raw).unwrap(), expected);
}

#[parameterized(
    bogus = { "bogustype" },
    upper = { "Issue" },
    empty = { "" },
)]
fn card_type_segment_invalid(raw: &str) {
    assert!(matches!(
        validate_card_type(raw),
        Err(Error::InvalidCardType(_))
    ));
}

#[parameterized(
    integer = { "42", Some(42) },
    zero = { "0", Some(0) },
    negative = { "-3", Some(-3) },
    padded = { " 7 ", Some(7) },
    float_integral = { "5.0", Some(5) },
    exponent = { "1e2", Some(100) },
    fractional = { "1.5", None },
    huge = { "1e300", None },
)]
fn id_segment_valid(raw: &str, row_id: Option<i64>) {
    let id = validate_id(raw).unwrap();
    assert_eq!(id.as_str(), raw);
    assert_eq!(id.row_id(), row_id);
}

#[parameterized(
    word = { "abc" },
    mixed = { "12abc" },
    empty = { "" },
    blank = { "  " },
    nan = { "NaN" },
    infinity = { "inf" },
    hex = { "0x1A" },
    binary = { "0b1" },
    octal = { "0o7" },
)]
fn id_segment_invalid(raw: &str) {
    let err = validate_id(raw).unwrap_err();
    assert!(matches!(err, Error::InvalidId(_)));
    assert_eq!(err.to_string(), "Invalid id");
}

#[test]
fn card_id_from_row_id() {
    let id = CardId::from(17);
    assert_eq!(id.as_str(), "17");
    assert_eq!(id.row_id(), Some(17));
}

#[test]
fn parse_full_payload() {
    let req = CreateCard::from_json(
        r#"{"type": "task", "title": "T", "category": "test", "description": "D"}"#,
    )
    .unwrap();
    assert_eq!(req.card_type().unwrap(), CardType::Task);
    assert_eq!(req.field(Field::Title), Some("T"));
    assert_eq!(req.field(Field::Category), Some("test"));
    assert_eq!(req.field(Field::Description), Some("D"));
}

#[test]
fn parse_strips_unknown_properties() {
    let req = CreateCard::from_json(r#"{"type": "bug", "description": "D", "id": 99}"#).unwrap();
    assert_eq!(req.card_type().unwrap(), CardType::Bug);
    assert_eq!(req.title, None);
}

#[test]
fn parse_treats_null_as_absent() {
    let req = CreateCard::from_json(r#"{"type": "issue", "title": null}"#).unwrap();
    assert_eq!(req.title, None);
}

#[parameterized(
    not_json = { "{not json" },
    array = { "[]" },
    string = { r#""issue""# },
    numeric_title = { r#"{"type": "issue", "title": 5}"# },
    object_type = { r#"{"type": {"name": "issue"}}"# },
)]
fn parse_rejects_malformed_body(body: &str) {
    let err = CreateCard::from_json(body).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[parameterized(
    issue = { r#"{"type": "issue", "title": "T", "description": "D", "category": "bogus"}"# },
    task = { r#"{"type": "task", "title": "T", "category": "bogus"}"# },
    bug = { r#"{"type": "bug", "description": "D", "category": "bogus"}"# },
    empty = { r#"{"type": "issue", "title": "T", "description": "D", "category": ""}"# },
    wrong_case = { r#"{"type": "task", "title": "T", "category": "Test"}"# },
)]
fn unknown_category_rejected_for_any_type(body: &str) {
    let err = CreateCard::from_json(body).unwrap_err();
    assert!(matches!(err, Error::InvalidCategory(_)));
    assert_eq!(err.to_string(), "Invalid category");
}

#[test]
fn known_category_accepted_on_issue() {
    let req = CreateCard::from_json(
        r#"{"type": "issue", "title": "T", "description": "D", "category": "research"}"#,
    )
    .unwrap();
    assert_eq!(req.category, Some(Category::Research));
}

#[test]
fn non_string_field_names_the_property() {
    let err = CreateCard::from_json(r#"{"type": "task", "category": true}"#).unwrap_err();
    assert_eq!(err.to_string(), "category must be a string");
}

#[parameterized(
    missing = { r#"{"title": "T"}"# },
    unknown = { r#"{"type": "epic"}"# },
    wrong_case = { r#"{"type": "ISSUE"}"# },
)]
fn payload_type_invalid(body: &str) {
    let req = CreateCard::from_json(body).unwrap();
    assert!(matches!(req.card_type(), Err(Error::InvalidCardType(_))));
}

#[parameterized(
    issue_complete = { CardType::Issue, r#"{"title": "T", "description": "D"}"#, true },
    issue_no_description = { CardType::Issue, r#"{"title": "T"}"#, false },
    issue_empty_title = { CardType::Issue, r#"{"title": "", "description": "D"}"#, false },
    task_complete = { CardType::Task, r#"{"title": "T", "category": "test"}"#, true },
    task_no_category = { CardType::Task, r#"{"title": "T", "description": "D"}"#, false },
    bug_complete = { CardType::Bug, r#"{"description": "D"}"#, true },
    bug_title_only = { CardType::Bug, r#"{"title": "T"}"#, false },
)]
fn required_fields(card_type: CardType, body: &str, ok: bool) {
    let req = CreateCard::from_json(body).unwrap();
    assert_eq!(req.check_required(card_type).is_ok(), ok);
}

#[test]
fn missing_fields_message_per_type() {
    let req = CreateCard::default();
    for (card_type, message) in [
        (CardType::Issue, "Title and description are required"),
        (CardType::Task, "Title and category are required"),
        (CardType::Bug, "Description is required"),
    ] {
        assert_eq!(
            req.check_required(card_type).unwrap_err().to_string(),
            message
        );
    }
}
