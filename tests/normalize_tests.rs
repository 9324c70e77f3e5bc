use chargelog::core::normalize::{ChargeCodeLookup, EntryPayload, normalize};
use chargelog::errors::{AppError, AppResult, ValidationError};
use chargelog::models::entry::EntryView;
use chrono::{NaiveDate, NaiveTime};

/// In-memory stand-in for the charge_codes table.
struct StubCodes {
    owned: Vec<(i64, i64)>,
}

impl ChargeCodeLookup for StubCodes {
    fn owns_charge_code(&self, user_id: i64, charge_code_id: i64) -> AppResult<bool> {
        Ok(self.owned.contains(&(user_id, charge_code_id)))
    }
}

fn codes() -> StubCodes {
    StubCodes {
        owned: vec![(1, 7), (2, 9)],
    }
}

fn existing_entry() -> EntryView {
    EntryView {
        id: 42,
        charge_code_id: 7,
        charge_code_label: "1234-001 Development".to_string(),
        entry_date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        duration_minutes: 90,
        activity_text: "Original notes".to_string(),
    }
}

fn payload(
    code: Option<&str>,
    date: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    text: Option<&str>,
) -> EntryPayload {
    EntryPayload {
        charge_code_id: code.map(String::from),
        entry_date: date.map(String::from),
        start_time: start.map(String::from),
        end_time: end.map(String::from),
        activity_text: text.map(String::from),
    }
}

fn expect_validation(result: AppResult<impl std::fmt::Debug>, expected: ValidationError) {
    match result {
        Err(AppError::Validation(v)) => assert_eq!(v, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

#[test]
fn test_full_payload_normalizes_and_recomputes_duration() {
    let p = payload(
        Some("7"),
        Some("2024-01-04"),
        Some("09:00"),
        Some("10:30"),
        Some("  Worked on parser  "),
    );
    let cleaned = normalize(1, &p, None, &codes()).unwrap();

    assert_eq!(cleaned.charge_code_id, 7);
    assert_eq!(cleaned.entry_date, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    assert_eq!(cleaned.duration_minutes, 90);
    assert_eq!(cleaned.activity_text, "Worked on parser");
}

#[test]
fn test_empty_payload_with_existing_is_pure_fallback() {
    let cleaned = normalize(1, &EntryPayload::default(), Some(&existing_entry()), &codes()).unwrap();

    let existing = existing_entry();
    assert_eq!(cleaned.charge_code_id, existing.charge_code_id);
    assert_eq!(cleaned.entry_date, existing.entry_date);
    assert_eq!(cleaned.start_time, existing.start_time);
    assert_eq!(cleaned.end_time, existing.end_time);
    assert_eq!(cleaned.activity_text, existing.activity_text);
    // recomputed, and equal to the stored value
    assert_eq!(cleaned.duration_minutes, existing.duration_minutes);
}

#[test]
fn test_blank_values_fall_back_like_absent_ones() {
    let p = payload(Some("  "), Some(""), None, Some(" "), None);
    let cleaned = normalize(1, &p, Some(&existing_entry()), &codes()).unwrap();
    assert_eq!(cleaned.charge_code_id, 7);
    assert_eq!(cleaned.start_time, existing_entry().start_time);
    assert_eq!(cleaned.end_time, existing_entry().end_time);
}

#[test]
fn test_partial_update_changes_only_supplied_fields() {
    let p = payload(None, None, None, None, Some("New notes"));
    let cleaned = normalize(1, &p, Some(&existing_entry()), &codes()).unwrap();
    assert_eq!(cleaned.activity_text, "New notes");
    assert_eq!(cleaned.charge_code_id, 7);
    assert_eq!(cleaned.duration_minutes, 90);
}

#[test]
fn test_missing_fields_without_existing() {
    let p = payload(Some("7"), Some("2024-01-04"), None, Some("10:00"), Some("x"));
    expect_validation(normalize(1, &p, None, &codes()), ValidationError::MissingFields);

    expect_validation(
        normalize(1, &EntryPayload::default(), None, &codes()),
        ValidationError::MissingFields,
    );
}

#[test]
fn test_parse_failures() {
    let bad_code = payload(Some("abc"), Some("2024-01-04"), Some("09:00"), Some("10:00"), Some("x"));
    expect_validation(
        normalize(1, &bad_code, None, &codes()),
        ValidationError::Parse("abc".to_string()),
    );

    let bad_date = payload(Some("7"), Some("04/01/2024"), Some("09:00"), Some("10:00"), Some("x"));
    expect_validation(
        normalize(1, &bad_date, None, &codes()),
        ValidationError::Parse("04/01/2024".to_string()),
    );

    let bad_time = payload(Some("7"), Some("2024-01-04"), Some("9:00"), Some("10:00"), Some("x"));
    expect_validation(
        normalize(1, &bad_time, None, &codes()),
        ValidationError::Parse("9:00".to_string()),
    );
}

#[test]
fn test_start_must_precede_end() {
    let equal = payload(Some("7"), Some("2024-01-04"), Some("10:00"), Some("10:00"), Some("x"));
    expect_validation(
        normalize(1, &equal, None, &codes()),
        ValidationError::StartNotBeforeEnd,
    );

    let reversed = payload(Some("7"), Some("2024-01-04"), Some("11:00"), Some("09:00"), Some("x"));
    expect_validation(
        normalize(1, &reversed, None, &codes()),
        ValidationError::StartNotBeforeEnd,
    );
}

#[test]
fn test_blank_activity_is_rejected() {
    let p = payload(Some("7"), Some("2024-01-04"), Some("09:00"), Some("10:00"), Some("   "));
    expect_validation(normalize(1, &p, None, &codes()), ValidationError::EmptyActivity);

    let absent = payload(Some("7"), Some("2024-01-04"), Some("09:00"), Some("10:00"), None);
    expect_validation(
        normalize(1, &absent, None, &codes()),
        ValidationError::EmptyActivity,
    );
}

#[test]
fn test_foreign_or_unknown_charge_code_is_rejected() {
    // code 9 belongs to user 2, not user 1
    let foreign = payload(Some("9"), Some("2024-01-04"), Some("09:00"), Some("10:00"), Some("x"));
    expect_validation(
        normalize(1, &foreign, None, &codes()),
        ValidationError::ChargeCodeNotOwned,
    );

    let unknown = payload(Some("99"), Some("2024-01-04"), Some("09:00"), Some("10:00"), Some("x"));
    expect_validation(
        normalize(1, &unknown, None, &codes()),
        ValidationError::ChargeCodeNotOwned,
    );
}
