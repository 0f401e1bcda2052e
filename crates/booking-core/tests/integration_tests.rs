//! Integration tests for booking-core.

use std::sync::Arc;
use std::thread;

use booking_core::prelude::*;
use booking_core::domain::messages;

struct PinnedClock(CalendarDate);

impl Clock for PinnedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

fn today() -> CalendarDate {
    CalendarDate::from_ymd(2026, 10, 14).unwrap()
}

fn planning_date(days: i64) -> String {
    today().plus_days(days).unwrap().to_string()
}

fn service() -> BookingService {
    let rules = ValidationRules::new(
        ["Москва", "Санкт-Петербург", "Казань", "Новосибирск"],
        DEFAULT_MIN_LEAD_DAYS,
    )
    .unwrap();
    BookingService::new(rules, Box::new(PinnedClock(today())))
}

fn request(city: &str, date: &str, name: &str, phone: &str, agreed: bool) -> BookingRequest {
    BookingRequest::builder()
        .city(city)
        .date(date)
        .name(name)
        .phone(phone)
        .agreement(agreed)
        .build()
}

fn only_error(outcome: &ValidationOutcome) -> (FieldId, ErrorKind, &'static str) {
    let errors = outcome.errors();
    assert_eq!(errors.len(), 1, "expected exactly one error, got {errors:?}");
    (errors[0].field, errors[0].kind, errors[0].message)
}

#[test]
fn end_to_end_booking_is_confirmed() {
    let date = planning_date(6);
    let outcome = service().validate(&request(
        "Санкт-Петербург",
        &date,
        "Иван Иванов-Петров",
        "+79998887766",
        true,
    ));

    assert!(outcome.is_accepted());
    assert_eq!(outcome.confirmed_date().unwrap().to_string(), date);
    assert_eq!(
        outcome.notification().unwrap(),
        format!("Встреча успешно забронирована на {date}")
    );
}

#[test]
fn unserviceable_city() {
    let outcome = service().validate(&request(
        "Минск",
        &planning_date(5),
        "Иванов Иван",
        "+79998887766",
        true,
    ));
    assert_eq!(
        only_error(&outcome),
        (FieldId::City, ErrorKind::InvalidCity, messages::INVALID_CITY)
    );
}

#[test]
fn city_in_latin_script() {
    let outcome = service().validate(&request(
        "Moscow",
        &planning_date(6),
        "Иван Иванов",
        "+79998887766",
        true,
    ));
    assert_eq!(only_error(&outcome).1, ErrorKind::InvalidCity);
}

#[test]
fn empty_city() {
    let outcome = service().validate(&request(
        "",
        &planning_date(6),
        "Иван Иванов",
        "+79998887766",
        true,
    ));
    assert_eq!(
        only_error(&outcome),
        (FieldId::City, ErrorKind::RequiredField, messages::REQUIRED_FIELD)
    );
}

#[test]
fn invalid_names() {
    for name in ["14567 1564", "Ivan Ivanov", "Иван Иванов!"] {
        let outcome = service().validate(&request(
            "Санкт-Петербург",
            &planning_date(6),
            name,
            "+79998887766",
            true,
        ));
        assert_eq!(
            only_error(&outcome),
            (FieldId::Name, ErrorKind::InvalidName, messages::INVALID_NAME),
            "name {name:?}"
        );
    }
}

#[test]
fn invalid_phones() {
    for phone in ["89998887766", "+7999888776", "+7(999)-888-77 66"] {
        let outcome = service().validate(&request(
            "Санкт-Петербург",
            &planning_date(90),
            "Иван Иванов",
            phone,
            true,
        ));
        assert_eq!(
            only_error(&outcome),
            (FieldId::Phone, ErrorKind::InvalidPhone, messages::INVALID_PHONE),
            "phone {phone:?}"
        );
    }
}

#[test]
fn empty_phone() {
    let outcome = service().validate(&request(
        "Санкт-Петербург",
        &planning_date(90),
        "Иван Иванов",
        "",
        true,
    ));
    assert_eq!(
        only_error(&outcome),
        (FieldId::Phone, ErrorKind::RequiredField, messages::REQUIRED_FIELD)
    );
}

#[test]
fn lead_time_boundary() {
    for days in [-5, 0, 1] {
        let outcome = service().validate(&request(
            "Санкт-Петербург",
            &planning_date(days),
            "Иван Иванов",
            "+79998887766",
            true,
        ));
        assert_eq!(
            only_error(&outcome),
            (FieldId::Date, ErrorKind::DateTooSoon, messages::DATE_TOO_SOON),
            "offset {days}"
        );
    }

    let outcome = service().validate(&request(
        "Санкт-Петербург",
        &planning_date(2),
        "Иван Иванов",
        "+79998887766",
        true,
    ));
    assert!(outcome.is_accepted());
}

#[test]
fn february_thirtieth_is_not_a_date() {
    let outcome = service().validate(&request(
        "Санкт-Петербург",
        "30.02.2023",
        "Иван Иванов",
        "+79998887766",
        true,
    ));
    assert_eq!(
        only_error(&outcome),
        (
            FieldId::Date,
            ErrorKind::InvalidCalendarDate,
            messages::INVALID_CALENDAR_DATE
        )
    );
}

#[test]
fn unchecked_agreement() {
    let outcome = service().validate(&request(
        "Санкт-Петербург",
        &planning_date(4),
        "Иван Иванов",
        "+79998887766",
        false,
    ));
    assert_eq!(
        only_error(&outcome),
        (FieldId::Agreement, ErrorKind::RequiredField, messages::REQUIRED_FIELD)
    );
}

#[test]
fn checked_agreement_is_accepted() {
    let date = planning_date(4);
    let outcome = service().validate(&request(
        "Санкт-Петербург",
        &date,
        "Иван Иванов",
        "+79998887766",
        true,
    ));
    assert_eq!(outcome.confirmed_date().map(|d| d.to_string()), Some(date));
}

#[test]
fn outcome_union_is_total_and_exclusive() {
    let inputs = [
        request("Москва", &planning_date(3), "Иван", "+79998887766", true),
        request("Минск", &planning_date(3), "Иван", "+79998887766", true),
        request("", "", "", "", false),
        request("Казань", "31.11.2026", "Ivan", "+7", false),
    ];

    for input in &inputs {
        let outcome = service().validate(input);
        match &outcome {
            ValidationOutcome::Accepted { .. } => assert!(outcome.errors().is_empty()),
            ValidationOutcome::Rejected { errors } => {
                assert!(!errors.is_empty());
                let mut fields: Vec<FieldId> = errors.iter().map(|e| e.field).collect();
                fields.dedup();
                assert_eq!(fields.len(), errors.len(), "duplicate field in {errors:?}");
            }
        }
    }
}

#[test]
fn validation_is_idempotent() {
    let service = service();
    let input = request("Казань", "30.02.2030", "Иван!", "+79998887766", true);
    assert_eq!(service.validate(&input), service.validate(&input));
}

#[test]
fn concurrent_validations_share_one_service() {
    let service = Arc::new(service());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let date = planning_date(2 + i);
                let outcome = service.validate(&request(
                    "Новосибирск",
                    &date,
                    "Анна Петрова",
                    "+79012345678",
                    true,
                ));
                (date, outcome)
            })
        })
        .collect();

    for handle in handles {
        let (date, outcome) = handle.join().unwrap();
        assert_eq!(outcome.confirmed_date().map(|d| d.to_string()), Some(date));
    }
}
