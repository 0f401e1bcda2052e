//! User-facing message catalog.
//!
//! The presentation layer renders these strings verbatim; they are part of
//! the engine's contract and must not be reworded.

use crate::domain::value_objects::CalendarDate;

pub const REQUIRED_FIELD: &str = "Поле обязательно для заполнения";
pub const INVALID_CITY: &str = "Доставка в выбранный город недоступна";
pub const INVALID_NAME: &str =
    "Имя и Фамилия указаны неверно. Допустимы только русские буквы, пробелы и дефисы.";
pub const INVALID_PHONE: &str =
    "Телефон указан неверно. Должно быть 11 цифр, например, +79012345678.";
pub const DATE_TOO_SOON: &str = "Заказ на выбранную дату невозможен";
pub const INVALID_CALENDAR_DATE: &str = "Неверно введена дата";

/// Prefix of the success notification; the confirmed date follows it.
pub const CONFIRMATION_PREFIX: &str = "Встреча успешно забронирована на ";

/// Success notification for an accepted booking.
pub fn confirmation(date: &CalendarDate) -> String {
    format!("{CONFIRMATION_PREFIX}{date}")
}
