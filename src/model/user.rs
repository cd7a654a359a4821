//! The `UserRecord` entity.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used by the API for `date_of_birth`.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// One fetched user profile.
///
/// Only the fields the views display are kept; anything else the API sends
/// (`uid`, `address`, `employment`, ...) is ignored during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Identifier, stable for list-key purposes
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub gender: String,
    /// Date of birth as sent by the API (`YYYY-MM-DD`)
    pub date_of_birth: String,
    pub phone_number: String,
    /// Avatar image URL
    pub avatar: String,
}

impl UserRecord {
    /// First and last name separated by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Upper-cased initials used in place of the avatar image.
    ///
    /// Falls back to `?` when both names are empty.
    #[must_use]
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    /// Parsed date of birth, if the API value is a valid `YYYY-MM-DD` date.
    #[must_use]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_of_birth.trim(), BIRTH_DATE_FORMAT).ok()
    }

    /// Completed years of age on `today`.
    ///
    /// Returns `None` when the birth date does not parse or lies after `today`.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let born = self.birth_date()?;
        if born > today {
            return None;
        }

        let mut years = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name(), self.email)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::user;
    use super::*;

    #[test]
    fn test_full_name_joins_with_single_space() {
        let record = user(1, "Ada", "Lovelace");
        assert_eq!(record.full_name(), "Ada Lovelace");
        assert_eq!(record.to_string(), "Ada Lovelace <ada.lovelace@example.com>");
    }

    #[test]
    fn test_initials() {
        assert_eq!(user(1, "ada", "lovelace").initials(), "AL");
        assert_eq!(user(2, "Ída", "").initials(), "Í");
        assert_eq!(user(3, "", "").initials(), "?");
    }

    #[test]
    fn test_age_on() {
        let record = user(1, "Ada", "Lovelace");
        let before_birthday = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let on_birthday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        assert_eq!(record.age_on(before_birthday), Some(33));
        assert_eq!(record.age_on(on_birthday), Some(34));
    }

    #[test]
    fn test_age_on_unparseable_or_future_date() {
        let mut record = user(1, "Ada", "Lovelace");
        record.date_of_birth = "15/06/1990".to_string();
        assert!(record.birth_date().is_none());
        assert!(record.age_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).is_none());

        record.date_of_birth = "2099-01-01".to_string();
        assert!(record.age_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).is_none());
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let json = r#"{
            "id": 7, "uid": "abc", "password": "x",
            "first_name": "Grace", "last_name": "Hopper",
            "username": "grace.hopper", "email": "grace@example.com",
            "avatar": "https://robohash.org/7.png",
            "gender": "Female", "phone_number": "+1 555 0100",
            "social_insurance_number": "123", "date_of_birth": "1906-12-09",
            "employment": {"title": "Rear Admiral"}
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.full_name(), "Grace Hopper");
        assert_eq!(record.date_of_birth, "1906-12-09");
    }
}
