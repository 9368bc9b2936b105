use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[repr(i32)]
pub enum Gender {
    #[default]
    Unknown = 0,
    Male = 1,
    Female = 2,
    Other = 3,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Self::Unknown, Self::Male, Self::Female, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender: {0}")]
pub struct ParseGenderError(String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseGenderError(s.to_string()))
    }
}

/// A registered user. `password` holds the stored hash, never plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub user_name: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    pub registration_date: DateTime<Utc>,
    pub score: f64,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
}

impl User {
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" Other ".parse::<Gender>().unwrap(), Gender::Other);
        assert!("robot".parse::<Gender>().is_err());
    }

    #[test]
    fn gender_discriminants_are_stable() {
        assert_eq!(Gender::Unknown as i32, 0);
        assert_eq!(Gender::Male as i32, 1);
        assert_eq!(Gender::Female as i32, 2);
        assert_eq!(Gender::Other as i32, 3);
    }

    #[test]
    fn full_name_joins_present_parts() {
        let mut user = User {
            id: 1,
            user_name: "ada".into(),
            password: String::new(),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            gender: Gender::Female,
            birth_date: None,
            registration_date: Utc::now(),
            score: 0.0,
            is_active: true,
            address: None,
            country_id: None,
            city_id: None,
            group_id: None,
        };
        assert_eq!(user.full_name(), "Ada Lovelace");

        user.last_name = None;
        assert_eq!(user.full_name(), "Ada");

        user.first_name = None;
        assert_eq!(user.full_name(), "");
    }
}
