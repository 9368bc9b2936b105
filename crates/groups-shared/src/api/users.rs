use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, NoneAsEmptyString};
use validator::Validate;

use super::{finite, not_blank, trimmed};
use crate::models::{Gender, User};

/// Form model for creating and editing users.
///
/// Empty optional inputs bind as `None`. An empty `password` on update keeps
/// the stored one. Every field may be absent.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserRequest {
    pub id: i64,
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = 30, message = "User name must be at most 30 characters.")
    )]
    pub user_name: String,
    #[validate(length(max = 64, message = "Password must be at most 64 characters."))]
    pub password: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(length(max = 50, message = "First name must be at most 50 characters."))]
    pub first_name: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(length(max = 50, message = "Last name must be at most 50 characters."))]
    pub last_name: Option<String>,
    #[serde_as(as = "DisplayFromStr")]
    pub gender: Gender,
    #[serde_as(as = "NoneAsEmptyString")]
    pub birth_date: Option<NaiveDate>,
    #[serde(deserialize_with = "finite")]
    #[validate(range(min = 0.0, max = 1_000_000.0, message = "Score must be between 0 and 1000000."))]
    pub score: f64,
    pub is_active: bool,
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(length(max = 500, message = "Address must be at most 500 characters."))]
    pub address: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub country_id: Option<i64>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub city_id: Option<i64>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub group_id: Option<i64>,
}

impl From<User> for UserRequest {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            password: String::new(),
            first_name: user.first_name,
            last_name: user.last_name,
            gender: user.gender,
            birth_date: user.birth_date,
            score: user.score,
            is_active: user.is_active,
            address: user.address,
            country_id: user.country_id,
            city_id: user.city_id,
            group_id: user.group_id,
        }
    }
}
