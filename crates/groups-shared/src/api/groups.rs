use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{not_blank, trimmed};
use crate::models::Group;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GroupRequest {
    pub id: i64,
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Title must be at most 100 characters.")
    )]
    pub title: String,
}

impl From<Group> for GroupRequest {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            title: group.title,
        }
    }
}
