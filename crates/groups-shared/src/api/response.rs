use serde::{Deserialize, Serialize};

/// Outcome of a create, update or delete command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub is_successful: bool,
    pub message: String,
    /// Id of the affected entity, 0 when there is none.
    pub id: i64,
}

impl CommandResponse {
    pub fn success(message: impl Into<String>, id: i64) -> Self {
        Self {
            is_successful: true,
            message: message.into(),
            id,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_successful: false,
            message: message.into(),
            id: 0,
        }
    }
}
