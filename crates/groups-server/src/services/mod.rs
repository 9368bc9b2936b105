mod groups;
mod password;
mod users;

pub use groups::GroupService;
pub use password::{hash_password, hash_password_blocking, verify_password};
pub use users::UserService;

pub const GROUP_NOT_FOUND: &str = "Group not found!";
pub const USER_NOT_FOUND: &str = "User not found!";

/// True when the store rejected a write because of a unique index.
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(e) if e.is_unique_violation())
}
