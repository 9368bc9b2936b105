use chrono::Utc;
use groups_shared::{
    api::{CommandResponse, UserRequest},
    User,
};

use super::{hash_password_blocking, is_unique_violation, GROUP_NOT_FOUND, USER_NOT_FOUND};
use crate::db::DbPool;
use crate::error::AppError;

const USER_NAME_EXISTS: &str = "User with the same user name exists!";

const USER_COLUMNS: &str = "id, user_name, password, first_name, last_name, gender, birth_date, \
     registration_date, score, is_active, address, country_id, city_id, group_id";

#[derive(Clone)]
pub struct UserService {
    db: DbPool,
}

impl UserService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// All users, ordered by user name.
    pub async fn query(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY user_name COLLATE NOCASE, id"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(users)
    }

    pub async fn query_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user =
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"))
                .bind(id)
                .fetch_optional(&self.db)
                .await?;

        Ok(user)
    }

    pub async fn query_by_group(&self, group_id: i64) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE group_id = ?1 ORDER BY user_name COLLATE NOCASE, id"
        ))
        .bind(group_id)
        .fetch_all(&self.db)
        .await?;

        Ok(users)
    }

    /// Request model for the edit form. The stored password is never exposed.
    pub async fn edit(&self, id: i64) -> Result<Option<UserRequest>, AppError> {
        Ok(self.query_by_id(id).await?.map(UserRequest::from))
    }

    pub async fn create(&self, request: &UserRequest) -> Result<CommandResponse, AppError> {
        let user_name = request.user_name.trim();
        let password = hash_password_blocking(request.password.clone()).await?;
        let mut tx = self.db.begin().await?;

        if let Some(message) = Self::conflict(&mut tx, 0, user_name, request.group_id).await? {
            return Ok(CommandResponse::error(message));
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO users (user_name, password, first_name, last_name, gender, birth_date,
                               registration_date, score, is_active, address, country_id, city_id, group_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
        )
        .bind(user_name)
        .bind(&password)
        .bind(trimmed(&request.first_name))
        .bind(trimmed(&request.last_name))
        .bind(request.gender)
        .bind(request.birth_date)
        .bind(Utc::now())
        .bind(request.score)
        .bind(request.is_active)
        .bind(trimmed(&request.address))
        .bind(request.country_id)
        .bind(request.city_id)
        .bind(request.group_id)
        .execute(&mut *tx)
        .await;

        let id = match inserted {
            Ok(result) => result.last_insert_rowid(),
            Err(e) if is_unique_violation(&e) => {
                return Ok(CommandResponse::error(USER_NAME_EXISTS))
            }
            Err(e) => return Err(e.into()),
        };

        tx.commit().await?;

        tracing::info!(user_id = id, "User created");
        Ok(CommandResponse::success("User created successfully.", id))
    }

    /// Updates a user. An empty password keeps the stored hash.
    pub async fn update(&self, request: &UserRequest) -> Result<CommandResponse, AppError> {
        let user_name = request.user_name.trim();
        let new_password = if request.password.is_empty() {
            None
        } else {
            Some(hash_password_blocking(request.password.clone()).await?)
        };
        let mut tx = self.db.begin().await?;

        let stored: Option<(String,)> = sqlx::query_as("SELECT password FROM users WHERE id = ?1")
            .bind(request.id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some((stored_password,)) = stored else {
            return Ok(CommandResponse::error(USER_NOT_FOUND));
        };

        if let Some(message) =
            Self::conflict(&mut tx, request.id, user_name, request.group_id).await?
        {
            return Ok(CommandResponse::error(message));
        }

        let password = new_password.unwrap_or(stored_password);

        let updated = sqlx::query(
            r#"
            UPDATE users
            SET user_name = ?1, password = ?2, first_name = ?3, last_name = ?4, gender = ?5,
                birth_date = ?6, score = ?7, is_active = ?8, address = ?9, country_id = ?10,
                city_id = ?11, group_id = ?12
            WHERE id = ?13
            "#,
        )
        .bind(user_name)
        .bind(&password)
        .bind(trimmed(&request.first_name))
        .bind(trimmed(&request.last_name))
        .bind(request.gender)
        .bind(request.birth_date)
        .bind(request.score)
        .bind(request.is_active)
        .bind(trimmed(&request.address))
        .bind(request.country_id)
        .bind(request.city_id)
        .bind(request.group_id)
        .bind(request.id)
        .execute(&mut *tx)
        .await;

        match updated {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Ok(CommandResponse::error(USER_NAME_EXISTS))
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit().await?;

        tracing::info!(user_id = request.id, "User updated");
        Ok(CommandResponse::success(
            "User updated successfully.",
            request.id,
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<CommandResponse, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(CommandResponse::error(USER_NOT_FOUND));
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(CommandResponse::success("User deleted successfully.", id))
    }

    /// Checks the rules a user write must satisfy: a unique user name among
    /// other users and an existing group, if one is referenced.
    async fn conflict(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        id: i64,
        user_name: &str,
        group_id: Option<i64>,
    ) -> Result<Option<&'static str>, AppError> {
        let duplicate: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM users WHERE id <> ?1 AND user_name = ?2 COLLATE NOCASE")
                .bind(id)
                .bind(user_name)
                .fetch_optional(&mut **tx)
                .await?;

        if duplicate.is_some() {
            return Ok(Some(USER_NAME_EXISTS));
        }

        if let Some(group_id) = group_id {
            let group: Option<(i64,)> = sqlx::query_as("SELECT id FROM groups WHERE id = ?1")
                .bind(group_id)
                .fetch_optional(&mut **tx)
                .await?;

            if group.is_none() {
                return Ok(Some(GROUP_NOT_FOUND));
            }
        }

        Ok(None)
    }
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
