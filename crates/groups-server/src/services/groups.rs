use groups_shared::{
    api::{CommandResponse, GroupRequest},
    Group,
};

use super::{is_unique_violation, GROUP_NOT_FOUND};
use crate::db::DbPool;
use crate::error::AppError;

const TITLE_EXISTS: &str = "Group with the same title exists!";

#[derive(Clone)]
pub struct GroupService {
    db: DbPool,
}

impl GroupService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// All groups, ordered by title.
    pub async fn query(&self) -> Result<Vec<Group>, AppError> {
        let groups = sqlx::query_as::<_, Group>(
            "SELECT id, title FROM groups ORDER BY title COLLATE NOCASE, id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(groups)
    }

    pub async fn query_by_id(&self, id: i64) -> Result<Option<Group>, AppError> {
        let group = sqlx::query_as::<_, Group>("SELECT id, title FROM groups WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(group)
    }

    /// Request model for the edit form, `None` when the group does not exist.
    pub async fn edit(&self, id: i64) -> Result<Option<GroupRequest>, AppError> {
        Ok(self.query_by_id(id).await?.map(GroupRequest::from))
    }

    pub async fn create(&self, request: &GroupRequest) -> Result<CommandResponse, AppError> {
        let title = request.title.trim();
        let mut tx = self.db.begin().await?;

        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM groups WHERE title = ?1 COLLATE NOCASE")
                .bind(title)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_some() {
            return Ok(CommandResponse::error(TITLE_EXISTS));
        }

        let id = match sqlx::query("INSERT INTO groups (title) VALUES (?1)")
            .bind(title)
            .execute(&mut *tx)
            .await
        {
            Ok(result) => result.last_insert_rowid(),
            Err(e) if is_unique_violation(&e) => return Ok(CommandResponse::error(TITLE_EXISTS)),
            Err(e) => return Err(e.into()),
        };

        tx.commit().await?;

        tracing::info!(group_id = id, "Group created");
        Ok(CommandResponse::success("Group created successfully.", id))
    }

    pub async fn update(&self, request: &GroupRequest) -> Result<CommandResponse, AppError> {
        let title = request.title.trim();
        let mut tx = self.db.begin().await?;

        let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM groups WHERE id = ?1")
            .bind(request.id)
            .fetch_optional(&mut *tx)
            .await?;

        if found.is_none() {
            return Ok(CommandResponse::error(GROUP_NOT_FOUND));
        }

        let duplicate: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM groups WHERE id <> ?1 AND title = ?2 COLLATE NOCASE")
                .bind(request.id)
                .bind(title)
                .fetch_optional(&mut *tx)
                .await?;

        if duplicate.is_some() {
            return Ok(CommandResponse::error(TITLE_EXISTS));
        }

        let updated = sqlx::query("UPDATE groups SET title = ?1 WHERE id = ?2")
            .bind(title)
            .bind(request.id)
            .execute(&mut *tx)
            .await;

        match updated {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => return Ok(CommandResponse::error(TITLE_EXISTS)),
            Err(e) => return Err(e.into()),
        }

        tx.commit().await?;

        tracing::info!(group_id = request.id, "Group updated");
        Ok(CommandResponse::success(
            "Group updated successfully.",
            request.id,
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<CommandResponse, AppError> {
        let mut tx = self.db.begin().await?;

        let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM groups WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if found.is_none() {
            return Ok(CommandResponse::error(GROUP_NOT_FOUND));
        }

        let (members,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE group_id = ?1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        if members > 0 {
            return Ok(CommandResponse::error(
                "Group can't be deleted because it has relevant users!",
            ));
        }

        sqlx::query("DELETE FROM groups WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(group_id = id, "Group deleted");
        Ok(CommandResponse::success("Group deleted successfully.", id))
    }
}
