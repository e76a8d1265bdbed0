use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{error, instrument};

/// A row of the `friends` table. `id` is assigned by the store on
/// insert and never changes afterwards.
#[derive(Debug, sqlx::FromRow)]
pub struct Friend {
    pub id: i64,
    pub name: String,
    pub date_created: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("there is no friend with id {0}")]
    FriendNotFound(i64),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[instrument(skip(pool))]
pub async fn insert_friend(pool: &SqlitePool, name: &str) -> Result<Friend, StoreError> {
    let date_created = Utc::now();
    let result = sqlx::query("INSERT INTO friends (name, date_created) VALUES ($1, $2)")
        .bind(name)
        .bind(date_created)
        .execute(pool)
        .await
        .map_err(|e| {
            error!("Failed to execute query: {:?}", e);
            e
        })?;

    Ok(Friend {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        date_created,
    })
}

#[instrument(skip(pool))]
pub async fn get_friend(pool: &SqlitePool, friend_id: i64) -> Result<Friend, StoreError> {
    let friend = sqlx::query_as::<_, Friend>(
        "SELECT id, name, date_created FROM friends WHERE id = $1",
    )
    .bind(friend_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        error!("Failed to execute query: {:?}", e);
        e
    })?;

    friend.ok_or(StoreError::FriendNotFound(friend_id))
}

#[instrument(skip(pool))]
pub async fn update_friend_name(
    pool: &SqlitePool,
    friend_id: i64,
    new_name: &str,
) -> Result<(), StoreError> {
    sqlx::query("UPDATE friends SET name = $1 WHERE id = $2")
        .bind(new_name)
        .bind(friend_id)
        .execute(pool)
        .await
        .map_err(|e| {
            error!("Failed to execute query: {:?}", e);
            e
        })?;

    Ok(())
}

#[instrument(skip(pool))]
pub async fn delete_friend(pool: &SqlitePool, friend_id: i64) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM friends WHERE id = $1")
        .bind(friend_id)
        .execute(pool)
        .await
        .map_err(|e| {
            error!("Failed to execute query: {:?}", e);
            e
        })?;

    Ok(())
}

/// Fresh query on every call, sorted by name ascending.
#[instrument(skip(pool))]
pub async fn list_friends_ordered(pool: &SqlitePool) -> Result<Vec<Friend>, StoreError> {
    let friends = sqlx::query_as::<_, Friend>(
        "SELECT id, name, date_created FROM friends ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        error!("Failed to execute query: {:?}", e);
        e
    })?;

    Ok(friends)
}
