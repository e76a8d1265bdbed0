use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::{store, utils::see_other};

use super::FriendsError;

/// Registered for GET as well as POST; the original site deleted on
/// either method.
#[instrument(name = "Delete a friend", skip(pool))]
pub async fn delete_friend(
    path: web::Path<i64>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, FriendsError> {
    let friend = store::get_friend(&pool, path.into_inner()).await?;
    store::delete_friend(&pool, friend.id).await?;

    Ok(see_other("/friends_html"))
}
