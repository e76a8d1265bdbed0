use actix_web::{http::header::ContentType, web, HttpResponse};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::store::{insert_friend, list_friends_ordered};

use super::{listing_page, FriendsError};

#[derive(serde::Deserialize)]
pub struct LegacyFriendForm {
    first_name: Option<String>,
}

#[instrument(name = "Legacy friends listing", skip(pool))]
pub async fn legacy_friends_page(
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, FriendsError> {
    render_listing(&pool).await
}

/// The pre-validation endpoint: whatever arrives in `first_name` goes
/// straight into the store, and the refreshed listing renders inline
/// instead of redirecting.
#[instrument(name = "Legacy add a friend", skip_all)]
pub async fn legacy_add_friend(
    form: web::Form<LegacyFriendForm>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, FriendsError> {
    let name = form.into_inner().first_name.unwrap_or_default();
    insert_friend(&pool, &name).await?;

    render_listing(&pool).await
}

async fn render_listing(pool: &SqlitePool) -> Result<HttpResponse, FriendsError> {
    let friends = list_friends_ordered(pool).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(listing_page(&friends, "", "/friends_html")))
}
