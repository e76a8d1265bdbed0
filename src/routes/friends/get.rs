use actix_web::{http::header::ContentType, web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::{store::list_friends_ordered, utils::flash_messages_html};

use super::{listing_page, FriendsError};

#[instrument(name = "Friends listing", skip(pool, flash_messages))]
pub async fn friends_page(
    pool: web::Data<SqlitePool>,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, FriendsError> {
    let friends = list_friends_ordered(&pool).await?;
    let flash_html = flash_messages_html(flash_messages);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(listing_page(&friends, &flash_html, "/friends")))
}
