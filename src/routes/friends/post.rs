use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::{domain::FriendName, store::insert_friend, utils::see_other};

use super::{FriendForm, FriendsError};

#[instrument(name = "Add a friend", skip(form, pool), fields(friend_name = %form.first_name))]
pub async fn add_friend(
    form: web::Form<FriendForm>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, FriendsError> {
    let name =
        FriendName::parse(form.into_inner().first_name).map_err(FriendsError::Validation)?;

    insert_friend(&pool, name.as_ref()).await?;

    FlashMessage::success("Friend successfully added to the database!").send();
    Ok(see_other("/friends"))
}
