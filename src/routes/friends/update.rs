use actix_web::{http::header::ContentType, web, HttpResponse};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::{
    domain::FriendName,
    store::{get_friend, update_friend_name},
    utils::{current_year, see_other},
};

use super::{FriendForm, FriendsError};

#[instrument(name = "Edit friend form", skip(pool))]
pub async fn update_friend_form(
    path: web::Path<i64>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, FriendsError> {
    let friend = get_friend(&pool, path.into_inner()).await?;
    let year = current_year();

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8"/>
        <title>Update friend</title>
    </head>
    <body>
        <h1>Update friend</h1>
        <form method="post" action="/update_friends/{}">
            <label>First Name
                <input type="text" name="first_name" value="{}" />
            </label>
            <button type="submit">Update</button>
        </form>
        <footer>Copyright &copy; {year}</footer>
    </body>
</html>"#,
            friend.id, friend.name
        )))
}

#[instrument(name = "Update a friend", skip(form, pool))]
pub async fn update_friend(
    path: web::Path<i64>,
    form: web::Form<FriendForm>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, FriendsError> {
    let friend = get_friend(&pool, path.into_inner()).await?;
    let new_name =
        FriendName::parse(form.into_inner().first_name).map_err(FriendsError::Validation)?;

    update_friend_name(&pool, friend.id, new_name.as_ref()).await?;

    Ok(see_other("/friends_html"))
}
