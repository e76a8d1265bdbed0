mod delete;
mod get;
mod legacy;
mod post;
mod update;

pub use delete::delete_friend;
pub use get::friends_page;
pub use legacy::{legacy_add_friend, legacy_friends_page};
pub use post::add_friend;
pub use update::{update_friend, update_friend_form};

use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse, ResponseError};

use crate::{
    routes::{error_chain_fmt, not_found_html},
    store::{Friend, StoreError},
    utils::current_year,
};

#[derive(thiserror::Error)]
pub enum FriendsError {
    #[error("{0}")]
    Validation(String),
    #[error("there is no friend with id {0}")]
    NotFound(i64),
    #[error("database entry error")]
    Store(#[source] sqlx::Error),
}

impl From<StoreError> for FriendsError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::FriendNotFound(id) => Self::NotFound(id),
            StoreError::Database(e) => Self::Store(e),
        }
    }
}

impl std::fmt::Debug for FriendsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for FriendsError {
    fn status_code(&self) -> StatusCode {
        match self {
            FriendsError::Validation(_) => StatusCode::BAD_REQUEST,
            FriendsError::NotFound(_) => StatusCode::NOT_FOUND,
            FriendsError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            FriendsError::NotFound(_) => HttpResponse::NotFound()
                .content_type(ContentType::html())
                .body(not_found_html()),
            _ => HttpResponse::build(self.status_code()).body(self.to_string()),
        }
    }
}

#[derive(serde::Deserialize)]
pub struct FriendForm {
    pub first_name: String,
}

pub(super) fn listing_rows(friends: &[Friend]) -> String {
    friends.iter().fold(String::new(), |a, friend| {
        a + &format!(
            r#"<li>{} <small>added {}</small>
                <a href="/update_friends/{}">edit</a>
                <a href="/delete_friends/{}">delete</a></li>
"#,
            friend.name,
            friend.date_created.format("%Y-%m-%d"),
            friend.id,
            friend.id
        )
    })
}

/// Shared between the validated listing and the legacy one; they only
/// differ in the form target and the flash block.
pub(super) fn listing_page(friends: &[Friend], flash_html: &str, form_action: &str) -> String {
    let rows = listing_rows(friends);
    let year = current_year();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8"/>
        <title>My friends list</title>
    </head>
    <body>
        {flash_html}
        <h1>My friends list</h1>
        <ul>
{rows}        </ul>
        <form method="post" action="{form_action}">
            <label>First Name
                <input type="text" placeholder="Enter a name" name="first_name" />
            </label>
            <button type="submit">Submit Me</button>
        </form>
        <footer>Copyright &copy; {year}</footer>
    </body>
</html>"#
    )
}
