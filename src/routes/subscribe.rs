use actix_web::{http::header::ContentType, HttpResponse};

use crate::utils::current_year;

pub async fn subscribe_landing() -> HttpResponse {
    let year = current_year();

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8"/>
        <title>Subscribe to my newsletter</title>
    </head>
    <body>
        <h1>Subscribe to my newsletter</h1>
        <p>Monthly-ish updates, no spam. <a href="/form">Sign up here.</a></p>
        <footer>Copyright &copy; {year}</footer>
    </body>
</html>"#
        ))
}
