use actix_web::{http::header::ContentType, HttpResponse};

use crate::utils::current_year;

pub async fn about() -> HttpResponse {
    let about_list = ["fun", "friendly", "handsome"];
    let items = about_list
        .iter()
        .fold(String::new(), |a, i| a + &format!("<li>{}</li>", i));
    let year = current_year();

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8"/>
        <title>About me</title>
    </head>
    <body>
        <h1>About me</h1>
        <ul>{items}</ul>
        <footer>Copyright &copy; {year}</footer>
    </body>
</html>"#
        ))
}
