use crate::helpers::spawn_app;

#[actix_web::test]
async fn health_check_works() {
    let app = spawn_app().await;

    let response = app.get("/health_check").await;

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[actix_web::test]
async fn the_home_page_renders() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert!(response.status().is_success());
    let html = response.text().await.unwrap();
    assert!(html.contains("My personal website"));
}

#[actix_web::test]
async fn the_about_page_renders() {
    let app = spawn_app().await;

    let html = app.get_html("/about").await;

    assert!(html.contains("About me"));
    assert!(html.contains("<li>fun</li>"));
}

#[actix_web::test]
async fn the_subscribe_landing_page_links_to_the_form() {
    let app = spawn_app().await;

    let html = app.get_html("/subscribe").await;

    assert!(html.contains(r#"href="/form""#));
}

#[actix_web::test]
async fn the_signup_form_renders() {
    let app = spawn_app().await;

    let html = app.get_html("/form").await;

    assert!(html.contains(r#"name="first_name""#));
    assert!(html.contains(r#"name="last_name""#));
    assert!(html.contains(r#"name="email""#));
}

#[actix_web::test]
async fn an_unknown_path_returns_the_404_page() {
    let app = spawn_app().await;

    let response = app.get("/no-such-page").await;

    assert_eq!(404, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("404"));
}
