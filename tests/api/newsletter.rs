use wiremock::{
    matchers::{any, method, path},
    Mock, MockBuilder, ResponseTemplate,
};

use crate::helpers::spawn_app;

fn when_sending_an_email() -> MockBuilder {
    Mock::given(path("/send")).and(method("POST"))
}

fn signup_body(first_name: &str, last_name: &str, email: &str) -> String {
    serde_urlencoded::to_string(&serde_json::json!({
        "first_name": first_name,
        "last_name": last_name,
        "email": email,
    }))
    .unwrap()
}

#[actix_web::test]
async fn signup_sends_a_confirmation_email_and_records_the_subscriber() {
    // setup
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1) // then
        .mount(&app.email_server)
        .await;

    // when
    let response = app
        .post_signup(signup_body("Ada", "Lovelace", "Ada@Example.com"))
        .await;

    // then
    assert_eq!(200, response.status().as_u16());
    assert!(app.roster.contains("Ada Lovelace | ada@example.com"));
}

#[actix_web::test]
async fn the_confirmation_subject_title_cases_the_first_name() {
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_signup(signup_body("ada", "lovelace", "ada@example.com"))
        .await;

    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!("Thank you, Ada!", body["message"]["subject"]);
    assert_eq!(
        "Thank you for subscribing in my newsletter.",
        body["message"]["text"]
    );
}

#[actix_web::test]
async fn signup_with_an_invalid_email_sends_nothing() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_signup(signup_body("Ada", "Lovelace", "not-an-email"))
        .await;

    assert_eq!(400, response.status().as_u16());
    assert!(app.roster.is_empty());
}

#[actix_web::test]
async fn signup_with_missing_fields_returns_a_400() {
    let app = spawn_app().await;

    let test_cases = vec![
        ("last_name=Lovelace&email=ada%40example.com", "missing the first name"),
        ("first_name=Ada&email=ada%40example.com", "missing the last name"),
        ("first_name=Ada&last_name=Lovelace", "missing the email"),
        ("first_name=&last_name=Lovelace&email=ada%40example.com", "empty first name"),
        ("", "missing everything"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_signup(invalid_body.to_string()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
    }

    assert!(app.roster.is_empty());
}

#[actix_web::test]
async fn a_relay_failure_surfaces_as_a_500() {
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_signup(signup_body("Ada", "Lovelace", "ada@example.com"))
        .await;

    assert_eq!(500, response.status().as_u16());
    assert_eq!("Form Submit Error.", response.text().await.unwrap());
    // The original recorded the entry before attempting delivery.
    assert!(app.roster.contains("Ada Lovelace | ada@example.com"));
}

#[actix_web::test]
async fn the_legacy_signup_stores_the_email_verbatim() {
    let app = spawn_app().await;

    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_form("/old-form", signup_body("Ada", "Lovelace", "Ada@Example.com"))
        .await;

    assert_eq!(200, response.status().as_u16());
    // Unlike /form, no lowercasing on this path.
    assert!(app.roster.contains("Ada Lovelace | Ada@Example.com"));
    assert!(!app.roster.contains("Ada Lovelace | ada@example.com"));
}

#[actix_web::test]
async fn the_legacy_signup_rejects_an_unparseable_email_with_its_own_page() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_form("/old-form", signup_body("Ada", "Lovelace", "not-an-email"))
        .await;

    assert_eq!(400, response.status().as_u16());
    let body = response.text().await.unwrap();
    // The failure page belongs to /old-form, not the validated form.
    assert!(body.contains(r#"href="/old-form""#));
    assert!(!body.contains(r#"action="/form""#));
    assert!(app.roster.is_empty());
}

#[actix_web::test]
async fn the_legacy_signup_requires_all_fields() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_form("/old-form", "first_name=Ada&last_name=&email=".to_string())
        .await;

    assert_eq!(400, response.status().as_u16());
    let body = response.text().await.unwrap();
    assert!(body.contains("Form fields required."));
    assert!(app.roster.is_empty());
}
