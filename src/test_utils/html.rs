use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_fragment(&text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

pub(crate) async fn assert_alert_success_message(response: Response<Body>, expected_message: &str) {
    let message = must_get_alert_message(response, "border-green-300").await;

    assert_eq!(message, expected_message);
}

pub(crate) async fn assert_alert_error_message(response: Response<Body>, expected_message: &str) {
    let message = must_get_alert_message(response, "border-red-300").await;

    assert_eq!(message, expected_message);
}

async fn must_get_alert_message(response: Response<Body>, want_style_class: &str) -> String {
    let html = parse_html_fragment(response).await;
    assert_valid_html(&html);

    let alert_container = html
        .select(&Selector::parse("#alert-container").unwrap())
        .next()
        .expect("No alert container found");
    let alert = alert_container
        .select(&Selector::parse(r#"div[role="alert"]"#).unwrap())
        .next()
        .expect("No alert found in the alert container");

    let classes = alert.attr("class").unwrap_or_default();
    assert!(
        classes.contains(want_style_class),
        "want an alert styled with {want_style_class:?}, got classes {classes:?}"
    );

    alert
        .select(&Selector::parse("p.text-sm.font-medium").unwrap())
        .next()
        .expect("No alert message found")
        .text()
        .collect::<String>()
        .trim()
        .to_owned()
}
