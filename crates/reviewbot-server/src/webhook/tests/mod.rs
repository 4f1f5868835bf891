//! Webhook handler tests.


use actix_web::{http::StatusCode, test, web::Data};
use pretty_assertions::assert_eq;
use reviewbot_aiapi_interface::MockAiService;
use reviewbot_config::Config;
use reviewbot_crypto::Signature;
use reviewbot_ghapi_interface::MockApiService;
use serde_json::Value;

use crate::{
    constants::{GITHUB_EVENT_HEADER, GITHUB_SIGNATURE_HEADER},
    server::{build_actix_app, AppContext},
};

const WEBHOOK_SECRET: &str = "test-webhook-secret";

fn test_config(disable_signature: bool) -> Config {
    let mut config = Config::from_env_no_version();
    config.name = "reviewbot".into();
    config.server.webhook_path = "/webhook".into();
    config.server.health_check_path = "/health".into();
    config.server.webhook_secret = WEBHOOK_SECRET.into();
    config.server.disable_webhook_signature = disable_signature;
    config
}

fn test_context(
    api_service: MockApiService,
    ai_service: MockAiService,
    config: Config,
) -> Data<AppContext> {
    Data::new(AppContext::new_with_adapters(
        config,
        Box::new(api_service),
        Box::new(ai_service),
    ))
}

fn webhook_request(event_type: &str, payload: &'static str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/webhook")
        .insert_header(("Content-Type", "application/json"))
        .insert_header((GITHUB_EVENT_HEADER, event_type))
        .set_payload(payload)
}

#[actix_web::test]
async fn ping_event_echoes_the_zen_message() {
    let context = test_context(MockApiService::new(), MockAiService::new(), test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let resp = test::call_service(
        &app,
        webhook_request("ping", fixtures::PING_EVENT_DATA).to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({"status": "pong", "zen": "Keep it simple"})
    );
}

#[actix_web::test]
async fn ping_event_without_zen_uses_a_placeholder() {
    let context = test_context(MockApiService::new(), MockAiService::new(), test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let resp = test::call_service(&app, webhook_request("ping", "{}").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["zen"], "No zen message");
}

#[actix_web::test]
async fn unsupported_event_type_is_acknowledged_and_ignored() {
    let context = test_context(MockApiService::new(), MockAiService::new(), test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let resp = test::call_service(
        &app,
        webhook_request("push", fixtures::PING_EVENT_DATA).to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Unsupported event type - ignored");
}

#[actix_web::test]
async fn missing_event_header_is_a_bad_request() {
    let context = test_context(MockApiService::new(), MockAiService::new(), test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(fixtures::PING_EVENT_DATA)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing event type header");
}

#[actix_web::test]
async fn unparseable_body_is_a_bad_request() {
    let context = test_context(MockApiService::new(), MockAiService::new(), test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let resp =
        test::call_service(&app, webhook_request("ping", "{not json").to_request()).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid JSON");
}

#[actix_web::test]
async fn empty_body_is_a_bad_request() {
    let context = test_context(MockApiService::new(), MockAiService::new(), test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let resp = test::call_service(&app, webhook_request("ping", "").to_request()).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Empty request body");
}

#[actix_web::test]
async fn pull_request_opened_runs_the_review_flow() {
    let api_service = {
        let mut svc = MockApiService::new();
        svc.expect_pulls_get_diff()
            .once()
            .withf(|owner, name, number| owner == "me" && name == "test" && number == &1214)
            .returning(|_, _, _| Ok("diff --git a/a b/a\n+change\n".into()));
        svc.expect_pulls_files_list()
            .once()
            .returning(|_, _, _| Ok(vec![]));
        svc.expect_comments_post()
            .once()
            .withf(|_, _, number, body| number == &1214 && body.contains("A generated review."))
            .returning(|_, _, _, _| Ok(1));
        svc
    };
    let ai_service = {
        let mut svc = MockAiService::new();
        svc.expect_text_generate()
            .once()
            .returning(|_| Ok("A generated review.".into()));
        svc
    };
    let context = test_context(api_service, ai_service, test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let resp = test::call_service(
        &app,
        webhook_request("pull_request", fixtures::PULL_REQUEST_OPENED_DATA).to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Pull request event processed");
}

#[actix_web::test]
async fn pull_request_labeled_is_processed_without_side_effects() {
    let context = test_context(MockApiService::new(), MockAiService::new(), test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let resp = test::call_service(
        &app,
        webhook_request("pull_request", fixtures::PULL_REQUEST_LABELED_DATA).to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Pull request event processed");
}

#[actix_web::test]
async fn issues_opened_posts_an_analysis() {
    let api_service = {
        let mut svc = MockApiService::new();
        svc.expect_comments_post()
            .once()
            .withf(|owner, name, number, _| owner == "me" && name == "test" && number == &89)
            .returning(|_, _, _, _| Ok(7));
        svc
    };
    let ai_service = {
        let mut svc = MockAiService::new();
        svc.expect_text_generate()
            .once()
            .returning(|_| Ok("A generated analysis.".into()));
        svc
    };
    let context = test_context(api_service, ai_service, test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let resp = test::call_service(
        &app,
        webhook_request("issues", fixtures::ISSUES_OPENED_DATA).to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Issue event processed");
}

#[actix_web::test]
async fn comment_without_mention_is_acknowledged_without_side_effects() {
    let context = test_context(MockApiService::new(), MockAiService::new(), test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let resp = test::call_service(
        &app,
        webhook_request("issue_comment", fixtures::ISSUE_COMMENT_CREATED_DATA).to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Comment event processed");
}

#[actix_web::test]
async fn valid_signature_lets_the_delivery_through() {
    let context = test_context(
        MockApiService::new(),
        MockAiService::new(),
        test_config(false),
    );
    let app = test::init_service(build_actix_app(context)).await;

    let digest = Signature::compute(fixtures::PING_EVENT_DATA.as_bytes(), WEBHOOK_SECRET);
    let resp = test::call_service(
        &app,
        webhook_request("ping", fixtures::PING_EVENT_DATA)
            .insert_header((GITHUB_SIGNATURE_HEADER, format!("sha256={digest}")))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "pong");
}

#[actix_web::test]
async fn missing_signature_header_is_forbidden() {
    let context = test_context(
        MockApiService::new(),
        MockAiService::new(),
        test_config(false),
    );
    let app = test::init_service(build_actix_app(context)).await;

    let err = test::try_call_service(
        &app,
        webhook_request("ping", fixtures::PING_EVENT_DATA).to_request(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.as_response_error().status_code(), StatusCode::FORBIDDEN);
    assert_eq!(err.to_string(), "Missing signature header");
}

#[actix_web::test]
async fn tampered_signature_is_forbidden() {
    let context = test_context(
        MockApiService::new(),
        MockAiService::new(),
        test_config(false),
    );
    let app = test::init_service(build_actix_app(context)).await;

    let mut digest = Signature::compute(fixtures::PING_EVENT_DATA.as_bytes(), WEBHOOK_SECRET);
    digest.replace_range(0..1, if digest.starts_with('0') { "1" } else { "0" });

    let err = test::try_call_service(
        &app,
        webhook_request("ping", fixtures::PING_EVENT_DATA)
            .insert_header((GITHUB_SIGNATURE_HEADER, format!("sha256={digest}")))
            .to_request(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.as_response_error().status_code(), StatusCode::FORBIDDEN);
    assert_eq!(err.to_string(), "Invalid signature");
}

#[actix_web::test]
async fn signature_without_expected_prefix_is_forbidden() {
    let context = test_context(
        MockApiService::new(),
        MockAiService::new(),
        test_config(false),
    );
    let app = test::init_service(build_actix_app(context)).await;

    let digest = Signature::compute(fixtures::PING_EVENT_DATA.as_bytes(), WEBHOOK_SECRET);
    let err = test::try_call_service(
        &app,
        webhook_request("ping", fixtures::PING_EVENT_DATA)
            .insert_header((GITHUB_SIGNATURE_HEADER, format!("sha1={digest}")))
            .to_request(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.as_response_error().status_code(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn empty_secret_rejects_every_delivery() {
    let mut config = test_config(false);
    config.server.webhook_secret = String::new();
    let context = test_context(MockApiService::new(), MockAiService::new(), config);
    let app = test::init_service(build_actix_app(context)).await;

    let digest = Signature::compute(fixtures::PING_EVENT_DATA.as_bytes(), "");
    let err = test::try_call_service(
        &app,
        webhook_request("ping", fixtures::PING_EVENT_DATA)
            .insert_header((GITHUB_SIGNATURE_HEADER, format!("sha256={digest}")))
            .to_request(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.as_response_error().status_code(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn empty_body_is_rejected_before_the_signature_check() {
    let context = test_context(
        MockApiService::new(),
        MockAiService::new(),
        test_config(false),
    );
    let app = test::init_service(build_actix_app(context)).await;

    let err = test::try_call_service(&app, webhook_request("ping", "").to_request())
        .await
        .unwrap_err();

    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(err.to_string(), "Empty request body");
}

#[actix_web::test]
async fn health_check_reports_app_and_version() {
    let context = test_context(MockApiService::new(), MockAiService::new(), test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["app"], "reviewbot");
}

#[actix_web::test]
async fn root_route_links_to_the_webhook_path() {
    let context = test_context(MockApiService::new(), MockAiService::new(), test_config(true));
    let app = test::init_service(build_actix_app(context)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["webhook_url"], "/webhook");
}
