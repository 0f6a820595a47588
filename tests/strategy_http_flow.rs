//! End-to-end tests for the strategy session HTTP API.
//!
//! The full router is driven with `tower::ServiceExt::oneshot` against an
//! in-memory store and a mock generator, so no network is involved.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::sync::Notify;
use tower::ServiceExt;

use content_strategist::adapters::http::{app_router, StrategyAppState};
use content_strategist::adapters::{
    InMemoryClipboard, InMemorySessionStore, LocalFileExporter, MockStrategyGenerator,
};
use content_strategist::application::MessagePacer;
use content_strategist::config::{PacingConfig, ServerConfig};
use content_strategist::domain::strategy::{
    CalendarEntry, Caption, HashtagPlan, PostIdea, StrategyDocument, FAILURE_NOTICE,
};
use content_strategist::domain::wizard::{CLOSING_MESSAGE, GREETING_MESSAGE};
use content_strategist::ports::GenerationError;

// =============================================================================
// Test Infrastructure
// =============================================================================

const ACME: [&str; 5] = ["Acme", "Coffee", "Urban professionals", "Instagram", "Awareness"];

struct TestApp {
    router: Router,
    generator: MockStrategyGenerator,
    clipboard: Arc<InMemoryClipboard>,
    export_dir: TempDir,
}

fn test_app(generator: MockStrategyGenerator, pacing: PacingConfig) -> TestApp {
    let export_dir = TempDir::new().unwrap();
    let clipboard = Arc::new(InMemoryClipboard::new());
    let state = StrategyAppState {
        store: Arc::new(InMemorySessionStore::new()),
        generator: Arc::new(generator.clone()),
        exporter: Arc::new(LocalFileExporter::new(export_dir.path())),
        clipboard: clipboard.clone(),
        pacer: MessagePacer::new(pacing),
        generation_timeout: Duration::from_secs(5),
    };
    TestApp {
        router: app_router(state, &ServerConfig::default()),
        generator,
        clipboard,
        export_dir,
    }
}

fn acme_document() -> StrategyDocument {
    StrategyDocument {
        overview: "Own the morning commute.".to_string(),
        calendar: vec![CalendarEntry {
            day: "Day 1".to_string(),
            theme: "Origin story".to_string(),
            content_type: "Reel".to_string(),
        }],
        post_ideas: vec![PostIdea {
            title: "Latte art fails".to_string(),
            hook: "We tried so you don't have to".to_string(),
        }],
        captions: vec![Caption {
            kind: "Promotional".to_string(),
            content: "Your first cup is on us.".to_string(),
        }],
        hashtags: HashtagPlan {
            broad: vec!["coffee".to_string()],
            niche: vec!["#specialtycoffee".to_string()],
            branded: vec!["AcmeBrew".to_string()],
        },
        ..Default::default()
    }
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec(), headers)
}

async fn send_json(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes, _) = send(router, method, uri, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn start(router: &Router) -> String {
    let (status, body) = send_json(router, "POST", "/api/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().unwrap().to_string()
}

async fn answer_all(router: &Router, id: &str, answers: &[&str]) -> Value {
    let mut last = Value::Null;
    for text in answers {
        let (status, body) = send_json(
            router,
            "POST",
            &format!("/api/sessions/{}/messages", id),
            Some(json!({ "text": text })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        last = body;
    }
    last
}

fn transcript_texts(session: &Value) -> Vec<String> {
    session["transcript"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["text"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Wizard
// =============================================================================

#[tokio::test]
async fn wizard_collects_five_answers_in_order() {
    let app = test_app(MockStrategyGenerator::new(), PacingConfig::immediate());
    let id = start(&app.router).await;

    let last = answer_all(&app.router, &id, &ACME).await;
    let session = &last["session"];

    assert_eq!(last["recorded"], "goal");
    assert_eq!(session["is_complete"], true);
    assert_eq!(session["step"], 5);
    assert_eq!(session["answers"]["audience"], "Urban professionals");
    assert_eq!(session["captured"]["value"], "Awareness");
    assert!(session["current_question"].is_null());

    let texts = transcript_texts(session);
    assert_eq!(texts.len(), 12);
    assert_eq!(texts[0], GREETING_MESSAGE);
    assert_eq!(texts[1], "What's your brand name?");
    assert_eq!(texts[2], "Acme");
    assert_eq!(texts[11], CLOSING_MESSAGE);
}

#[tokio::test]
async fn blank_message_is_ignored() {
    let app = test_app(MockStrategyGenerator::new(), PacingConfig::immediate());
    let id = start(&app.router).await;

    let (status, body) = send_json(
        &app.router,
        "POST",
        &format!("/api/sessions/{}/messages", id),
        Some(json!({ "text": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["recorded"].is_null());
    assert_eq!(body["session"]["step"], 0);
    assert_eq!(transcript_texts(&body["session"]).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn first_question_is_paced_and_reset_never_duplicates_it() {
    let app = test_app(MockStrategyGenerator::new(), PacingConfig::default());
    let id = start(&app.router).await;
    let uri = format!("/api/sessions/{}", id);

    let (_, session) = send_json(&app.router, "GET", &uri, None).await;
    assert_eq!(transcript_texts(&session), vec![GREETING_MESSAGE.to_string()]);

    tokio::time::sleep(Duration::from_millis(500)).await;
    let (_, session) = send_json(&app.router, "POST", &format!("{}/reset", uri), None).await;
    assert_eq!(transcript_texts(&session).len(), 1);

    tokio::time::sleep(Duration::from_millis(3000)).await;
    let (_, session) = send_json(&app.router, "GET", &uri, None).await;
    assert_eq!(
        transcript_texts(&session),
        vec![GREETING_MESSAGE.to_string(), "What's your brand name?".to_string()]
    );
}

// =============================================================================
// Generation and notepad
// =============================================================================

#[tokio::test]
async fn generated_document_renders_exports_and_copies() {
    let app = test_app(
        MockStrategyGenerator::new().with_document(acme_document()),
        PacingConfig::immediate(),
    );
    let id = start(&app.router).await;
    answer_all(&app.router, &id, &ACME).await;

    let (status, body) =
        send_json(&app.router, "POST", &format!("/api/sessions/{}/generate", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "generated");
    assert_eq!(body["session"]["generation"]["phase"], "ready");
    assert_eq!(app.generator.calls()[0].platform, "Instagram");

    let (status, text, headers) =
        send(&app.router, "GET", &format!("/api/sessions/{}/document", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/plain"));
    let text = String::from_utf8(text).unwrap();
    assert!(text.contains("Brand: Acme | Niche: Coffee"));
    assert!(text.contains("Platform: Instagram | Goal: Awareness"));
    assert!(text.contains("#coffee"));
    assert!(text.contains("#specialtycoffee"));
    assert!(!text.contains("##specialtycoffee"));
    assert!(text.contains("BRANDED:"));
    assert!(text.contains("#AcmeBrew"));

    let (status, exported, headers) = send(
        &app.router,
        "GET",
        &format!("/api/sessions/{}/document/export", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("filename=\"Acme_Content_Strategy.txt\""));
    assert_eq!(exported, text.as_bytes());
    let on_disk = std::fs::read(app.export_dir.path().join("Acme_Content_Strategy.txt")).unwrap();
    assert_eq!(on_disk, text.as_bytes());

    let (status, copied) = send_json(
        &app.router,
        "POST",
        &format!("/api/sessions/{}/document/copy", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(copied["text"], text.as_str());
    let session_id = id.parse().unwrap();
    assert_eq!(app.clipboard.contents(session_id).await.as_deref(), Some(text.as_str()));

    let (status, _) = send_json(&app.router, "DELETE", &format!("/api/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.clipboard.contents(session_id).await, None);
}

#[tokio::test]
async fn empty_branded_group_omits_its_section() {
    let mut document = acme_document();
    document.hashtags.branded.clear();
    let app = test_app(
        MockStrategyGenerator::new().with_document(document),
        PacingConfig::immediate(),
    );
    let id = start(&app.router).await;
    answer_all(&app.router, &id, &ACME).await;
    send(&app.router, "POST", &format!("/api/sessions/{}/generate", id), None).await;

    let (_, text, _) = send(&app.router, "GET", &format!("/api/sessions/{}/document", id), None).await;
    let text = String::from_utf8(text).unwrap();

    assert!(text.contains("NICHE SPECIFIC:"));
    assert!(!text.contains("BRANDED:"));
}

#[tokio::test]
async fn generation_before_wizard_completes_is_rejected() {
    let app = test_app(MockStrategyGenerator::new(), PacingConfig::immediate());
    let id = start(&app.router).await;
    answer_all(&app.router, &id, &ACME[..4]).await;

    let (status, body) =
        send_json(&app.router, "POST", &format!("/api/sessions/{}/generate", id), None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "WIZARD_INCOMPLETE");
    assert_eq!(app.generator.call_count(), 0);
}

#[tokio::test]
async fn concurrent_generate_makes_a_single_outbound_call() {
    let gate = Arc::new(Notify::new());
    let app = test_app(
        MockStrategyGenerator::new()
            .with_gate(gate.clone())
            .with_document(acme_document()),
        PacingConfig::immediate(),
    );
    let id = start(&app.router).await;
    answer_all(&app.router, &id, &ACME).await;
    let uri = format!("/api/sessions/{}/generate", id);

    let first = tokio::spawn({
        let router = app.router.clone();
        let uri = uri.clone();
        async move { send_json(&router, "POST", &uri, None).await }
    });
    while app.generator.call_count() == 0 {
        tokio::task::yield_now().await;
    }

    let (status, body) = send_json(&app.router, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "GENERATION_IN_PROGRESS");

    let (_, session) = send_json(&app.router, "GET", &format!("/api/sessions/{}", id), None).await;
    assert_eq!(session["generation"]["phase"], "loading");

    gate.notify_one();
    let (status, _) = first.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.generator.call_count(), 1);
}

#[tokio::test]
async fn failed_generation_keeps_previous_document() {
    let app = test_app(
        MockStrategyGenerator::new()
            .with_document(acme_document())
            .with_error(GenerationError::Rejected {
                status: 500,
                body: "upstream exploded".to_string(),
            }),
        PacingConfig::immediate(),
    );
    let id = start(&app.router).await;
    answer_all(&app.router, &id, &ACME).await;
    let generate = format!("/api/sessions/{}/generate", id);
    let document = format!("/api/sessions/{}/document", id);

    send(&app.router, "POST", &generate, None).await;
    let (_, before, _) = send(&app.router, "GET", &document, None).await;

    let (status, body) = send_json(&app.router, "POST", &generate, None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "GENERATION_FAILED");
    assert_eq!(body["message"], FAILURE_NOTICE);
    assert_eq!(body["details"]["session"]["generation"]["notice"], FAILURE_NOTICE);
    assert_eq!(body["details"]["session"]["generation"]["phase"], "ready");

    let (status, after, _) = send(&app.router, "GET", &document, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, after);
}

#[tokio::test]
async fn failure_without_document_reports_failed_phase() {
    let app = test_app(
        MockStrategyGenerator::new().with_error(GenerationError::network("refused")),
        PacingConfig::immediate(),
    );
    let id = start(&app.router).await;
    answer_all(&app.router, &id, &ACME).await;

    let (status, _) =
        send_json(&app.router, "POST", &format!("/api/sessions/{}/generate", id), None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, session) = send_json(&app.router, "GET", &format!("/api/sessions/{}", id), None).await;
    assert_eq!(session["generation"]["phase"], "failed");
    assert_eq!(session["generation"]["has_document"], false);
    assert_eq!(session["is_complete"], true);

    let (status, _, _) = send(&app.router, "GET", &format!("/api/sessions/{}/document", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reset_discards_document() {
    let app = test_app(
        MockStrategyGenerator::new().with_document(acme_document()),
        PacingConfig::immediate(),
    );
    let id = start(&app.router).await;
    answer_all(&app.router, &id, &ACME).await;
    send(&app.router, "POST", &format!("/api/sessions/{}/generate", id), None).await;

    let (status, session) =
        send_json(&app.router, "POST", &format!("/api/sessions/{}/reset", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["generation"]["phase"], "empty");
    assert_eq!(session["answers"]["brand"], "");
    let (status, _, _) = send(&app.router, "GET", &format!("/api/sessions/{}/document", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[tokio::test]
async fn malformed_and_unknown_ids() {
    let app = test_app(MockStrategyGenerator::new(), PacingConfig::immediate());

    let (status, body) = send_json(&app.router, "GET", "/api/sessions/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, body) = send_json(
        &app.router,
        "GET",
        "/api/sessions/00000000-0000-4000-8000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn delete_closes_session() {
    let app = test_app(MockStrategyGenerator::new(), PacingConfig::immediate());
    let id = start(&app.router).await;
    let uri = format!("/api/sessions/{}", id);

    let (status, _) = send_json(&app.router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send_json(&app.router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = test_app(MockStrategyGenerator::new(), PacingConfig::immediate());

    let (status, body) = send_json(&app.router, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
