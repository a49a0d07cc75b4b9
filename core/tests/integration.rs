//! Drive the client and the view against the live reference server.
//!
//! # Design
//! Starts the server on a random port, then runs the initial load and a few
//! submissions over real HTTP through `ReqwestTransport`. Catches drift
//! between the core DTOs and the server's wire shapes.

use board_core::{
    ClientConfig, Message, MessageView, ReqwestTransport, RequestClient, Status, SubmitOutcome,
};
use board_server::{ServerConfig, SEED_TEXT};

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(board_server::run(listener, ServerConfig::default()));
    format!("http://{addr}/")
}

fn client(base_url: &str) -> RequestClient<ReqwestTransport> {
    RequestClient::new(ClientConfig::new(base_url), ReqwestTransport::default())
}

#[tokio::test]
async fn view_lifecycle() {
    let base_url = start_server().await;
    let mut view = MessageView::new(client(&base_url));

    // Step 1: initial load.
    view.load().await;
    let expected_base = base_url.trim_end_matches('/');
    match view.state().status() {
        Status::Ready { health, base_url } => {
            assert_eq!(health.status.as_deref(), Some("ok"));
            assert_eq!(health.service.as_deref(), Some("board-server"));
            assert_eq!(base_url, expected_base);
        }
        other => panic!("expected Ready, got {other:?}"),
    }
    assert_eq!(
        view.state().messages(),
        &[Message {
            id: 1,
            text: SEED_TEXT.to_string()
        }]
    );

    // Step 2: submit a padded draft.
    view.set_draft("  hello  ");
    let outcome = view.submit().await;
    assert_eq!(
        outcome,
        SubmitOutcome::Sent(Message {
            id: 2,
            text: "hello".to_string()
        })
    );
    assert_eq!(view.state().messages().len(), 2);
    assert_eq!(view.state().draft(), "");

    // Step 3: whitespace-only drafts never leave the client.
    view.set_draft("   ");
    assert_eq!(view.submit().await, SubmitOutcome::Skipped);
    assert_eq!(view.state().messages().len(), 2);

    // Step 4: a fresh view sees the server-side list.
    let mut other = MessageView::new(client(&base_url));
    other.load().await;
    assert_eq!(other.state().messages(), view.state().messages());
}

#[tokio::test]
async fn server_validation_error_surfaces_verbatim() {
    let base_url = start_server().await;
    let c = client(&base_url);

    let err = c
        .post("/api/messages", &serde_json::json!({"text": ""}))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "text is required");
}

#[tokio::test]
async fn unknown_route_reports_status_literal() {
    let base_url = start_server().await;
    let err = client(&base_url).get("/api/nope").await.unwrap_err();
    assert_eq!(err.message(), "HTTP 404");
}

#[tokio::test]
async fn unreachable_backend_fails_the_load() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut view = MessageView::new(client(&format!("http://{addr}")));
    view.load().await;

    assert!(matches!(view.state().status(), Status::Failed { .. }));
    assert!(view.state().status().to_string().starts_with("Error: "));
    assert!(view.state().messages().is_empty());
}
