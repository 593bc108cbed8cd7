//! Bind a real socket, serve one request, then shut down via the token.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use prompt_relay::config::Config;
use prompt_relay::gateway::Gateway;
use prompt_relay::llm::providers;
use prompt_relay::server::HttpServer;

#[tokio::test]
async fn serves_health_and_shuts_down() {
    let cfg = Config::test_default();
    let provider = providers::build(&cfg.llm, None).unwrap();
    let server = HttpServer::new(cfg.server.clone(), Arc::new(Gateway::new(provider)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = CancellationToken::new();
    let handle = tokio::spawn(server.serve(listener, shutdown.clone()));

    let body: serde_json::Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");

    let res = reqwest::Client::new()
        .post(format!("http://{addr}/api/chatgpt"))
        .json(&serde_json::json!({ "text": "hi", "action": "custom", "customPrompt": "Rephrase" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["response"], "[echo] Rephrase: hi");

    shutdown.cancel();
    let result = tokio::time::timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn bind_conflict_is_server_error() {
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let mut cfg = Config::test_default();
    cfg.server.port = taken.local_addr().unwrap().port();
    let provider = providers::build(&cfg.llm, None).unwrap();
    let server = HttpServer::new(cfg.server.clone(), Arc::new(Gateway::new(provider)));

    let err = server.run(CancellationToken::new()).await.unwrap_err();
    assert!(err.to_string().contains("bind failed"), "got: {err}");
}
