// tests/health_server_tests.rs
use health_server::{BoxError, Check, Endpoint, HealthServer, ResponseMode};
use reqwest::StatusCode;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

fn pass(name: &str) -> Check {
    Check::from_fn(name, || Ok::<(), BoxError>(()))
}

fn fail(name: &str) -> Check {
    Check::from_fn(name, || Err::<(), _>("test-error"))
}

async fn start(endpoints: Vec<Endpoint>) -> (HealthServer, SocketAddr) {
    let mut server = HealthServer::new("127.0.0.1:0", endpoints).expect("valid endpoints");
    let addr = server.start().await.expect("server binds");
    (server, addr)
}

async fn get(addr: SocketAddr, path: &str) -> reqwest::Response {
    reqwest::get(format!("http://{}/{}", addr, path))
        .await
        .expect("request completes")
}

async fn status_of(addr: SocketAddr, path: &str) -> StatusCode {
    get(addr, path).await.status()
}

#[tokio::test]
async fn no_endpoints_serves_only_not_found() {
    let (mut server, addr) = start(vec![]).await;

    assert_eq!(status_of(addr, "").await, StatusCode::NOT_FOUND);
    assert_eq!(status_of(addr, "health").await, StatusCode::NOT_FOUND);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn single_endpoint_status_follows_checks() {
    let cases = vec![
        (vec![pass("test-check")], StatusCode::OK),
        (vec![fail("test-check")], StatusCode::SERVICE_UNAVAILABLE),
        (
            vec![pass("test-check1"), fail("test-check2")],
            StatusCode::SERVICE_UNAVAILABLE,
        ),
    ];

    for (checks, expected) in cases {
        let (mut server, addr) = start(vec![Endpoint::new("health").with_checks(checks)]).await;

        assert_eq!(status_of(addr, "").await, StatusCode::NOT_FOUND);
        assert_eq!(status_of(addr, "health").await, expected);

        server.shutdown().await.unwrap();
    }
}

#[tokio::test]
async fn endpoints_are_evaluated_independently() {
    let (mut server, addr) = start(vec![
        Endpoint::new("health/e1").with_checks([fail("a"), fail("b")]),
        Endpoint::new("health/e2").with_checks([pass("a"), pass("b")]),
    ])
    .await;

    assert_eq!(status_of(addr, "health").await, StatusCode::NOT_FOUND);
    assert_eq!(status_of(addr, "health/e1").await, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(status_of(addr, "health/e2").await, StatusCode::OK);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn response_modes_over_http() {
    let (mut server, addr) = start(vec![
        Endpoint::new("bare").with_check(pass("A")),
        Endpoint::new("text")
            .with_mode(ResponseMode::StatusText)
            .with_checks([pass("A"), fail("B")]),
        Endpoint::new("report")
            .with_mode(ResponseMode::DetailedReport)
            .with_checks([pass("A"), fail("B")]),
    ])
    .await;

    let bare = get(addr, "bare").await;
    assert_eq!(bare.status(), StatusCode::OK);
    assert_eq!(bare.text().await.unwrap(), "");

    let text = get(addr, "text").await;
    assert_eq!(text.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        text.headers()[reqwest::header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(text.text().await.unwrap(), "Service Unavailable");

    let report = get(addr, "report").await;
    assert_eq!(report.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        report.headers()[reqwest::header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    let body = report.text().await.unwrap();
    let a = body.find(r#"<tr class="passing"><td class="status">&#x2714;</td><td>A</td></tr>"#);
    let b = body.find(r#"<tr class="failing"><td class="status">&#x2718;</td><td>B</td></tr>"#);
    assert!(matches!((a, b), (Some(a), Some(b)) if a < b), "unexpected report: {}", body);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn panicking_check_does_not_take_the_server_down() {
    let broken = Check::from_async_fn("broken", || async {
        if true {
            panic!("boom");
        }
        Ok::<(), BoxError>(())
    });
    let (mut server, addr) = start(vec![
        Endpoint::new("broken").with_checks([pass("A"), broken]),
        Endpoint::new("fine").with_check(pass("A")),
    ])
    .await;

    assert_eq!(status_of(addr, "broken").await, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(status_of(addr, "fine").await, StatusCode::OK);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn shutdown_drains_in_flight_requests() {
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let slow = {
        let started = started.clone();
        let release = release.clone();
        Check::from_async_fn("slow", move || {
            let started = started.clone();
            let release = release.clone();
            async move {
                started.notify_one();
                release.notified().await;
                Ok::<(), BoxError>(())
            }
        })
    };
    let (mut server, addr) = start(vec![Endpoint::new("slow").with_check(slow)]).await;

    let request = tokio::spawn(async move { status_of(addr, "slow").await });
    started.notified().await;

    let shutdown = tokio::spawn(async move {
        server.shutdown().await.unwrap();
        server
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!shutdown.is_finished(), "shutdown must wait for the in-flight request");

    release.notify_one();
    assert_eq!(request.await.unwrap(), StatusCode::OK);
    let server = shutdown.await.unwrap();
    assert!(!server.is_running());
    assert!(reqwest::get(format!("http://{}/slow", addr)).await.is_err());
}
