//! Analyzer client against a local stub HTTP listener.

use std::io::{Read, Write};
use std::net::TcpListener;

use civi_common::{AnalyzerClient, AnalyzerError, Screen, SentimentScore, SessionState, ViewKind};

/// Serve exactly one canned HTTP response on an ephemeral port.
fn spawn_stub(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");

    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            match stream.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    request.extend_from_slice(&buf[..n]);
                    if request_complete(&request) {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
    });

    format!("http://{addr}/analyze")
}

/// True once the headers and the announced body length have arrived.
fn request_complete(request: &[u8]) -> bool {
    let Some(header_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&request[..header_end]);
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    request.len() >= header_end + 4 + content_length
}

#[tokio::test]
async fn successful_analysis_parses_the_score_array() {
    let endpoint = spawn_stub("200 OK", r#"[{"policy":"Gun-Control","score":42}]"#);
    let client = AnalyzerClient::new(endpoint, 5).expect("client");

    let scores = client
        .analyze("I believe in strict gun control")
        .await
        .expect("scores");
    assert_eq!(
        scores,
        vec![SentimentScore {
            policy: "Gun-Control".to_string(),
            score: 42,
        }]
    );
}

#[tokio::test]
async fn non_ok_responses_leave_the_session_untouched() {
    let endpoint = spawn_stub("500 Internal Server Error", r#"{"error":"boom"}"#);
    let client = AnalyzerClient::new(endpoint, 5).expect("client");

    let mut session = SessionState::new(150);
    assert!(session.statement.insert_str("anything at all"));

    let result = client.analyze(session.statement.as_str()).await;
    assert!(matches!(
        result,
        Err(AnalyzerError::Status(status)) if status.as_u16() == 500
    ));

    // The error path performs no transition and mutates no policy.
    assert_eq!(session.screen, Screen::Input);
    assert_eq!(session.view(), ViewKind::Input);
    assert!(session.policies.iter().all(|p| p.user_choice == 0));
}

#[tokio::test]
async fn malformed_bodies_are_a_transport_error() {
    let endpoint = spawn_stub("200 OK", r#"{"policy":"Gun-Control","score":42}"#);
    let client = AnalyzerClient::new(endpoint, 5).expect("client");

    let result = client.analyze("anything").await;
    assert!(matches!(result, Err(AnalyzerError::Transport(_))));
}

#[tokio::test]
async fn probe_counts_any_http_answer() {
    let endpoint = spawn_stub("405 Method Not Allowed", "");
    let client = AnalyzerClient::new(endpoint, 5).expect("client");
    assert!(client.probe().await);

    let unreachable = AnalyzerClient::new("http://127.0.0.1:1/analyze", 5).expect("client");
    assert!(!unreachable.probe().await);
}
