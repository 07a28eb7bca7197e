#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

use ideavault_lib::{
    core::errors::SubmissionError,
    ingest::{
        payload::SubmissionRequest,
        ports::{Notifier, Submitter},
    },
};

#[derive(Clone)]
pub struct RecordingSubmitter {
    pub requests: Arc<Mutex<Vec<SubmissionRequest>>>,
    response: Result<(), SubmissionError>,
}

impl RecordingSubmitter {
    pub fn accepting() -> Self {
        Self::responding(Ok(()))
    }

    pub fn responding(response: Result<(), SubmissionError>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
            response,
        }
    }

    pub fn recorded(&self) -> Vec<SubmissionRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl Submitter for RecordingSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmissionError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        self.response.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn recorded(&self) -> Vec<Notice> {
        self.notices.lock().expect("notices lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.notices
            .lock()
            .expect("notices lock")
            .push(Notice::Success(message.to_string()));
    }

    fn notify_error(&self, message: &str) {
        self.notices
            .lock()
            .expect("notices lock")
            .push(Notice::Error(message.to_string()));
    }
}

/// Minimal one-shot HTTP/1.1 server. Answers the first request with the
/// given status line and body and returns the raw request it received.
pub async fn spawn_stub(
    status_line: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let raw = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.flush().await.expect("flush response");
        raw
    });
    (format!("http://{addr}"), handle)
}

/// Base URL of a port nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf: Vec<u8> = vec![];
    let mut chunk = [0u8; 4096];
    loop {
        if let Some(header_end) = find(&buf, b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
        let read = socket.read(&mut chunk).await.expect("read request");
        if read == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..read]);
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

pub fn request_body(raw: &str) -> &str {
    raw.split_once("\r\n\r\n").map(|(_, body)| body).unwrap_or("")
}
