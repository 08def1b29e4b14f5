//! In-process HTTP gateway stand-in for tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// What the mock answers to one request.
pub enum Reply {
    Json(u16, String),
    /// Advertise a longer body than is sent, then close the connection.
    Truncated(u16, String),
    /// Accept the request and never answer (until the client gives up).
    Hang,
}

/// One request as received: request line plus headers, and body.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub head: String,
    pub body: String,
}

impl Recorded {
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    pub fn has_header_named(&self, name: &str) -> bool {
        let prefix = format!("{}:", name.to_lowercase());
        self.head
            .lines()
            .any(|l| l.to_lowercase().starts_with(&prefix))
    }

    pub fn has_header(&self, name: &str, value: &str) -> bool {
        let wanted = format!("{}: {}", name.to_lowercase(), value.to_lowercase());
        self.head
            .lines()
            .any(|l| l.to_lowercase() == wanted)
    }
}

type Handler = Arc<dyn Fn(&str) -> Reply + Send + Sync>;

pub struct MockGateway {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockGateway {
    /// Start serving on an ephemeral port. `handler` receives the request line.
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&str) -> Reply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler: Handler = Arc::new(handler);

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let handler = handler.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    serve(stream, handler, recorded).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}/v1", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

/// Responds with canned `/models` and `/chat/completions` bodies.
pub fn ok_gateway(models_body: &'static str, reply_body: &'static str) -> impl Fn(&str) -> Reply {
    move |line: &str| {
        if line.starts_with("GET /v1/models") {
            Reply::Json(200, models_body.to_string())
        } else if line.starts_with("POST /v1/chat/completions") {
            Reply::Json(200, reply_body.to_string())
        } else {
            Reply::Json(404, r#"{"error":"not found"}"#.to_string())
        }
    }
}

async fn serve(mut stream: TcpStream, handler: Handler, recorded: Arc<Mutex<Vec<Recorded>>>) {
    let Some(request) = read_request(&mut stream).await else {
        return;
    };
    let reply = handler(request.request_line());
    recorded.lock().unwrap().push(request);

    match reply {
        Reply::Json(status, body) => write_response(&mut stream, status, body.len(), &body).await,
        Reply::Truncated(status, body) => {
            write_response(&mut stream, status, body.len() + 1000, &body).await
        }
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
    }
}

async fn write_response(stream: &mut TcpStream, status: u16, content_length: usize, body: &str) {
    let response = format!(
        "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status, content_length, body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

async fn read_request(stream: &mut TcpStream) -> Option<Recorded> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = buf.len().min(body_start + content_length);
    let body = String::from_utf8_lossy(&buf[body_start..body_end]).to_string();
    Some(Recorded { head, body })
}
